//! Plain node and edge records owned by a mind-map scene.
//!
//! These types carry data only. Layout, relaxation and rendering all operate
//! on them from the outside, which keeps the records free of any rendering
//! callbacks.

use std::fmt;

use crate::geometry::Point;

/// Index of a node within its scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in the scene's node list.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Index of an edge within its scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

impl EdgeId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// A mind-map node.
///
/// `depth` is 0 for the root and `parent.depth + 1` for every node created
/// from a tree. Manually added nodes start at depth 0 with no parent.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    label: String,
    depth: usize,
    position: Point,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn new(label: impl Into<String>, depth: usize, position: Point) -> Self {
        Self {
            label: label.into(),
            depth,
            position,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Sets the parent link (builder style).
    pub fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in input order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn set_parent(&mut self, parent: NodeId) {
        self.parent = Some(parent);
    }

    pub fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }
}

/// The derived geometry of a connector between two node positions.
///
/// `start` and `end` are the endpoints of the reference line. `control` is
/// the control point of the quadratic curve variant.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Connector {
    start: Point,
    end: Point,
    control: Point,
}

impl Connector {
    pub fn new(start: Point, end: Point, control: Point) -> Self {
        Self {
            start,
            end,
            control,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn control(&self) -> Point {
        self.control
    }

    /// Length of the reference line.
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// A connection between two nodes.
///
/// Edges reference nodes by index and never own them. The cached
/// [`Connector`] is refreshed by the scene whenever positions change.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    connector: Connector,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self {
            source,
            target,
            connector: Connector::default(),
        }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Returns true if this edge touches `node` at either end.
    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }

    pub fn connector(&self) -> &Connector {
        &self.connector
    }

    pub fn set_connector(&mut self, connector: Connector) {
        self.connector = connector;
    }
}
