//! Radial tree placement.
//!
//! The root sits at the origin. Its children are spread over the full circle;
//! children of any other node are spread over a fixed angular window centred
//! on the angle at which that node was placed. Each level is placed on a
//! smaller ring than the one above it.

use log::{debug, trace};

use arbor_core::{
    geometry::{Point, degrees_to_radians},
    graph::{Edge, Node, NodeId},
    tree::{Branch, MindMapTree},
};

use crate::{config::LayoutConfig, layout::connector::rebuild_connectors};

/// The result of placing a tree.
///
/// Nodes are stored in depth-first pre-order, so the root is always
/// [`NodeId`] `0` and a node's subtree directly follows it. There is one edge
/// per parent/child link, in creation order.
#[derive(Debug, Clone)]
pub struct RadialLayout {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    angles: Vec<f32>,
}

impl RadialLayout {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Angle (radians) at which `id` was placed relative to its parent.
    ///
    /// The root has angle `0`.
    pub fn angle(&self, id: NodeId) -> Option<f32> {
        self.angles.get(id.index()).copied()
    }

    pub fn into_parts(self) -> (Vec<Node>, Vec<Edge>) {
        (self.nodes, self.edges)
    }
}

/// Places every node of `tree`.
///
/// Edges carry connectors built from the placed positions.
///
/// # Examples
///
/// ```
/// # use arbor::{config::LayoutConfig, layout::layout_tree};
/// # use arbor_core::tree::{Branch, MindMapTree};
/// let tree = MindMapTree::new("Rust", vec![Branch::leaf("Ownership"), Branch::leaf("Traits")]);
/// let layout = layout_tree(&tree, &LayoutConfig::default());
///
/// assert_eq!(layout.nodes().len(), 3);
/// assert_eq!(layout.edges().len(), 2);
/// assert_eq!(layout.nodes()[1].position().x(), 500.0);
/// ```
pub fn layout_tree(tree: &MindMapTree, config: &LayoutConfig) -> RadialLayout {
    let capacity = tree.node_count();
    let mut placer = Placer {
        config,
        branch_window: degrees_to_radians(config.branch_angle()),
        nodes: Vec::with_capacity(capacity),
        edges: Vec::with_capacity(capacity.saturating_sub(1)),
        angles: Vec::with_capacity(capacity),
    };

    placer.nodes.push(Node::new(tree.center(), 0, Point::default()));
    placer.angles.push(0.0);
    placer.place_children(NodeId::new(0), tree.branches());

    let Placer {
        nodes,
        mut edges,
        angles,
        ..
    } = placer;
    rebuild_connectors(&nodes, &mut edges);

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        depth = tree.max_depth();
        "Radial layout placed"
    );

    RadialLayout {
        nodes,
        edges,
        angles,
    }
}

struct Placer<'a> {
    config: &'a LayoutConfig,
    branch_window: f32,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    angles: Vec<f32>,
}

impl Placer<'_> {
    /// Ring radius for the children of a node at `depth`.
    fn child_radius(&self, depth: usize) -> f32 {
        let base = match depth {
            0 => self.config.initial_radius(),
            _ => self.config.level_spacing() * self.config.level_factor(depth - 1),
        };
        base * self.config.level_factor(depth)
    }

    /// Angle of child `index` (0-based) of `count` under a node at `depth`.
    fn child_angle(&self, depth: usize, parent_angle: f32, index: usize, count: usize) -> f32 {
        if depth == 0 {
            degrees_to_radians(index as f32 * (360.0 / count as f32))
        } else {
            let window = self.branch_window;
            parent_angle - window / 2.0 + window * (index + 1) as f32 / (count + 1) as f32
        }
    }

    fn place_children(&mut self, parent: NodeId, branches: &[Branch]) {
        if branches.is_empty() {
            return;
        }

        let (depth, origin) = {
            let node = &self.nodes[parent.index()];
            (node.depth(), node.position())
        };
        let parent_angle = self.angles[parent.index()];
        let radius = self.child_radius(depth);

        for (index, branch) in branches.iter().enumerate() {
            let angle = self.child_angle(depth, parent_angle, index, branches.len());
            let position = origin + Point::from_polar(radius, angle);

            let id = NodeId::new(self.nodes.len());
            trace!(
                id:% = id,
                label = branch.text(),
                depth = depth + 1,
                angle = angle;
                "Placed node"
            );

            self.nodes
                .push(Node::new(branch.text(), depth + 1, position).with_parent(parent));
            self.angles.push(angle);
            self.nodes[parent.index()].push_child(id);
            self.edges.push(Edge::new(parent, id));

            self.place_children(id, branch.children());
        }
    }
}
