//! The scene: the nodes and edges of one mind map.
//!
//! A [`Scene`] owns every node and edge. Edges refer to nodes by [`NodeId`]
//! and never outlive them since nodes are only removed wholesale by
//! [`Scene::clear`]. Every operation that moves a node refreshes the
//! connectors of the edges it touches.

use log::{debug, info};
use thiserror::Error;

use arbor_core::{
    geometry::{Bounds, Point, Size},
    graph::{Edge, EdgeId, Node, NodeId},
    tree::MindMapTree,
};

use crate::{
    config::LayoutConfig,
    layout::{self, RelaxParams, RelaxReport, build_connector},
};

/// Errors raised by manual scene edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("node {0} does not exist")]
    UnknownNode(NodeId),

    #[error("cannot connect node {0} to itself")]
    SelfConnection(NodeId),
}

/// The nodes and edges of one mind map.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    root: Option<NodeId>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a scene from a tree: radial layout, relaxation, then connectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arbor::{config::LayoutConfig, scene::Scene};
    /// # use arbor_core::tree::{Branch, MindMapTree};
    /// let tree = MindMapTree::new("Rust", vec![Branch::leaf("Ownership"), Branch::leaf("Traits")]);
    /// let (scene, report) = Scene::from_tree(&tree, &LayoutConfig::default());
    ///
    /// assert_eq!(scene.nodes().len(), 3);
    /// assert!(report.converged());
    /// ```
    pub fn from_tree(tree: &MindMapTree, config: &LayoutConfig) -> (Self, RelaxReport) {
        let mut scene = Self::new();
        let report = scene.load_tree(tree, config);
        (scene, report)
    }

    /// Replaces the scene contents with a freshly laid out tree.
    pub fn load_tree(&mut self, tree: &MindMapTree, config: &LayoutConfig) -> RelaxReport {
        info!(center = tree.center(); "Laying out mind map");
        self.clear();

        let (nodes, edges) = layout::layout_tree(tree, config).into_parts();
        self.nodes = nodes;
        self.edges = edges;
        self.root = Some(NodeId::new(0));

        self.relax(&config.relax_params())
    }

    /// Builds a scene from stored parts, picking up their connectors.
    ///
    /// Callers guarantee every edge endpoint indexes into `nodes`.
    pub(crate) fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>, root: Option<NodeId>) -> Self {
        let mut scene = Self { nodes, edges, root };
        scene.rebuild_connectors();
        scene
    }

    /// Adds a free-standing node at depth 0 and returns its id.
    pub fn add_node(&mut self, label: impl Into<String>, position: Point) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(label, 0, position));
        debug!(id:% = id; "Node added");
        id
    }

    /// Adds an edge between two existing nodes.
    ///
    /// This only adds a visual connection; parent and child links are left
    /// as they are.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] if either id is not in the scene and
    /// [`SceneError::SelfConnection`] if both ids are the same.
    pub fn connect(&mut self, source: NodeId, target: NodeId) -> Result<EdgeId, SceneError> {
        let start = self.position_of(source)?;
        let end = self.position_of(target)?;
        if source == target {
            return Err(SceneError::SelfConnection(source));
        }

        let id = EdgeId::new(self.edges.len());
        let mut edge = Edge::new(source, target);
        edge.set_connector(build_connector(start, end));
        self.edges.push(edge);

        debug!(source:% = source, target:% = target; "Nodes connected");
        Ok(id)
    }

    /// Moves one node, as a drag would, and refreshes the connectors touching it.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] if `id` is not in the scene.
    pub fn move_node(&mut self, id: NodeId, position: Point) -> Result<(), SceneError> {
        let node = self
            .nodes
            .get_mut(id.index())
            .ok_or(SceneError::UnknownNode(id))?;
        node.set_position(position);

        let nodes = &self.nodes;
        for edge in self.edges.iter_mut().filter(|edge| edge.touches(id)) {
            let start = nodes[edge.source().index()].position();
            let end = nodes[edge.target().index()].position();
            edge.set_connector(build_connector(start, end));
        }
        Ok(())
    }

    /// Runs the relaxation pass with the root pinned, then rebuilds connectors.
    pub fn relax(&mut self, params: &RelaxParams) -> RelaxReport {
        let report = layout::relax(&mut self.nodes, self.root, params);
        self.rebuild_connectors();
        report
    }

    /// Recomputes every connector from the current node positions.
    pub fn rebuild_connectors(&mut self) {
        layout::rebuild_connectors(&self.nodes, &mut self.edges);
    }

    /// Removes all nodes and edges.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.root = None;
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// The root of the laid out tree, if the scene came from one.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Union of all node rectangles of `node_size`, or `None` for an empty scene.
    pub fn bounds(&self, node_size: Size) -> Option<Bounds> {
        self.nodes
            .iter()
            .map(|node| Bounds::around(node.position(), node_size))
            .reduce(Bounds::union)
    }

    fn position_of(&self, id: NodeId) -> Result<Point, SceneError> {
        self.node(id)
            .map(Node::position)
            .ok_or(SceneError::UnknownNode(id))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use arbor_core::tree::Branch;

    fn sample_tree() -> MindMapTree {
        MindMapTree::new(
            "Rust",
            vec![
                Branch::new("Ownership", vec![Branch::leaf("Borrowing"), Branch::leaf("Moves")]),
                Branch::leaf("Traits"),
                Branch::new("Async", vec![Branch::leaf("Futures")]),
            ],
        )
    }

    fn assert_connectors_follow_nodes(scene: &Scene) {
        for edge in scene.edges() {
            let source = scene.node(edge.source()).unwrap();
            let target = scene.node(edge.target()).unwrap();
            assert_eq!(edge.connector().start(), source.position());
            assert_eq!(edge.connector().end(), target.position());
        }
    }

    #[test]
    fn test_from_tree_builds_all_nodes() {
        let (scene, _) = Scene::from_tree(&sample_tree(), &LayoutConfig::default());

        assert_eq!(scene.nodes().len(), 7);
        assert_eq!(scene.edges().len(), 6);
        assert_eq!(scene.root(), Some(NodeId::new(0)));
        assert_eq!(scene.nodes()[0].position(), Point::new(0.0, 0.0));
        assert_connectors_follow_nodes(&scene);
    }

    #[test]
    fn test_two_branches_are_not_moved() {
        let tree = MindMapTree::new("root", vec![Branch::leaf("a"), Branch::leaf("b")]);
        let (scene, report) = Scene::from_tree(&tree, &LayoutConfig::default());

        assert_eq!(report.passes(), 0);
        assert_approx_eq!(f32, scene.nodes()[1].position().x(), 500.0);
        assert_approx_eq!(f32, scene.nodes()[2].position().x(), -500.0);
    }

    #[test]
    fn test_load_tree_replaces_contents() {
        let mut scene = Scene::new();
        scene.add_node("stray", Point::new(1.0, 1.0));

        scene.load_tree(&MindMapTree::new("fresh", Vec::new()), &LayoutConfig::default());

        assert_eq!(scene.nodes().len(), 1);
        assert_eq!(scene.nodes()[0].label(), "fresh");
        assert!(scene.edges().is_empty());
    }

    #[test]
    fn test_manual_nodes_and_connect() {
        let mut scene = Scene::new();
        let a = scene.add_node("a", Point::new(0.0, 0.0));
        let b = scene.add_node("b", Point::new(100.0, 0.0));

        let edge = scene.connect(a, b).unwrap();
        assert_eq!(edge, EdgeId::new(0));
        assert_eq!(scene.node(b).unwrap().depth(), 0);
        assert_eq!(scene.node(b).unwrap().parent(), None);
        assert_eq!(scene.root(), None);
        assert_eq!(
            scene.edges()[0].connector().control(),
            Point::new(50.0, 20.0)
        );
    }

    #[test]
    fn test_connect_rejects_bad_ids() {
        let mut scene = Scene::new();
        let a = scene.add_node("a", Point::default());

        assert_eq!(scene.connect(a, a), Err(SceneError::SelfConnection(a)));
        assert_eq!(
            scene.connect(a, NodeId::new(7)),
            Err(SceneError::UnknownNode(NodeId::new(7)))
        );
        assert!(scene.edges().is_empty());
    }

    #[test]
    fn test_move_node_refreshes_connectors() {
        let (mut scene, _) = Scene::from_tree(&sample_tree(), &LayoutConfig::default());
        let moved = NodeId::new(1);

        scene.move_node(moved, Point::new(-42.0, 900.0)).unwrap();

        assert_eq!(scene.node(moved).unwrap().position(), Point::new(-42.0, 900.0));
        assert_connectors_follow_nodes(&scene);
        assert_eq!(
            scene.move_node(NodeId::new(99), Point::default()),
            Err(SceneError::UnknownNode(NodeId::new(99)))
        );
    }

    #[test]
    fn test_relax_after_drag_keeps_root_pinned() {
        let (mut scene, _) = Scene::from_tree(&sample_tree(), &LayoutConfig::default());
        scene.move_node(NodeId::new(2), Point::new(10.0, 10.0)).unwrap();

        scene.relax(&RelaxParams::default());

        assert_eq!(scene.nodes()[0].position(), Point::new(0.0, 0.0));
        assert_connectors_follow_nodes(&scene);
    }

    #[test]
    fn test_bounds_and_clear() {
        let mut scene = Scene::new();
        assert_eq!(scene.bounds(Size::new(100.0, 60.0)), None);

        scene.add_node("a", Point::new(0.0, 0.0));
        scene.add_node("b", Point::new(200.0, 100.0));
        let bounds = scene.bounds(Size::new(100.0, 60.0)).unwrap();
        assert_approx_eq!(f32, bounds.min_x(), -50.0);
        assert_approx_eq!(f32, bounds.max_x(), 250.0);
        assert_approx_eq!(f32, bounds.min_y(), -30.0);
        assert_approx_eq!(f32, bounds.max_y(), 130.0);

        scene.clear();
        assert!(scene.is_empty());
        assert!(scene.edges().is_empty());
    }
}
