//! Saving and loading mind maps.
//!
//! A saved map is a JSON document listing node labels and positions and the
//! connections between them by node index:
//!
//! ```json
//! {
//!   "nodes": [{"text": "Rust", "x": 0.0, "y": 0.0, "level": 0}],
//!   "connections": [{"start": 0, "end": 1}],
//!   "root": 0
//! }
//! ```
//!
//! `level` and `root` are optional, so maps that only record text and
//! positions load as well. Connector geometry is never stored; it is rebuilt
//! from the positions on load.

use std::collections::VecDeque;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use arbor_core::{
    geometry::Point,
    graph::{Edge, Node, NodeId},
};

use crate::scene::Scene;

/// Errors raised while reading or writing a saved map.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid map file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("connection {index} references node {node}, but the map has {count} nodes")]
    DanglingConnection {
        index: usize,
        node: usize,
        count: usize,
    },

    #[error("connection {index} joins node {node} to itself")]
    SelfConnection { index: usize, node: usize },

    #[error("root index {root} is out of range for {count} nodes")]
    InvalidRoot { root: usize, count: usize },
}

#[derive(Debug, Serialize, Deserialize)]
struct MapFile {
    nodes: Vec<StoredNode>,
    #[serde(default)]
    connections: Vec<StoredConnection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    root: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredNode {
    text: String,
    x: f32,
    y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    level: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredConnection {
    start: usize,
    end: usize,
}

/// Serializes `scene` to a pretty-printed JSON document.
///
/// # Errors
///
/// Returns [`StorageError::Json`] if serialization fails.
pub fn save(scene: &Scene) -> Result<String, StorageError> {
    let file = MapFile {
        nodes: scene
            .nodes()
            .iter()
            .map(|node| StoredNode {
                text: node.label().to_string(),
                x: node.position().x(),
                y: node.position().y(),
                level: Some(node.depth()),
            })
            .collect(),
        connections: scene
            .edges()
            .iter()
            .map(|edge| StoredConnection {
                start: edge.source().index(),
                end: edge.target().index(),
            })
            .collect(),
        root: scene.root().map(NodeId::index),
    };

    let json = serde_json::to_string_pretty(&file)?;
    info!(nodes = file.nodes.len(), connections = file.connections.len(); "Map saved");
    Ok(json)
}

/// Reads a scene from a saved JSON document.
///
/// Nodes keep their stored order, so connection indices map directly to
/// [`NodeId`]s. Parent links are not stored; when `root` is present they are
/// restored by following connections from `start` to `end` outwards from the
/// root.
///
/// # Errors
///
/// * [`StorageError::Json`] for invalid JSON or a missing `nodes` key
/// * [`StorageError::DanglingConnection`] if a connection references a
///   node index past the end of `nodes`
/// * [`StorageError::SelfConnection`] if a connection starts and ends at the
///   same node
/// * [`StorageError::InvalidRoot`] if `root` is out of range
pub fn load(json: &str) -> Result<Scene, StorageError> {
    let file: MapFile = serde_json::from_str(json)?;
    let count = file.nodes.len();

    if let Some(root) = file.root.filter(|&root| root >= count) {
        return Err(StorageError::InvalidRoot { root, count });
    }

    let mut edges = Vec::with_capacity(file.connections.len());
    for (index, connection) in file.connections.iter().enumerate() {
        for node in [connection.start, connection.end] {
            if node >= count {
                return Err(StorageError::DanglingConnection { index, node, count });
            }
        }
        if connection.start == connection.end {
            return Err(StorageError::SelfConnection {
                index,
                node: connection.start,
            });
        }
        edges.push(Edge::new(
            NodeId::new(connection.start),
            NodeId::new(connection.end),
        ));
    }

    let mut nodes: Vec<Node> = file
        .nodes
        .into_iter()
        .map(|stored| {
            Node::new(
                stored.text,
                stored.level.unwrap_or(0),
                Point::new(stored.x, stored.y),
            )
        })
        .collect();

    let root = file.root.map(NodeId::new);
    if let Some(root) = root {
        restore_links(&mut nodes, &edges, root);
    }

    debug!(nodes = nodes.len(), connections = edges.len(); "Map loaded");
    Ok(Scene::from_parts(nodes, edges, root))
}

/// Rebuilds parent and child links of a saved tree from its connections.
///
/// Links are assigned breadth first from `root`. A node reached a second
/// time keeps its first parent, so the links form a tree even when the
/// connections contain a cycle. Nodes the root cannot reach keep no parent.
fn restore_links(nodes: &mut [Node], edges: &[Edge], root: NodeId) {
    let mut outgoing = vec![Vec::new(); nodes.len()];
    for edge in edges {
        outgoing[edge.source().index()].push(edge.target());
    }

    let mut visited = vec![false; nodes.len()];
    visited[root.index()] = true;
    let mut queue = VecDeque::from([root]);
    while let Some(parent) = queue.pop_front() {
        for &child in &outgoing[parent.index()] {
            if visited[child.index()] {
                continue;
            }
            visited[child.index()] = true;
            nodes[child.index()].set_parent(parent);
            nodes[parent.index()].push_child(child);
            queue.push_back(child);
        }
    }
}
