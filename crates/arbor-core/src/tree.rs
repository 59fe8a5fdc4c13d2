//! The nested branch records a mind map is generated from.
//!
//! A [`MindMapTree`] mirrors the JSON structure requested from the generative
//! model:
//!
//! ```json
//! {
//!     "center": "main topic",
//!     "branches": [
//!         { "text": "branch topic", "children": [ { "text": "sub-topic" } ] }
//!     ]
//! }
//! ```
//!
//! Missing `branches` and `children` arrays default to empty.

use serde::{Deserialize, Serialize};

/// A subtree record: a label and its ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Branch>,
}

impl Branch {
    /// Creates a branch with the given children.
    pub fn new(text: impl Into<String>, children: Vec<Branch>) -> Self {
        Self {
            text: text.into(),
            children,
        }
    }

    /// Creates a branch without children.
    pub fn leaf(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &[Branch] {
        &self.children
    }

    /// Number of records in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Branch::node_count).sum::<usize>()
    }

    /// Height of this subtree; a leaf has height 1.
    fn height(&self) -> usize {
        1 + self.children.iter().map(Branch::height).max().unwrap_or(0)
    }
}

/// A whole mind map: the central topic and its top-level branches.
///
/// # Examples
///
/// ```
/// # use arbor_core::tree::{Branch, MindMapTree};
/// let tree = MindMapTree::new(
///     "Rust",
///     vec![
///         Branch::new("Ownership", vec![Branch::leaf("Borrowing")]),
///         Branch::leaf("Traits"),
///     ],
/// );
/// assert_eq!(tree.node_count(), 4);
/// assert_eq!(tree.max_depth(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MindMapTree {
    center: String,
    #[serde(default)]
    branches: Vec<Branch>,
}

impl MindMapTree {
    pub fn new(center: impl Into<String>, branches: Vec<Branch>) -> Self {
        Self {
            center: center.into(),
            branches,
        }
    }

    /// The label of the root node.
    pub fn center(&self) -> &str {
        &self.center
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// Total number of nodes the tree lays out to, root included.
    pub fn node_count(&self) -> usize {
        1 + self.branches.iter().map(Branch::node_count).sum::<usize>()
    }

    /// Depth of the deepest node; a root-only tree has depth 0.
    pub fn max_depth(&self) -> usize {
        self.branches.iter().map(Branch::height).max().unwrap_or(0)
    }
}
