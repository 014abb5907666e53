//! Arena holding every node created while partitioning.
//!
//! Nodes are stored in creation order and refer to their children by index.
//! Index 0 is always the root. Nodes are never removed, so the full tree is
//! available for inspection after construction.

use std::ops::Index;

use crate::error::{PartitionError, Result};
use crate::trees::node::Node;
use crate::types::{NodeIndex, Point};

/// The root node's index.
pub const ROOT: NodeIndex = 0;

/// A binary interval tree stored as an arena of nodes.
#[derive(Debug, Clone)]
pub struct IntervalTree {
    nodes: Vec<Node>,
}

impl IntervalTree {
    /// Create a tree whose root owns `points`.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        let root = Node::new(points)?;
        Ok(Self { nodes: vec![root] })
    }

    /// Add a node and return its index.
    pub(crate) fn push(&mut self, node: Node) -> NodeIndex {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Record `left` and `right` as the children of `parent`.
    ///
    /// Both children must be distinct existing nodes other than the root and
    /// `parent`.
    pub(crate) fn attach_children(
        &mut self,
        parent: NodeIndex,
        left: NodeIndex,
        right: NodeIndex,
    ) -> Result<()> {
        if left == right || left == ROOT || right == ROOT {
            return Err(PartitionError::invalid_argument(format!(
                "Cannot attach ({}, {}) as children of node {}",
                left, right, parent
            )));
        }
        let len = self.nodes.len();
        for idx in [left, right] {
            if idx >= len || idx == parent {
                return Err(PartitionError::not_found(format!(
                    "Invalid child index {} for node {}",
                    idx, parent
                )));
            }
        }
        self.node_mut(parent)?.attach_children(left, right)
    }

    /// Get the root node.
    pub fn root(&self) -> &Node {
        &self.nodes[ROOT]
    }

    /// Get a node by index.
    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        self.nodes.get(idx)
    }

    /// Get a node by index, failing with `NotFound`.
    pub fn node(&self, idx: NodeIndex) -> Result<&Node> {
        self.nodes
            .get(idx)
            .ok_or_else(|| PartitionError::not_found(format!("No node with index {}", idx)))
    }

    fn node_mut(&mut self, idx: NodeIndex) -> Result<&mut Node> {
        self.nodes
            .get_mut(idx)
            .ok_or_else(|| PartitionError::not_found(format!("No node with index {}", idx)))
    }

    /// Total number of nodes ever created.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always has its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over `(index, node)` in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &Node)> {
        self.nodes.iter().enumerate()
    }

    /// Indices of all leaves, in creation order.
    pub fn leaves(&self) -> Vec<NodeIndex> {
        self.iter()
            .filter(|(_, node)| node.is_leaf())
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn num_leaves(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Depth of the deepest node.
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth()).max().unwrap_or(0)
    }

    /// Number of points held by the root.
    pub fn num_points(&self) -> usize {
        self.root().len()
    }

    /// Find the leaf a value is routed to.
    ///
    /// Starting at the root, descends left when `value <= midpoint` of the
    /// current node and right otherwise, the same rule used to split points.
    /// The returned leaf need not contain `value` itself.
    pub fn locate(&self, value: Point) -> NodeIndex {
        let mut idx = ROOT;
        while let Some((left, right)) = self.nodes[idx].child_pair() {
            idx = if value <= self.nodes[idx].midpoint() {
                left
            } else {
                right
            };
        }
        idx
    }
}

impl Index<NodeIndex> for IntervalTree {
    type Output = Node;

    fn index(&self, idx: NodeIndex) -> &Node {
        &self.nodes[idx]
    }
}
