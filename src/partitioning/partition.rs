//! The result of partitioning: the built tree and its leaves.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::trees::{IntervalTree, Node};
use crate::types::{MeanVariance, NodeIndex, Point};
use crate::utils::parallel::maybe_parallel_map;

/// Descriptive statistics for one leaf interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafSummary {
    /// Index of the leaf in the tree.
    pub node: NodeIndex,

    /// Smallest point in the leaf.
    pub left_end: f64,

    /// Largest point in the leaf.
    pub right_end: f64,

    /// Number of points.
    pub count: usize,

    pub mean: f64,

    /// Population variance.
    pub variance: f64,
}

impl LeafSummary {
    /// Summarize a node.
    pub fn from_node(node_index: NodeIndex, node: &Node) -> Self {
        Self {
            node: node_index,
            left_end: node.left_end(),
            right_end: node.right_end(),
            count: node.len(),
            mean: node.mean(),
            variance: node.variance(),
        }
    }

    pub fn width(&self) -> f64 {
        self.right_end - self.left_end
    }
}

/// A partition of the input points into leaf intervals.
///
/// Leaves are kept in the order they were created during the build, which
/// is not in general sorted by position.
#[derive(Debug, Clone)]
pub struct Partition {
    tree: IntervalTree,
    leaves: Vec<NodeIndex>,
}

impl Partition {
    /// Collect the leaves of a built tree.
    pub fn new(tree: IntervalTree) -> Self {
        let leaves = tree.leaves();
        Self { tree, leaves }
    }

    /// The full tree, including interior nodes.
    pub fn tree(&self) -> &IntervalTree {
        &self.tree
    }

    /// Consume the partition and return the tree.
    pub fn into_tree(self) -> IntervalTree {
        self.tree
    }

    /// Leaf indices in creation order.
    pub fn leaves(&self) -> &[NodeIndex] {
        &self.leaves
    }

    /// Leaf nodes in creation order.
    pub fn leaf_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.leaves.iter().filter_map(move |&idx| self.tree.get(idx))
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// A partition always has at least one leaf.
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Total number of points across all leaves.
    pub fn num_points(&self) -> usize {
        self.leaf_nodes().map(|n| n.len()).sum()
    }

    /// `(mean, variance)` of every leaf, in creation order.
    pub fn mean_variance(&self) -> Vec<MeanVariance> {
        self.leaf_nodes().map(|n| (n.mean(), n.variance())).collect()
    }

    /// Per-leaf summaries, in creation order.
    pub fn summaries(&self) -> Vec<LeafSummary> {
        maybe_parallel_map(&self.leaves, |&idx| {
            LeafSummary::from_node(idx, &self.tree[idx])
        })
    }

    /// Per-leaf summaries ordered by position on the line.
    pub fn sorted_summaries(&self) -> Vec<LeafSummary> {
        let mut summaries = self.summaries();
        summaries.sort_by_key(|s| OrderedFloat(s.left_end));
        summaries
    }

    /// The leaf `value` is routed to.
    pub fn leaf_for(&self, value: Point) -> NodeIndex {
        self.tree.locate(value)
    }
}
