//! Adaptive midpoint partitioner.
//!
//! The partitioner starts from a single root node holding every point and
//! works through a growing worklist. Each visited node is split at its
//! midpoint when it is both wider than `2 * delta` and holds more than
//! `max_leaf_points` points; the two children are appended to the worklist.
//! Once the worklist is exhausted every node that was never split is a leaf,
//! and the leaves partition the input.

use log::{debug, trace};

use crate::config::PartitionConfig;
use crate::error::{PartitionError, Result};
use crate::partitioning::partition::Partition;
use crate::trees::{IntervalTree, Node, ROOT};
use crate::types::{NodeIndex, Point};

/// Builds interval trees for a fixed configuration.
#[derive(Debug, Clone)]
pub struct Partitioner {
    config: PartitionConfig,
}

impl Partitioner {
    /// Create a partitioner, validating the configuration.
    pub fn new(config: PartitionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a partitioner with the given delta and default settings otherwise.
    pub fn with_delta(delta: f64) -> Result<Self> {
        Self::new(PartitionConfig::new(delta))
    }

    /// Get the configuration.
    pub fn config(&self) -> &PartitionConfig {
        &self.config
    }

    /// Whether `node` is wide enough and holds enough points to be split.
    pub fn should_split(&self, node: &Node) -> bool {
        node.width() > self.config.min_split_width() && node.len() > self.config.max_leaf_points
    }

    /// Split the node at `idx` if it qualifies.
    ///
    /// Points `<= midpoint` go to the left child, the rest to the right. Both
    /// children are attached to the node and appended to `worklist`. A split
    /// that would leave either side empty is skipped and the node stays a
    /// leaf. Returns whether a split happened.
    pub fn split(
        &self,
        tree: &mut IntervalTree,
        idx: NodeIndex,
        worklist: &mut Vec<NodeIndex>,
    ) -> Result<bool> {
        let node = tree.node(idx)?;
        if !node.is_leaf() {
            return Err(PartitionError::already_split(format!(
                "Node {} has already been split",
                idx
            )));
        }
        if !self.should_split(node) {
            trace!(
                "node {} is a leaf: {} points, width {}",
                idx,
                node.len(),
                node.width()
            );
            return Ok(false);
        }

        let midpoint = node.midpoint();
        let (left, right): (Vec<Point>, Vec<Point>) =
            node.points().iter().copied().partition(|&p| p <= midpoint);

        if left.is_empty() || right.is_empty() {
            // Happens when the midpoint rounds onto an end (adjacent floats)
            // or when `left_end + right_end` overflows to infinity.
            trace!("node {} kept as a leaf: one-sided split at {}", idx, midpoint);
            return Ok(false);
        }

        let depth = node.depth() + 1;
        trace!(
            "splitting node {} at {}: {} left, {} right",
            idx,
            midpoint,
            left.len(),
            right.len()
        );

        let left_idx = tree.push(Node::with_depth(left, depth)?);
        let right_idx = tree.push(Node::with_depth(right, depth)?);
        tree.attach_children(idx, left_idx, right_idx)?;

        worklist.push(left_idx);
        worklist.push(right_idx);
        Ok(true)
    }

    /// Build the full interval tree over `points`.
    ///
    /// Fails with `InvalidInput` if `points` is empty or contains a
    /// non-finite value.
    pub fn build(&self, points: &[Point]) -> Result<IntervalTree> {
        debug!(
            "building interval tree over {} points (delta = {}, max_leaf_points = {})",
            points.len(),
            self.config.delta,
            self.config.max_leaf_points
        );

        let mut tree = IntervalTree::new(points.to_vec())?;
        let mut worklist = vec![ROOT];
        let mut cursor = 0;

        while cursor < worklist.len() {
            let idx = worklist[cursor];
            cursor += 1;
            self.split(&mut tree, idx, &mut worklist)?;
        }

        debug!(
            "built interval tree: {} nodes, {} leaves, depth {}",
            tree.len(),
            tree.num_leaves(),
            tree.max_depth()
        );
        Ok(tree)
    }

    /// Indices of the leaves of `tree`, in creation order.
    pub fn collect_leaves(tree: &IntervalTree) -> Vec<NodeIndex> {
        tree.leaves()
    }

    /// Build the tree over `points` and collect its leaves.
    pub fn partition(&self, points: &[Point]) -> Result<Partition> {
        let tree = self.build(points)?;
        Ok(Partition::new(tree))
    }
}

/// Partition `points` with the given delta and default settings otherwise.
pub fn partition(points: &[Point], delta: f64) -> Result<Partition> {
    Partitioner::with_delta(delta)?.partition(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    const EXAMPLE: [f64; 8] = [0.0, 1.0, 2.0, 4.0, 5.0, 8.0, 9.0, 12.0];

    #[test]
    fn test_invalid_config_rejected() {
        let err = Partitioner::with_delta(0.0).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_should_split() {
        let partitioner = Partitioner::with_delta(0.05).unwrap();
        assert!(partitioner.should_split(&Node::new(vec![0.0, 1.0, 2.0]).unwrap()));
        // Too few points.
        assert!(!partitioner.should_split(&Node::new(vec![0.0, 10.0]).unwrap()));
        // Too narrow: width 0.1 is not > 2 * 0.05.
        assert!(!partitioner.should_split(&Node::new(vec![0.0, 0.05, 0.1]).unwrap()));
    }

    #[test]
    fn test_split_appends_children() {
        let partitioner = Partitioner::with_delta(0.05).unwrap();
        let mut tree = IntervalTree::new(vec![8.0, 9.0, 12.0]).unwrap();
        let mut worklist = vec![ROOT];

        assert!(partitioner.split(&mut tree, ROOT, &mut worklist).unwrap());
        assert_eq!(worklist, vec![ROOT, 1, 2]);
        assert_eq!(tree.node(1).unwrap().points(), &[8.0, 9.0]);
        assert_eq!(tree.node(2).unwrap().points(), &[12.0]);
        assert_eq!(tree.node(1).unwrap().depth(), 1);
    }

    #[test]
    fn test_split_twice_fails() {
        let partitioner = Partitioner::with_delta(0.05).unwrap();
        let mut tree = IntervalTree::new(vec![8.0, 9.0, 12.0]).unwrap();
        let mut worklist = vec![ROOT];

        partitioner.split(&mut tree, ROOT, &mut worklist).unwrap();
        let err = partitioner.split(&mut tree, ROOT, &mut worklist).unwrap_err();
        assert_eq!(err.code(), ErrorCode::AlreadySplit);
        // No orphan nodes were created by the failed attempt.
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_example_tree_shape() {
        let partitioner = Partitioner::with_delta(0.05).unwrap();
        let tree = partitioner.build(&EXAMPLE).unwrap();

        assert_eq!(tree.len(), 9);
        assert_eq!(tree.node(1).unwrap().points(), &[0.0, 1.0, 2.0, 4.0, 5.0]);
        assert_eq!(tree.node(2).unwrap().points(), &[8.0, 9.0, 12.0]);
        assert_eq!(tree.root().midpoint(), 6.0);
        assert_eq!(tree.node(1).unwrap().midpoint(), 2.5);
        assert_eq!(tree.max_depth(), 3);

        let leaves: Vec<&[f64]> = Partitioner::collect_leaves(&tree)
            .into_iter()
            .map(|idx| tree.node(idx).unwrap().points())
            .collect();
        assert_eq!(
            leaves,
            vec![
                &[4.0, 5.0][..],
                &[8.0, 9.0][..],
                &[12.0][..],
                &[0.0, 1.0][..],
                &[2.0][..],
            ]
        );
    }

    #[test]
    fn test_identical_points_never_split() {
        let partitioner = Partitioner::with_delta(1e-9).unwrap();
        let tree = partitioner.build(&[3.5; 100]).unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree.root().is_leaf());
    }

    #[test]
    fn test_adjacent_floats_partition_cleanly() {
        let a = 1.0f64;
        let b = f64::from_bits(a.to_bits() + 1);
        let partitioner = Partitioner::with_delta(f64::MIN_POSITIVE).unwrap();
        let tree = partitioner.build(&[a, a, b]).unwrap();

        let total: usize = tree.leaves().iter().map(|&i| tree.node(i).unwrap().len()).sum();
        assert_eq!(total, 3);
        for idx in tree.leaves() {
            assert!(!tree.node(idx).unwrap().is_empty());
        }
    }

    #[test]
    fn test_overflowing_midpoint_keeps_leaf() {
        let points = [1e308, 1.2e308, 1.5e308];
        let partitioner = Partitioner::with_delta(0.05).unwrap();
        let tree = partitioner.build(&points).unwrap();

        let root = tree.root();
        assert!(partitioner.should_split(root));
        assert_eq!(root.midpoint(), f64::INFINITY);
        assert_eq!(tree.len(), 1);
        assert!(root.is_leaf());
        assert_eq!(root.points(), &points);
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = partition(&[], 0.05).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidInput);
    }

    #[test]
    fn test_max_leaf_points() {
        let config = PartitionConfig::new(0.05).with_max_leaf_points(5);
        let partitioner = Partitioner::new(config).unwrap();
        let tree = partitioner.build(&EXAMPLE).unwrap();
        // Root splits into five and three points, both of which stay leaves.
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.num_leaves(), 2);
    }
}
