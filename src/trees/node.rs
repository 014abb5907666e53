//! Interval tree node.

use crate::error::{PartitionError, Result};
use crate::types::{NodeIndex, Point};
use crate::utils::stats;

/// A node of the interval tree: a non-empty subset of the input points and,
/// once split, the indices of its two children.
///
/// The point set is fixed at construction. All derived quantities are
/// recomputed from it on each call.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Points owned by this node.
    points: Vec<Point>,

    /// Left and right child, set at most once.
    children: Option<[NodeIndex; 2]>,

    /// Depth in the tree (0 = root).
    depth: usize,
}

impl Node {
    /// Create a root-level node from `points`.
    ///
    /// Fails with `InvalidInput` if `points` is empty or holds a NaN or
    /// infinite value.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        Self::with_depth(points, 0)
    }

    /// Create a node at the given depth.
    pub fn with_depth(points: Vec<Point>, depth: usize) -> Result<Self> {
        if points.is_empty() {
            return Err(PartitionError::invalid_input(
                "Cannot create a node from an empty point set",
            ));
        }
        if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
            return Err(PartitionError::invalid_input(format!(
                "Point set contains a non-finite value: {}",
                bad
            )));
        }

        Ok(Self {
            points,
            children: None,
            depth,
        })
    }

    /// Points owned by this node.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Child indices: empty for a leaf, `[left, right]` otherwise.
    pub fn children(&self) -> &[NodeIndex] {
        match &self.children {
            Some(pair) => pair.as_slice(),
            None => &[],
        }
    }

    /// Left and right child, if split.
    pub fn child_pair(&self) -> Option<(NodeIndex, NodeIndex)> {
        self.children.map(|[left, right]| (left, right))
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Record the children created by splitting this node.
    ///
    /// A node splits at most once; a second call fails with `AlreadySplit`.
    pub fn attach_children(&mut self, left: NodeIndex, right: NodeIndex) -> Result<()> {
        if let Some([l, r]) = self.children {
            return Err(PartitionError::already_split(format!(
                "Node already has children ({}, {})",
                l, r
            )));
        }
        self.children = Some([left, right]);
        Ok(())
    }

    /// Minimum point.
    pub fn left_end(&self) -> Point {
        stats::minimum(&self.points)
    }

    /// Maximum point.
    pub fn right_end(&self) -> Point {
        stats::maximum(&self.points)
    }

    /// Midpoint between the two ends (not the mean of the points).
    pub fn midpoint(&self) -> Point {
        0.5 * (self.right_end() + self.left_end())
    }

    pub fn width(&self) -> f64 {
        self.right_end() - self.left_end()
    }

    pub fn mean(&self) -> f64 {
        stats::mean(&self.points)
    }

    /// Population variance of the points.
    pub fn variance(&self) -> f64 {
        stats::population_variance(&self.points)
    }

    /// Whether `value` lies within `[left_end, right_end]`.
    pub fn contains(&self, value: Point) -> bool {
        value >= self.left_end() && value <= self.right_end()
    }
}
