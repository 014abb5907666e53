//! Core type definitions.

/// A point on the real line.
pub type Point = f64;

/// Index of a node inside an [`IntervalTree`](crate::trees::IntervalTree) arena.
pub type NodeIndex = usize;

/// A `(mean, variance)` pair reported for one leaf.
pub type MeanVariance = (f64, f64);
