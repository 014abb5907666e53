//! Adaptive partitioning of points on a line.
//!
//! This module provides the partitioner that builds interval trees and the
//! partition type describing its leaves.

mod partition;
mod partitioner;

pub use partition::{LeafSummary, Partition};
pub use partitioner::{partition, Partitioner};
