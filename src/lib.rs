//! # interval-partition
//!
//! Adaptive partitioning of points on the real line.
//!
//! ## Overview
//!
//! A set of points is split recursively at the midpoint of its range until
//! every resulting interval is either no wider than `2 * delta` or holds at
//! most two points. The leaves of the resulting tree partition the input, and
//! each leaf reports the mean and population variance of its points. This is
//! a one-dimensional k-d tree.
//!
//! ## Quick Start
//!
//! ```rust
//! use interval_partition::prelude::*;
//!
//! let points = [0.0, 1.0, 2.0, 4.0, 5.0, 8.0, 9.0, 12.0];
//! let partitioner = Partitioner::with_delta(0.05).unwrap();
//! let result = partitioner.partition(&points).unwrap();
//!
//! assert_eq!(result.len(), 5);
//! for (mean, variance) in result.mean_variance() {
//!     println!("{} {}", mean, variance);
//! }
//! ```
//!
//! ## Inspecting the Tree
//!
//! The full tree stays available after the build:
//!
//! ```rust
//! use interval_partition::prelude::*;
//!
//! let result = partition(&[8.0, 9.0, 12.0], 0.05).unwrap();
//! let tree = result.tree();
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.root().midpoint(), 10.0);
//! assert_eq!(tree[tree.locate(8.5)].points(), &[8.0, 9.0]);
//! ```
//!
//! ## Module Overview
//!
//! - [`partitioning`]: The partitioner and its result type
//! - [`trees`]: Nodes and the arena-backed interval tree
//! - [`utils`]: Descriptive statistics and parallel helpers

pub mod partitioning;
pub mod trees;
pub mod utils;

mod config;
mod error;
mod types;

pub use config::{PartitionConfig, DEFAULT_DELTA, DEFAULT_MAX_LEAF_POINTS};
pub use error::{ErrorCode, PartitionError, Result};
pub use types::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::PartitionConfig;
    pub use crate::error::{ErrorCode, PartitionError, Result};
    pub use crate::partitioning::{partition, LeafSummary, Partition, Partitioner};
    pub use crate::trees::{IntervalTree, Node, ROOT};
    pub use crate::types::*;
}
