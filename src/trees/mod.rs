//! Tree structures for partitioning.
//!
//! This module provides the node type and the arena-backed interval tree
//! built by the partitioner.

pub(crate) mod interval_tree;
pub(crate) mod node;

pub use interval_tree::{IntervalTree, ROOT};
pub use node::Node;
