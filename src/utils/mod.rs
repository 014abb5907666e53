//! Utility functions.

pub(crate) mod parallel;
pub mod stats;

pub use parallel::{maybe_parallel_map, maybe_parallel_map_threshold, MIN_PARALLEL_SIZE};
pub use stats::{maximum, mean, minimum, population_variance};
