//! Configuration types for interval partitioning.

use serde::{Deserialize, Serialize};

use crate::error::{PartitionError, Result};

/// Default half-width threshold.
pub const DEFAULT_DELTA: f64 = 0.05;

/// Default maximum number of points a node may hold without being split.
pub const DEFAULT_MAX_LEAF_POINTS: usize = 2;

/// Configuration for the partitioner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionConfig {
    /// Minimum interesting interval half-width. A node whose width is at most
    /// `2 * delta` is never split.
    pub delta: f64,

    /// A node holding this many points or fewer is never split.
    pub max_leaf_points: usize,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            delta: DEFAULT_DELTA,
            max_leaf_points: DEFAULT_MAX_LEAF_POINTS,
        }
    }
}

impl PartitionConfig {
    /// Create a configuration with the given delta.
    pub fn new(delta: f64) -> Self {
        Self {
            delta,
            ..Default::default()
        }
    }

    /// Set delta.
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    /// Set the maximum number of points in an unsplit node.
    pub fn with_max_leaf_points(mut self, max_leaf_points: usize) -> Self {
        self.max_leaf_points = max_leaf_points;
        self
    }

    /// Width at or below which a node is never split.
    #[inline]
    pub fn min_split_width(&self) -> f64 {
        2.0 * self.delta
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.delta.is_finite() || self.delta <= 0.0 {
            return Err(PartitionError::invalid_argument(format!(
                "delta must be a positive finite number, got {}",
                self.delta
            )));
        }
        if self.max_leaf_points == 0 {
            return Err(PartitionError::invalid_argument(
                "max_leaf_points must be at least 1",
            ));
        }
        Ok(())
    }
}
