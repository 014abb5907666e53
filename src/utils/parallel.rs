//! Data-parallel helpers for post-build work over leaves.

use rayon::prelude::*;

/// Minimum number of items before parallelization is beneficial.
/// Below this threshold, sequential execution is faster due to reduced overhead.
pub const MIN_PARALLEL_SIZE: usize = 1024;

/// Map over `items`, in parallel only when there are at least `threshold`
/// of them. Output order always matches input order.
#[inline]
pub fn maybe_parallel_map_threshold<T, U, F>(items: &[T], threshold: usize, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    if items.len() >= threshold {
        items.par_iter().map(&f).collect()
    } else {
        items.iter().map(f).collect()
    }
}

/// Map over `items` using [`MIN_PARALLEL_SIZE`] as the threshold.
#[inline]
pub fn maybe_parallel_map<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    maybe_parallel_map_threshold(items, MIN_PARALLEL_SIZE, f)
}
