//! Descriptive statistics over a slice of points.
//!
//! All functions expect a non-empty slice; callers (node construction)
//! guarantee this. On an empty slice `minimum`/`maximum` return infinities
//! and `mean`/`population_variance` return NaN.

use crate::types::Point;

/// Smallest value in `points`.
#[inline]
pub fn minimum(points: &[Point]) -> Point {
    points.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Largest value in `points`.
#[inline]
pub fn maximum(points: &[Point]) -> Point {
    points.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Arithmetic mean of `points`.
#[inline]
pub fn mean(points: &[Point]) -> f64 {
    points.iter().sum::<f64>() / points.len() as f64
}

/// Population variance of `points`: the mean of squared deviations from the
/// mean, divided by `n` rather than `n - 1`.
pub fn population_variance(points: &[Point]) -> f64 {
    let mu = mean(points);
    let sum_sq: f64 = points
        .iter()
        .map(|&x| {
            let d = x - mu;
            d * d
        })
        .sum();
    sum_sq / points.len() as f64
}
