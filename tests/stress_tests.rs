//! Stress tests for interval partitioning.
//!
//! These tests check the partition invariants on larger random inputs.

use interval_partition::prelude::*;
use rand::prelude::*;
use std::time::Instant;

/// Generate uniformly random points.
fn generate_random_points(n: usize, lo: f64, hi: f64, seed: u64) -> Vec<f64> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(lo..hi)).collect()
}

/// Generate clustered points with many exact duplicates.
fn generate_clustered_points(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let centers = [-50.0, 0.0, 0.5, 75.0];
    (0..n)
        .map(|_| {
            let c = centers[rng.gen_range(0..centers.len())];
            // Quantize so that duplicates are common.
            c + (rng.gen_range(-2.0..2.0f64) * 10.0).round() / 10.0
        })
        .collect()
}

fn sorted(mut points: Vec<f64>) -> Vec<f64> {
    points.sort_by(|a, b| a.partial_cmp(b).unwrap());
    points
}

/// Check completeness, disjointness and the stopping rule.
fn verify_partition(points: &[f64], result: &Partition, config: &PartitionConfig) {
    // Completeness: leaf points are exactly the input, multiplicities included.
    let all: Vec<f64> = result
        .leaf_nodes()
        .flat_map(|n| n.points().to_vec())
        .collect();
    assert_eq!(sorted(all), sorted(points.to_vec()));
    assert_eq!(result.num_points(), points.len());

    // Disjointness: sorted by left end, each leaf ends before the next begins.
    let summaries = result.sorted_summaries();
    for pair in summaries.windows(2) {
        assert!(
            pair[0].right_end < pair[1].left_end,
            "leaves overlap: [{}, {}] and [{}, {}]",
            pair[0].left_end,
            pair[0].right_end,
            pair[1].left_end,
            pair[1].right_end
        );
    }

    // Stopping rule, or a midpoint that would leave one side empty.
    for node in result.leaf_nodes() {
        assert!(!node.is_empty());
        let mid = node.midpoint();
        let one_sided = node.points().iter().all(|&p| p <= mid)
            || node.points().iter().all(|&p| p > mid);
        assert!(
            node.width() <= config.min_split_width()
                || node.len() <= config.max_leaf_points
                || one_sided,
            "leaf with {} points and width {} should have split",
            node.len(),
            node.width()
        );
    }
}

#[test]
fn stress_test_uniform_points() {
    for (i, &delta) in [0.5, 0.05, 0.001].iter().enumerate() {
        let points = generate_random_points(10_000, -100.0, 100.0, 42 + i as u64);
        let config = PartitionConfig::new(delta);
        let result = Partitioner::new(config.clone())
            .unwrap()
            .partition(&points)
            .unwrap();
        verify_partition(&points, &result, &config);
    }
}

#[test]
fn stress_test_clustered_duplicates() {
    let points = generate_clustered_points(20_000, 7);
    let config = PartitionConfig::new(0.01);
    let result = Partitioner::new(config.clone())
        .unwrap()
        .partition(&points)
        .unwrap();
    verify_partition(&points, &result, &config);
}

#[test]
fn stress_test_max_leaf_points() {
    let points = generate_random_points(5_000, 0.0, 1.0, 99);
    for k in [1, 2, 8, 64] {
        let config = PartitionConfig::new(1e-6).with_max_leaf_points(k);
        let result = Partitioner::new(config.clone())
            .unwrap()
            .partition(&points)
            .unwrap();
        verify_partition(&points, &result, &config);
    }
}

#[test]
fn stress_test_determinism() {
    let points = generate_random_points(5_000, 0.0, 10.0, 123);
    let first = partition(&points, 0.01).unwrap();
    let second = partition(&points, 0.01).unwrap();

    assert_eq!(first.leaves(), second.leaves());
    assert_eq!(first.mean_variance(), second.mean_variance());
    assert_eq!(first.summaries(), second.summaries());
}

#[test]
fn stress_test_leaves_are_fixed_points() {
    let points = generate_clustered_points(3_000, 11);
    let delta = 0.05;
    let result = partition(&points, delta).unwrap();

    for node in result.leaf_nodes() {
        let again = partition(node.points(), delta).unwrap();
        assert_eq!(again.len(), 1);
        assert_eq!(again.tree().len(), 1);
        assert_eq!(again.tree().root().points(), node.points());
    }
}

#[test]
fn stress_test_midpoint_never_in_right_child() {
    let points = generate_clustered_points(5_000, 3);
    let result = partition(&points, 0.001).unwrap();
    let tree = result.tree();

    for (_, node) in tree.iter() {
        if let Some((left, right)) = node.child_pair() {
            let mid = node.midpoint();
            assert!(tree[left].points().iter().all(|&p| p <= mid));
            assert!(tree[right].points().iter().all(|&p| p > mid));
        }
    }
}

#[test]
fn stress_test_identical_points() {
    let points = vec![2.5; 50_000];
    let result = partition(&points, 1e-12).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result.mean_variance()[0].1, 0.0);
}

#[test]
fn stress_test_large_build_time() {
    let points = generate_random_points(200_000, 0.0, 1_000.0, 2024);
    let start = Instant::now();
    let result = partition(&points, 1e-4).unwrap();
    let elapsed = start.elapsed();

    assert_eq!(result.num_points(), points.len());
    // Summaries over many leaves take the parallel path and keep order.
    let summaries = result.summaries();
    assert_eq!(summaries.len(), result.len());
    assert!(summaries
        .iter()
        .zip(result.leaves())
        .all(|(s, &idx)| s.node == idx));
    println!("partitioned {} points in {:?}", points.len(), elapsed);
}
