//! Basic partitioning example.
//!
//! Splits a handful of points and prints the mean and variance of each
//! resulting interval.

use interval_partition::prelude::*;

fn main() {
    println!("Interval partitioning - Basic Example\n");

    let points = [0.0, 1.0, 2.0, 4.0, 5.0, 8.0, 9.0, 12.0];
    let delta = 0.05;
    println!("Points: {:?}", points);
    println!("Delta: {}\n", delta);

    let partitioner = Partitioner::with_delta(delta).unwrap();
    let result = partitioner.partition(&points).unwrap();

    println!("{} leaves (creation order):", result.len());
    for node in result.leaf_nodes() {
        println!(
            "  {:?}  mean={:.4}  variance={:.4}",
            node.points(),
            node.mean(),
            node.variance()
        );
    }

    println!("\nLeaves ordered by position:");
    for s in result.sorted_summaries() {
        println!(
            "  [{}, {}]  count={}  mean={:.4}  variance={:.4}",
            s.left_end, s.right_end, s.count, s.mean, s.variance
        );
    }
}
