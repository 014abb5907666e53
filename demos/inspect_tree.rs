//! Walks the full tree built by the partitioner.

use interval_partition::prelude::*;
use rand::prelude::*;

fn print_subtree(tree: &IntervalTree, idx: NodeIndex) {
    let node = &tree[idx];
    let indent = "  ".repeat(node.depth());
    let kind = if node.is_leaf() { "leaf" } else { "split" };
    println!(
        "{}#{} {} [{:.3}, {:.3}] n={} mid={:.3}",
        indent,
        idx,
        kind,
        node.left_end(),
        node.right_end(),
        node.len(),
        node.midpoint()
    );
    for &child in node.children() {
        print_subtree(tree, child);
    }
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let points: Vec<f64> = (0..40).map(|_| rng.gen_range(0.0..10.0)).collect();

    let config = PartitionConfig::new(0.25).with_max_leaf_points(3);
    let result = Partitioner::new(config).unwrap().partition(&points).unwrap();
    let tree = result.tree();

    println!(
        "{} points, {} nodes, {} leaves, depth {}\n",
        tree.num_points(),
        tree.len(),
        result.len(),
        tree.max_depth()
    );
    print_subtree(tree, ROOT);

    let query = 5.0;
    let leaf = result.leaf_for(query);
    println!("\n{} routes to leaf #{}: {:?}", query, leaf, tree[leaf].points());
}
