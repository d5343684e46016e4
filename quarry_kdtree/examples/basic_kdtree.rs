// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Quarry KD-tree: build once, query many times.

use quarry_kdtree::KdTree;

fn main() {
    let spawns = [
        (0.0_f64, 0.0, 0.0),
        (10.0, 0.0, 0.0),
        (0.0, 10.0, 0.0),
        (5.0, 5.0, 5.0),
        (-8.0, 2.0, 1.0),
    ];
    let tree = KdTree::build(&spawns);
    println!("{} points, {} levels:\n{tree}", tree.len(), tree.depth());

    for query in [(1.0, 1.0, 1.0), (6.0, 6.0, 4.0), (-9.0, 0.0, 0.0)] {
        let hit = tree.find_nearest(&query);
        println!(
            "nearest to {query:?}: #{} {:?} (squared distance {})",
            hit.index, spawns[hit.index], hit.sqr_distance
        );
    }
}
