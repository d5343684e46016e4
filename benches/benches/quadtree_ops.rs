// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quarry_benches::{Rng, grid_rects, random_rects};
use quarry_quadtree::{Aabb2D, QuadTree};

const WORLD: f64 = 4096.0;

fn world() -> Aabb2D<f64> {
    Aabb2D::new(0.0, 0.0, WORLD, WORLD)
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_add");
    for &n in &[1_000_usize, 10_000] {
        let rects = random_rects(n, WORLD, 32.0, 32.0, 3);
        group.throughput(Throughput::Elements(n as u64));
        for depth in [4_usize, 8] {
            group.bench_function(format!("random_n{n}_depth{depth}"), |b| {
                b.iter_batched(
                    || QuadTree::<f64, usize>::with_max_depth(world(), depth),
                    |mut tree| {
                        for (i, r) in rects.iter().copied().enumerate() {
                            black_box(tree.add(i, r));
                        }
                        tree
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_search");
    let grid = grid_rects(128, WORLD / 128.0);
    let random = random_rects(10_000, WORLD, 64.0, 64.0, 5);
    for (name, rects) in [("grid", &grid), ("random", &random)] {
        let mut tree = QuadTree::with_max_depth(world(), 8);
        for (i, r) in rects.iter().copied().enumerate() {
            tree.add(i, r);
        }
        let small = Aabb2D::from_xywh(1000.0, 1000.0, 100.0, 100.0);
        let large = Aabb2D::from_xywh(512.0, 512.0, 2048.0, 2048.0);

        let mut out = Vec::new();
        group.bench_function(format!("{name}_search_all_small"), |b| {
            b.iter(|| {
                out.clear();
                tree.search_all_into(small, &mut out);
                black_box(out.len())
            });
        });
        group.bench_function(format!("{name}_search_all_large"), |b| {
            b.iter(|| black_box(tree.search_all(large).len()));
        });
        group.bench_function(format!("{name}_search_one"), |b| {
            b.iter(|| black_box(tree.search_one(small)));
        });
    }
    group.finish();
}

fn bench_relocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_relocate");
    let n = 5_000_usize;
    let rects = random_rects(n, WORLD, 16.0, 16.0, 17);
    group.throughput(Throughput::Elements(n as u64));

    group.bench_function(format!("jitter_n{n}"), |b| {
        b.iter_batched(
            || {
                let mut tree = QuadTree::with_max_depth(world(), 6);
                let branches: Vec<_> = rects
                    .iter()
                    .copied()
                    .enumerate()
                    .map(|(i, r)| tree.add(i, r))
                    .collect();
                (tree, branches, Rng::new(19))
            },
            |(mut tree, mut branches, mut rng)| {
                for (i, r) in rects.iter().enumerate() {
                    let dx = rng.next_f64() * 8.0 - 4.0;
                    let dy = rng.next_f64() * 8.0 - 4.0;
                    let moved = Aabb2D::new(r.min_x + dx, r.min_y + dy, r.max_x + dx, r.max_y + dy);
                    branches[i] = tree.relocate(branches[i], i, moved);
                }
                black_box(tree.len())
            },
            BatchSize::SmallInput,
        );
    });

    // Same moves without branch identifiers: full-scan removal, then add.
    group.bench_function(format!("jitter_full_scan_n{n}"), |b| {
        b.iter_batched(
            || {
                let mut tree = QuadTree::with_max_depth(world(), 6);
                for (i, r) in rects.iter().copied().enumerate() {
                    tree.add(i, r);
                }
                (tree, Rng::new(19))
            },
            |(mut tree, mut rng)| {
                for (i, r) in rects.iter().enumerate() {
                    let dx = rng.next_f64() * 8.0 - 4.0;
                    let dy = rng.next_f64() * 8.0 - 4.0;
                    let moved = Aabb2D::new(r.min_x + dx, r.min_y + dy, r.max_x + dx, r.max_y + dy);
                    tree.remove(&i);
                    tree.add(i, moved);
                }
                black_box(tree.len())
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_add, bench_search, bench_relocate);
criterion_main!(benches);
