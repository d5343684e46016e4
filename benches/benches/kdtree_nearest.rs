// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quarry_benches::random_points;
use quarry_kdtree::KdTree;

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_build");
    for &n in &[1_000_usize, 10_000, 100_000] {
        let points = random_points(n, 1000.0, 7);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("f64_n{n}"), |b| {
            b.iter(|| black_box(KdTree::build(&points)));
        });
        let points_f32: Vec<[f32; 3]> = points
            .iter()
            .map(|p| p.map(|v| v as f32))
            .collect();
        group.bench_function(format!("f32_n{n}"), |b| {
            b.iter(|| black_box(KdTree::build(&points_f32)));
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_query");
    for &n in &[1_000_usize, 10_000, 100_000] {
        let points = random_points(n, 1000.0, 11);
        let queries = random_points(1_000, 1000.0, 13);
        let tree = KdTree::build(&points);
        group.throughput(Throughput::Elements(queries.len() as u64));

        group.bench_function(format!("nearest_n{n}"), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(tree.find_nearest(q));
                }
            });
        });

        // Baseline the tree has to beat.
        group.bench_function(format!("linear_scan_n{n}"), |b| {
            b.iter_batched(
                || queries.clone(),
                |qs| {
                    for q in &qs {
                        let best = points
                            .iter()
                            .map(|p| (0..3).map(|i| (p[i] - q[i]) * (p[i] - q[i])).sum::<f64>())
                            .fold(f64::INFINITY, f64::min);
                        black_box(best);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_query);
criterion_main!(benches);
