// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quarry_benches::{random_points, random_rects};
use quarry_kdtree::KdTree;
use quarry_quadtree::{Aabb2D, QuadTree};

use rstar::primitives::Rectangle;
use rstar::{AABB, RTree};

fn bench_nearest_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_compare_f64");
    for &n in &[10_000_usize, 100_000] {
        let points = random_points(n, 1000.0, 23);
        let queries = random_points(1_000, 1000.0, 29);
        group.throughput(Throughput::Elements(queries.len() as u64));

        let tree = KdTree::build(&points);
        group.bench_function(format!("quarry_query_n{n}"), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(tree.find_nearest(q).index);
                }
            });
        });

        let rtree = RTree::bulk_load(points.clone());
        group.bench_function(format!("rstar_query_n{n}"), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(rtree.nearest_neighbor(q));
                }
            });
        });

        group.bench_function(format!("quarry_build_n{n}"), |b| {
            b.iter(|| black_box(KdTree::build(&points).len()));
        });
        group.bench_function(format!("rstar_build_n{n}"), |b| {
            b.iter_batched(
                || points.clone(),
                |pts| black_box(RTree::bulk_load(pts).size()),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn to_rstar_rects(v: &[Aabb2D<f64>]) -> Vec<Rectangle<[f64; 2]>> {
    v.iter()
        .map(|r| Rectangle::from_corners([r.min_x, r.min_y], [r.max_x, r.max_y]))
        .collect()
}

fn bench_region_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("region_compare_f64");
    let world = 4096.0;
    for &n in &[1_000_usize, 10_000] {
        let rects = random_rects(n, world, 32.0, 32.0, 31);
        let query = Aabb2D::from_xywh(1024.0, 1024.0, 512.0, 512.0);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("quarry_build_query_n{n}"), |b| {
            b.iter_batched(
                || QuadTree::<f64, usize>::with_max_depth(Aabb2D::new(0.0, 0.0, world, world), 6),
                |mut tree| {
                    for (i, r) in rects.iter().copied().enumerate() {
                        tree.add(i, r);
                    }
                    black_box(tree.search_all(query).len())
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("rstar_build_query_bulk_n{n}"), |b| {
            b.iter_batched(
                || to_rstar_rects(&rects),
                |rectangles| {
                    let tree = RTree::bulk_load(rectangles);
                    let aabb = AABB::from_corners(
                        [query.min_x, query.min_y],
                        [query.max_x, query.max_y],
                    );
                    black_box(tree.locate_in_envelope_intersecting(&aabb).count())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_nearest_compare, bench_region_compare);
criterion_main!(benches);
