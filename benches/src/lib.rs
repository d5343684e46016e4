// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared input generators for the Quarry benchmarks.

use quarry_quadtree::Aabb2D;

/// Xorshift generator so runs are reproducible without an RNG dependency.
#[derive(Clone, Debug)]
pub struct Rng(u64);

impl Rng {
    /// Seeded generator. A zero seed is bumped to one.
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    /// Next raw value.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1_u64 << 53) as f64)
    }
}

/// `count` points uniformly spread over a cube of side `extent`.
pub fn random_points(count: usize, extent: f64, seed: u64) -> Vec<[f64; 3]> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            [
                rng.next_f64() * extent,
                rng.next_f64() * extent,
                rng.next_f64() * extent,
            ]
        })
        .collect()
}

/// An `n`×`n` grid of touching square cells.
pub fn grid_rects(n: usize, cell: f64) -> Vec<Aabb2D<f64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Aabb2D::from_xywh(x0, y0, cell, cell));
        }
    }
    out
}

/// `count` boxes of random size up to `max_w`×`max_h` inside `world`×`world`.
pub fn random_rects(count: usize, world: f64, max_w: f64, max_h: f64, seed: u64) -> Vec<Aabb2D<f64>> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            let w = rng.next_f64() * max_w;
            let h = rng.next_f64() * max_h;
            let x = rng.next_f64() * (world - w);
            let y = rng.next_f64() * (world - h);
            Aabb2D::from_xywh(x, y, w, h)
        })
        .collect()
}
