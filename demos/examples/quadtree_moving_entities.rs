// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Broad-phase for moving entities with Kurbo geometry.
//!
//! Each entity keeps the `BranchId` returned by the tree so that moving it is a
//! direct removal from one node plus an insert, never a full scan.
//! Set `RUST_LOG=trace` to see placements.
//!
//! Run:
//! - `cargo run -p quarry_demos --example quadtree_moving_entities`

use kurbo::{Point, Rect, Vec2};
use quarry_geom::Aabb2D;
use quarry_quadtree::{BranchId, QuadTree};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Entity {
    id: u32,
    rect: Rect,
    velocity: Vec2,
    branch: BranchId,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let world = Rect::new(0.0, 0.0, 800.0, 600.0);
    let mut tree: QuadTree<f64, u32> = QuadTree::with_max_depth(world.into(), 6);

    let mut entities: Vec<Entity> = (0..12_u32)
        .map(|id| {
            let origin = Point::new(f64::from(id * 61 % 760), f64::from(id * 47 % 560));
            let rect = Rect::from_origin_size(origin, (24.0, 24.0));
            Entity {
                id,
                rect,
                velocity: Vec2::new(f64::from(id % 5) * 7.0 - 14.0, f64::from(id % 3) * 9.0 - 9.0),
                branch: tree.add(id, rect.into()),
            }
        })
        .collect();

    for frame in 0..5 {
        for e in &mut entities {
            e.rect = e.rect + e.velocity;
            e.branch = tree.relocate(e.branch, e.id, e.rect.into());
        }

        let pairs = entities
            .iter()
            .map(|e| {
                tree.search_all(e.rect.into())
                    .into_iter()
                    .filter(|&&other| other > e.id)
                    .count()
            })
            .sum::<usize>();
        println!("frame {frame}: {pairs} overlapping pairs");
    }

    // Point probe through the branch chain.
    let probe = Point::new(400.0, 300.0);
    let chain = tree.branches_at(probe.x, probe.y);
    let under: Vec<u32> = chain
        .iter()
        .filter_map(|b| tree.items_in(*b))
        .flatten()
        .filter(|(r, _)| r.overlaps(&Aabb2D::from(probe)))
        .map(|(_, id)| *id)
        .collect();
    println!(
        "{} nodes on the path to {probe:?}, entities under it: {under:?}",
        chain.len()
    );

    let deepest = entities.iter().max_by_key(|e| e.branch.depth());
    if let Some(e) = deepest {
        println!("deepest entity {} at {:?}", e.id, e.branch.path().collect::<Vec<_>>());
    }
}
