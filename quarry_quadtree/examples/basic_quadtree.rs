// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Quarry Quad-tree: add, relocate, search, and remove.

use quarry_quadtree::{Aabb2D, QuadTree};

fn main() {
    let mut tree: QuadTree<f32, &str> = QuadTree::new(Aabb2D::new(0.0, 0.0, 512.0, 512.0));
    let player = tree.add("player", Aabb2D::from_xywh(20.0, 30.0, 8.0, 8.0));
    tree.add("crate", Aabb2D::from_xywh(300.0, 40.0, 16.0, 16.0));
    tree.add("bridge", Aabb2D::from_xywh(200.0, 200.0, 120.0, 24.0));
    println!("player stored at {player:?} ({} levels deep)", player.depth());

    // Move the player next to the crate.
    let player = tree.relocate(player, "player", Aabb2D::from_xywh(290.0, 44.0, 8.0, 8.0));
    println!("player moved to {player:?}");

    let near_crate = tree.search_all(Aabb2D::from_xywh(280.0, 30.0, 50.0, 40.0));
    println!("near the crate: {near_crate:?}");

    let removed = tree.remove_in(player, &"player");
    println!("removed player: {removed}, {} items left", tree.len());
}
