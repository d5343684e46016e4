// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest waypoint lookup for agents on a 3D map.
//!
//! Waypoints are a user-side struct hooked into the tree through `Coord3`.
//! Set `RUST_LOG=debug` to see the build log.
//!
//! Run:
//! - `cargo run -p quarry_demos --example kdtree_waypoints`

use quarry_kdtree::{Axis, Coord3, KdTree};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug)]
struct Waypoint {
    name: &'static str,
    x: f32,
    y: f32,
    z: f32,
}

impl Coord3 for Waypoint {
    type Scalar = f32;

    fn coord(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

const fn wp(name: &'static str, x: f32, y: f32, z: f32) -> Waypoint {
    Waypoint { name, x, y, z }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let waypoints = [
        wp("gate", 0.0, 0.0, 0.0),
        wp("tower", 40.0, 5.0, 12.0),
        wp("bridge", 22.0, -3.0, 30.0),
        wp("well", -15.0, 0.0, 8.0),
        wp("camp", 8.0, 0.0, -25.0),
        wp("ridge", 35.0, 20.0, -10.0),
    ];
    let tree = KdTree::build(&waypoints);
    println!("layout (pivot indices):\n{tree}");

    // Agents only need their position; `[f32; 3]` implements `Coord3` too.
    let agents = [[1.0_f32, 0.0, 2.0], [30.0, 0.0, 25.0], [20.0, 15.0, -12.0]];
    for agent in agents {
        let hit = tree.find_nearest(&agent);
        let target = waypoints[hit.index];
        println!(
            "agent at {agent:?} -> {} ({:.1} units)",
            target.name,
            hit.sqr_distance.sqrt()
        );
    }
}
