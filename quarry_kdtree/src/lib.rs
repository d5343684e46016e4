// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quarry KD-tree: nearest-neighbour search over a fixed set of 3D points.
//!
//! A common task in a game or simulation is to take a position and find which of
//! a stored set of points (waypoints, spawn locations, probes) is nearest to it.
//! [`KdTree`] answers that much faster than a linear scan.
//!
//! - Build once with [`KdTree::build`] from any slice of [`Coord3`] values.
//! - Query with [`KdTree::find_nearest`], which returns the index of the nearest
//!   point in the input slice and its squared distance.
//!
//! The tree copies each pivot's coordinates, so the input slice does not need
//! to outlive it; results still refer back to the slice by index.
//!
//! Coordinates are any [`Scalar`](quarry_geom::Scalar) (`f32`, `f64`, `i64`).
//! Squared distances use the scalar's widened accumulator (`f32`→`f64`, `i64`→`i128`).
//!
//! # Example
//!
//! ```rust
//! use quarry_kdtree::KdTree;
//!
//! let points = [[0.0_f32, 0.0, 0.0], [10.0, 0.0, 0.0], [0.0, 10.0, 0.0]];
//! let tree = KdTree::build(&points);
//!
//! let nearest = tree.find_nearest(&[1.0, 1.0, 1.0]);
//! assert_eq!(nearest.index, 0);
//! assert_eq!(nearest.sqr_distance, 3.0);
//! ```
//!
//! ## Construction
//!
//! Each level splits on one axis, cycling X, Y, Z. The splitting point is chosen
//! with a median-of-three heuristic (first, middle, last element of the range)
//! followed by a single in-place partition, so construction is O(n log n) on
//! typical input and O(n²) on adversarial input. The tree is not rebalanced.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod tree;
pub mod types;

pub use error::BuildError;
pub use tree::KdTree;
pub use types::{Axis, Coord3, Nearest};
