// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quarry Quad-tree: a mutable 2D region index with branch identifiers.
//!
//! [`QuadTree`] stores payloads tagged with axis-aligned boxes ([`Aabb2D`]).
//! Each node splits its bounds into four quadrants; an item sinks into the
//! deepest quadrant that fully contains its box, up to a fixed depth limit.
//!
//! - [`QuadTree::add`] returns a [`BranchId`], the packed path to the node that
//!   holds the item. Keep it next to the item.
//! - [`QuadTree::remove_in`] and [`QuadTree::relocate`] take that branch and go
//!   straight to the node, so moving an entity costs O(depth) plus a scan of one
//!   small local container.
//! - [`QuadTree::search_all`] and [`QuadTree::search_one`] find items whose box
//!   overlaps an area.
//!
//! # Example
//!
//! ```rust
//! use quarry_quadtree::{Aabb2D, QuadTree};
//!
//! let mut tree: QuadTree<f64, u32> = QuadTree::new(Aabb2D::new(0.0, 0.0, 100.0, 100.0));
//! let branch = tree.add(1, Aabb2D::from_xywh(10.0, 10.0, 5.0, 5.0));
//! tree.add(2, Aabb2D::from_xywh(70.0, 70.0, 5.0, 5.0));
//!
//! let hits = tree.search_all(Aabb2D::new(0.0, 0.0, 50.0, 50.0));
//! assert_eq!(hits, [&1]);
//!
//! // Move item 1 next to item 2.
//! let branch = tree.relocate(branch, 1, Aabb2D::from_xywh(72.0, 72.0, 1.0, 1.0));
//! assert_eq!(tree.search_all(Aabb2D::new(60.0, 60.0, 80.0, 80.0)).len(), 2);
//!
//! assert!(tree.remove_in(branch, &1));
//! assert_eq!(tree.len(), 1);
//! ```
//!
//! ## Placement
//!
//! Quadrants are ordered top-left, top-right, bottom-left, bottom-right with `y`
//! growing downwards. Containment is inclusive, so a box touching a split line
//! descends into the first quadrant that contains it. A box crossing a split
//! line, or lying outside the root bounds, stays in the node where it stopped.
//!
//! The default depth limit is [`DEFAULT_MAX_DEPTH`]; use
//! [`QuadTree::with_max_depth`] for finer trees (up to [`BranchId::CAPACITY`]).
//!
//! ### Float semantics
//!
//! Coordinates are assumed to be finite. NaN boxes fail every containment test
//! and end up in the root.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod branch;
pub mod error;
pub mod iter;
pub mod tree;

pub use branch::{BranchId, Quadrant};
pub use error::BranchError;
pub use iter::Iter;
pub use quarry_geom::Aabb2D;
pub use tree::{DEFAULT_MAX_DEPTH, QuadTree};
