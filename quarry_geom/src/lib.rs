// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quarry Geom: the scalar abstraction and box type shared by the Quarry trees.
//!
//! - [`Scalar`]: the coordinate types the trees accept (`f32`, `f64`, `i64`),
//!   each with a widened accumulator used for squared distances.
//! - [`Aabb2D`]: an axis-aligned box with inclusive containment and overlap tests.
//!
//! It does not depend on any geometry crate by default.
//! Enable the `kurbo` feature to convert between [`Aabb2D<f64>`] and `kurbo::Rect`.
//!
//! # Example
//!
//! ```rust
//! use quarry_geom::Aabb2D;
//!
//! let area = Aabb2D::from_xywh(0.0, 0.0, 100.0, 100.0);
//! let item = Aabb2D::from_xywh(10.0, 10.0, 5.0, 5.0);
//! assert!(area.contains(&item));
//! assert!(item.overlaps(&area));
//!
//! // Touching edges count as overlapping.
//! let neighbour = Aabb2D::from_xywh(100.0, 0.0, 10.0, 10.0);
//! assert!(area.overlaps(&neighbour));
//! assert!(!area.contains(&neighbour));
//! ```
//!
//! ### Float semantics
//!
//! Coordinates are assumed to be finite (no NaNs). Comparisons involving NaN
//! are treated as "not ordered", so a NaN box neither contains nor overlaps anything.

#![no_std]

pub mod scalar;
pub mod types;

#[cfg(feature = "kurbo")]
mod kurbo_conv;

pub use scalar::Scalar;
pub use types::Aabb2D;
