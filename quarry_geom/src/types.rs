// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned box type and comparison helpers.

use core::cmp::Ordering;

use crate::scalar::Scalar;

/// Axis-aligned bounding box in 2D.
///
/// All tests are inclusive: a box contains its own edges, and two boxes that
/// only touch along an edge or corner overlap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Aabb2D<T> {
    /// Minimum x (left)
    pub min_x: T,
    /// Minimum y (top)
    pub min_y: T,
    /// Maximum x (right)
    pub max_x: T,
    /// Maximum y (bottom)
    pub max_y: T,
}

impl<T> Aabb2D<T> {
    /// Create a new AABB from min/max corners.
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl<T: Copy> Aabb2D<T> {
    /// A zero-size box at a point.
    pub const fn from_point(x: T, y: T) -> Self {
        Self::new(x, y, x, y)
    }
}

impl<T: Scalar> Aabb2D<T> {
    /// Create an AABB from origin and size.
    pub fn from_xywh(x: T, y: T, w: T, h: T) -> Self {
        Self::new(x, y, T::add(x, w), T::add(y, h))
    }

    /// Split this box into its four equal quadrants.
    ///
    /// Order: top-left, top-right, bottom-left, bottom-right (y grows downwards,
    /// so "top" is the `min_y` half).
    pub fn quadrants(&self) -> [Self; 4] {
        let cx = T::mid(self.min_x, self.max_x);
        let cy = T::mid(self.min_y, self.max_y);
        [
            Self::new(self.min_x, self.min_y, cx, cy),
            Self::new(cx, self.min_y, self.max_x, cy),
            Self::new(self.min_x, cy, cx, self.max_y),
            Self::new(cx, cy, self.max_x, self.max_y),
        ]
    }
}

impl<T: Copy + PartialOrd> Aabb2D<T> {
    /// Whether this AABB contains the point.
    pub fn contains_point(&self, x: T, y: T) -> bool {
        le(self.min_x, x) && le(self.min_y, y) && le(x, self.max_x) && le(y, self.max_y)
    }

    /// Whether this AABB fully contains `other` (shared edges allowed).
    pub fn contains(&self, other: &Self) -> bool {
        le(self.min_x, other.min_x)
            && le(self.min_y, other.min_y)
            && le(other.max_x, self.max_x)
            && le(other.max_y, self.max_y)
    }

    /// Whether the two AABBs are not separated on either axis.
    pub fn overlaps(&self, other: &Self) -> bool {
        le(self.min_x, other.max_x)
            && le(other.min_x, self.max_x)
            && le(self.min_y, other.max_y)
            && le(other.min_y, self.max_y)
    }
}

fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}
