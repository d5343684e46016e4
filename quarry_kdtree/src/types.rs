// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate access and query results.

use quarry_geom::Scalar;

/// Splitting axis of a tree level.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// First coordinate.
    X,
    /// Second coordinate.
    Y,
    /// Third coordinate.
    Z,
}

impl Axis {
    /// The axis used at a given tree depth (`depth mod 3`).
    pub const fn for_depth(depth: usize) -> Self {
        match depth % 3 {
            0 => Self::X,
            1 => Self::Y,
            _ => Self::Z,
        }
    }

    /// Position of this axis in an `[x, y, z]` triple.
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// A point in 3D space the tree can be built from and queried with.
///
/// Implemented for `[T; 3]` and `(T, T, T)`. Implement it for your own vector type
/// to avoid copying into arrays first.
pub trait Coord3 {
    /// Coordinate type.
    type Scalar: Scalar;

    /// Coordinate on the given axis.
    fn coord(&self, axis: Axis) -> Self::Scalar;

    /// All three coordinates as `[x, y, z]`.
    fn coords(&self) -> [Self::Scalar; 3] {
        [self.coord(Axis::X), self.coord(Axis::Y), self.coord(Axis::Z)]
    }
}

impl<T: Scalar> Coord3 for [T; 3] {
    type Scalar = T;

    #[inline]
    fn coord(&self, axis: Axis) -> T {
        self[axis.index()]
    }

    #[inline]
    fn coords(&self) -> [T; 3] {
        *self
    }
}

impl<T: Scalar> Coord3 for (T, T, T) {
    type Scalar = T;

    #[inline]
    fn coord(&self, axis: Axis) -> T {
        match axis {
            Axis::X => self.0,
            Axis::Y => self.1,
            Axis::Z => self.2,
        }
    }
}

impl<C: Coord3 + ?Sized> Coord3 for &C {
    type Scalar = C::Scalar;

    #[inline]
    fn coord(&self, axis: Axis) -> Self::Scalar {
        (**self).coord(axis)
    }
}

/// Result of a nearest-neighbour query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Nearest<T: Scalar> {
    /// Index of the nearest point in the slice the tree was built from.
    pub index: usize,
    /// Squared Euclidean distance to it, in the widened accumulator type.
    pub sqr_distance: T::Acc,
}
