// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric scalar abstraction.

use core::fmt::Debug;

/// Numeric scalar abstraction for tree coordinates.
///
/// This trait provides the handful of operations the trees need to split boxes
/// and compare distances, plus an associated widened accumulator type for
/// squared distances (e.g., f32→f64, i64→i128).
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Widened accumulator type suitable for squared distances.
    type Acc: Copy
        + PartialOrd
        + core::ops::Add<Output = Self::Acc>
        + core::ops::Sub<Output = Self::Acc>
        + core::ops::Mul<Output = Self::Acc>
        + Debug;

    /// Add two scalar values.
    fn add(a: Self, b: Self) -> Self;

    /// Midpoint between a and b (used to split a box into quadrants).
    fn mid(a: Self, b: Self) -> Self;

    /// Convert a scalar to the accumulator type.
    fn widen(v: Self) -> Self::Acc;

    /// Zero value for the accumulator type.
    fn acc_zero() -> Self::Acc;

    /// Signed difference `a - b`, computed in the accumulator type.
    #[inline]
    fn diff(a: Self, b: Self) -> Self::Acc {
        Self::widen(a) - Self::widen(b)
    }

    /// Square of an accumulator value.
    ///
    /// Integer accumulators saturate at their maximum instead of overflowing.
    #[inline]
    fn acc_sqr(v: Self::Acc) -> Self::Acc {
        v * v
    }

    /// Sum of two non-negative accumulator values, saturating for integers.
    #[inline]
    fn acc_add(a: Self::Acc, b: Self::Acc) -> Self::Acc {
        a + b
    }
}

impl Scalar for f32 {
    type Acc = f64;

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        0.5 * (a + b)
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v as f64
    }

    #[inline]
    fn acc_zero() -> Self::Acc {
        0.0
    }
}

impl Scalar for f64 {
    type Acc = Self;

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        0.5 * (a + b)
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v
    }

    #[inline]
    fn acc_zero() -> Self::Acc {
        0.0
    }
}

impl Scalar for i64 {
    type Acc = i128;

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        // Average without overflow: (a & b) + ((a ^ b) >> 1)
        (a & b) + ((a ^ b) >> 1)
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v as i128
    }

    #[inline]
    fn acc_zero() -> Self::Acc {
        0
    }

    // A difference of two i64s needs 65 bits, so its square can exceed i128.
    #[inline]
    fn acc_sqr(v: Self::Acc) -> Self::Acc {
        v.saturating_mul(v)
    }

    #[inline]
    fn acc_add(a: Self::Acc, b: Self::Acc) -> Self::Acc {
        a.saturating_add(b)
    }
}
