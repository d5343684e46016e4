// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported when decoding quadrants and branch identifiers.

use thiserror::Error;

/// Errors from converting raw integers into [`Quadrant`](crate::Quadrant)s and
/// [`BranchId`](crate::BranchId)s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BranchError {
    /// A quadrant selector outside `0..=3`.
    #[error("quadrant index {0} is out of range 0..=3")]
    InvalidQuadrant(u8),

    /// The encoded depth is deeper than a branch identifier can describe.
    #[error("branch depth {depth} exceeds the capacity of {capacity} levels")]
    DepthOverflow {
        /// Decoded depth.
        depth: u32,
        /// Maximum supported depth.
        capacity: usize,
    },

    /// The path has selector bits set above its depth.
    #[error("branch path {path:#x} has bits set beyond depth {depth}")]
    StrayPathBits {
        /// Decoded path bits.
        path: u32,
        /// Decoded depth.
        depth: u32,
    },
}
