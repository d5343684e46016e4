// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrant selectors and packed root-to-node paths.

use crate::error::BranchError;

/// One of the four equal subdivisions of a node's bounds.
///
/// `y` grows downwards, so the top quadrants cover the `min_y` half.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `min_x`, `min_y` corner.
    TopLeft = 0,
    /// `max_x`, `min_y` corner.
    TopRight = 1,
    /// `min_x`, `max_y` corner.
    BottomLeft = 2,
    /// `max_x`, `max_y` corner.
    BottomRight = 3,
}

impl Quadrant {
    /// All quadrants in placement order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Position of this quadrant in [`Quadrant::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    const fn from_bits(bits: u32) -> Self {
        match bits & 0b11 {
            0 => Self::TopLeft,
            1 => Self::TopRight,
            2 => Self::BottomLeft,
            _ => Self::BottomRight,
        }
    }
}

impl TryFrom<u8> for Quadrant {
    type Error = BranchError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        if v > 0b11 {
            return Err(BranchError::InvalidQuadrant(v));
        }
        Ok(Self::from_bits(u32::from(v)))
    }
}

/// Identifies the node holding an item: the quadrant taken at each level from
/// the root down, two bits per level, plus the number of levels.
///
/// Returned by [`QuadTree::add`](crate::QuadTree::add) and consumed by
/// [`QuadTree::remove_in`](crate::QuadTree::remove_in) and
/// [`QuadTree::relocate`](crate::QuadTree::relocate), which descend straight
/// to that node instead of scanning the tree.
///
/// The packing is only an identity. It can be stored as a `u64`
/// (`path << 32 | depth`) and decoded again with [`TryFrom<u64>`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BranchId {
    path: u32,
    depth: u32,
}

impl BranchId {
    /// The root node (empty path).
    pub const ROOT: Self = Self { path: 0, depth: 0 };

    /// Deepest path a branch identifier can hold.
    pub const CAPACITY: usize = 16;

    /// Number of levels below the root.
    pub const fn depth(self) -> usize {
        self.depth as usize
    }

    /// Whether this identifies the root node.
    pub const fn is_root(self) -> bool {
        self.depth == 0
    }

    /// Extend the path by one level.
    pub(crate) fn push(self, quadrant: Quadrant) -> Self {
        debug_assert!(
            self.depth() < Self::CAPACITY,
            "branch path is full at depth {}",
            self.depth
        );
        Self {
            path: (self.path << 2) | quadrant as u32,
            depth: self.depth + 1,
        }
    }

    /// Quadrants from the root down to the identified node.
    pub fn path(self) -> impl DoubleEndedIterator<Item = Quadrant> + ExactSizeIterator {
        (0..self.depth).map(move |level| {
            let shift = 2 * (self.depth - 1 - level);
            Quadrant::from_bits(self.path >> shift)
        })
    }
}

impl From<BranchId> for u64 {
    fn from(b: BranchId) -> Self {
        (Self::from(b.path) << 32) | Self::from(b.depth)
    }
}

impl TryFrom<u64> for BranchId {
    type Error = BranchError;

    #[allow(
        clippy::cast_possible_truncation,
        reason = "The two halves of the u64 are split apart on purpose."
    )]
    fn try_from(v: u64) -> Result<Self, Self::Error> {
        let path = (v >> 32) as u32;
        let depth = v as u32;
        if depth as usize > Self::CAPACITY {
            return Err(BranchError::DepthOverflow {
                depth,
                capacity: Self::CAPACITY,
            });
        }
        if path.checked_shr(2 * depth).unwrap_or(0) != 0 {
            return Err(BranchError::StrayPathBits { path, depth });
        }
        Ok(Self { path, depth })
    }
}
