// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by [`KdTree::try_build`](crate::KdTree::try_build).

use thiserror::Error;

/// Errors that can occur while building a [`KdTree`](crate::KdTree).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The point set was empty; a tree needs at least one point.
    #[error("cannot build a kd-tree from an empty point set")]
    Empty,
}
