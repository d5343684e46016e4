// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth-first item iterator.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::slice;

use quarry_geom::{Aabb2D, Scalar};

use crate::tree::{NodeIdx, QuadTree};

/// Iterator over the items of a [`QuadTree`], created by [`QuadTree::iter`].
///
/// Yields a node's own items before descending into its children in
/// quadrant order.
pub struct Iter<'a, T: Scalar, P> {
    tree: &'a QuadTree<T, P>,
    stack: Vec<NodeIdx>,
    items: slice::Iter<'a, (Aabb2D<T>, P)>,
}

impl<'a, T: Scalar, P> Iter<'a, T, P> {
    /// Iterate the subtree rooted at `start`.
    pub(crate) fn from_node(tree: &'a QuadTree<T, P>, start: NodeIdx) -> Self {
        let mut stack = Vec::new();
        stack.push(start);
        Self {
            tree,
            stack,
            items: slice::Iter::default(),
        }
    }
}

impl<'a, T: Scalar, P> Iterator for Iter<'a, T, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((_, p)) = self.items.next() {
                return Some(p);
            }
            let idx = self.stack.pop()?;
            let node = &self.tree.arena[idx.get()];
            // Reversed so quadrant 0 is popped first.
            self.stack.extend(node.children.iter().rev().flatten());
            self.items = node.items.iter();
        }
    }
}

impl<T: Scalar, P> Debug for Iter<'_, T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Iter")
            .field("pending_nodes", &self.stack.len())
            .field("pending_items", &self.items.len())
            .finish_non_exhaustive()
    }
}
