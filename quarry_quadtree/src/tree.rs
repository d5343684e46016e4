// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: placement, queries, removal.

use alloc::vec::Vec;
use core::fmt::Debug;

use quarry_geom::{Aabb2D, Scalar};

use crate::branch::{BranchId, Quadrant};
use crate::iter::Iter;

/// Depth limit used by [`QuadTree::new`].
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// A region quad-tree over items `P` tagged with boxes in scalar `T`.
///
/// Each item is stored in the deepest node whose quadrant fully contains its box.
/// Items straddling a split line, or reaching the depth limit, stay in the local
/// container of the node they stopped at. Child nodes are created on demand and
/// only dropped by [`clear`](Self::clear) or [`resize`](Self::resize).
pub struct QuadTree<T: Scalar, P> {
    bounds: Aabb2D<T>,
    max_depth: usize,
    pub(crate) arena: Vec<Node<T, P>>,
}

pub(crate) struct Node<T: Scalar, P> {
    depth: usize,
    quadrants: [Aabb2D<T>; 4],
    pub(crate) children: [Option<NodeIdx>; 4],
    pub(crate) items: Vec<(Aabb2D<T>, P)>,
}

impl<T: Scalar, P> Node<T, P> {
    fn new(bounds: Aabb2D<T>, depth: usize) -> Self {
        Self {
            depth,
            quadrants: bounds.quadrants(),
            children: [None; 4],
            items: Vec::new(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeIdx(usize);

impl NodeIdx {
    pub(crate) const ROOT: Self = Self(0);

    const fn new(i: usize) -> Self {
        Self(i)
    }

    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

impl<T: Scalar, P> QuadTree<T, P> {
    /// Create an empty tree covering `bounds` with the default depth limit.
    pub fn new(bounds: Aabb2D<T>) -> Self {
        Self::with_max_depth(bounds, DEFAULT_MAX_DEPTH)
    }

    /// Create an empty tree with a custom depth limit.
    ///
    /// Items are never placed deeper than `max_depth - 1` levels below the root.
    ///
    /// # Panics
    ///
    /// Panics if `max_depth` exceeds [`BranchId::CAPACITY`].
    pub fn with_max_depth(bounds: Aabb2D<T>, max_depth: usize) -> Self {
        assert!(
            max_depth <= BranchId::CAPACITY,
            "max_depth {max_depth} exceeds branch capacity {}",
            BranchId::CAPACITY
        );
        let mut arena = Vec::new();
        arena.push(Node::new(bounds, 0));
        Self {
            bounds,
            max_depth,
            arena,
        }
    }

    /// The bounds the root was split from.
    pub fn bounds(&self) -> Aabb2D<T> {
        self.bounds
    }

    /// The depth limit this tree was created with.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Total number of stored items.
    pub fn len(&self) -> usize {
        self.arena.iter().map(|n| n.items.len()).sum()
    }

    /// Whether the tree stores no items.
    pub fn is_empty(&self) -> bool {
        self.arena.iter().all(|n| n.items.is_empty())
    }

    /// Drop every item and child node. Quadrant geometry is kept.
    pub fn clear(&mut self) {
        self.arena.truncate(1);
        let root = &mut self.arena[NodeIdx::ROOT.get()];
        root.items.clear();
        root.children = [None; 4];
        tracing::debug!("cleared quadtree");
    }

    /// Clear the tree and split `bounds` into fresh quadrants.
    pub fn resize(&mut self, bounds: Aabb2D<T>) {
        self.clear();
        self.bounds = bounds;
        self.arena[NodeIdx::ROOT.get()].quadrants = bounds.quadrants();
        tracing::debug!(?bounds, "resized quadtree");
    }

    /// Insert `item` with box `rect` and return the branch it was stored at.
    ///
    /// Boxes extending past the root bounds are accepted and stored at the root.
    pub fn add(&mut self, item: P, rect: Aabb2D<T>) -> BranchId {
        let mut idx = NodeIdx::ROOT;
        let mut branch = BranchId::ROOT;
        loop {
            let node = &self.arena[idx.get()];
            let fits = if node.depth + 1 < self.max_depth {
                Quadrant::ALL
                    .into_iter()
                    .find(|q| node.quadrants[q.index()].contains(&rect))
            } else {
                None
            };
            let Some(quadrant) = fits else {
                self.arena[idx.get()].items.push((rect, item));
                tracing::trace!(?branch, "stored item");
                return branch;
            };
            idx = self.child_or_insert(idx, quadrant);
            branch = branch.push(quadrant);
        }
    }

    fn child_or_insert(&mut self, parent: NodeIdx, quadrant: Quadrant) -> NodeIdx {
        let q = quadrant.index();
        if let Some(child) = self.arena[parent.get()].children[q] {
            return child;
        }
        let p = &self.arena[parent.get()];
        let node = Node::new(p.quadrants[q], p.depth + 1);
        let child = NodeIdx::new(self.arena.len());
        self.arena.push(node);
        self.arena[parent.get()].children[q] = Some(child);
        child
    }

    /// All items whose box overlaps `area`.
    pub fn search_all(&self, area: Aabb2D<T>) -> Vec<&P> {
        let mut out = Vec::new();
        self.search_all_into(area, &mut out);
        out
    }

    /// Append all items whose box overlaps `area` to `out`.
    ///
    /// Subtrees whose quadrant lies entirely inside `area` are copied wholesale
    /// without testing their items.
    pub fn search_all_into<'a>(&'a self, area: Aabb2D<T>, out: &mut Vec<&'a P>) {
        self.search_node(NodeIdx::ROOT, &area, out);
    }

    fn search_node<'a>(&'a self, idx: NodeIdx, area: &Aabb2D<T>, out: &mut Vec<&'a P>) {
        let node = &self.arena[idx.get()];
        out.extend(
            node.items
                .iter()
                .filter(|(r, _)| r.overlaps(area))
                .map(|(_, p)| p),
        );
        for (quadrant, child) in node.quadrants.iter().zip(node.children) {
            let Some(child) = child else {
                continue;
            };
            if area.contains(quadrant) {
                out.extend(Iter::from_node(self, child));
            } else if area.overlaps(quadrant) {
                self.search_node(child, area, out);
            }
        }
    }

    /// The first item whose box overlaps `area`, in traversal order
    /// (a node's own items, then its children in quadrant order).
    pub fn search_one(&self, area: Aabb2D<T>) -> Option<&P> {
        self.search_one_in(NodeIdx::ROOT, &area)
    }

    fn search_one_in(&self, idx: NodeIdx, area: &Aabb2D<T>) -> Option<&P> {
        let node = &self.arena[idx.get()];
        if let Some((_, p)) = node.items.iter().find(|(r, _)| r.overlaps(area)) {
            return Some(p);
        }
        node.quadrants
            .iter()
            .zip(node.children)
            .filter_map(|(quadrant, child)| child.filter(|_| area.overlaps(quadrant)))
            .find_map(|child| self.search_one_in(child, area))
    }

    /// Remove one item equal to `item` from the node identified by `branch`.
    ///
    /// Only that node's own items are scanned. Returns false if the branch does
    /// not exist or holds no such item.
    pub fn remove_in<Q>(&mut self, branch: BranchId, item: &Q) -> bool
    where
        Q: PartialEq<P> + ?Sized,
    {
        let Some(idx) = self.node_at(branch) else {
            return false;
        };
        remove_local(&mut self.arena[idx.get()].items, item)
    }

    /// Remove one item equal to `item`, scanning the whole tree.
    ///
    /// Prefer [`remove_in`](Self::remove_in) when the branch is known.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        Q: PartialEq<P> + ?Sized,
    {
        let removed = self.remove_from(NodeIdx::ROOT, item);
        tracing::trace!(removed, "removed by full scan");
        removed
    }

    fn remove_from<Q>(&mut self, idx: NodeIdx, item: &Q) -> bool
    where
        Q: PartialEq<P> + ?Sized,
    {
        if remove_local(&mut self.arena[idx.get()].items, item) {
            return true;
        }
        let children = self.arena[idx.get()].children;
        children
            .into_iter()
            .flatten()
            .any(|child| self.remove_from(child, item))
    }

    /// Move `item` from `branch` to box `rect`, returning its new branch.
    pub fn relocate(&mut self, branch: BranchId, item: P, rect: Aabb2D<T>) -> BranchId
    where
        P: PartialEq,
    {
        if !self.remove_in(branch, &item) {
            tracing::trace!(?branch, "relocated item was not stored at its branch");
        }
        self.add(item, rect)
    }

    /// Move `item` from `branch` to the point `(x, y)`, returning its new branch.
    pub fn relocate_to_point(&mut self, branch: BranchId, item: P, x: T, y: T) -> BranchId
    where
        P: PartialEq,
    {
        self.relocate(branch, item, Aabb2D::from_point(x, y))
    }

    /// Branches of the existing nodes whose quadrant contains `(x, y)`, root first.
    ///
    /// Items that could overlap the point are stored in these nodes only.
    pub fn branches_at(&self, x: T, y: T) -> Vec<BranchId> {
        let mut out = Vec::new();
        let mut idx = NodeIdx::ROOT;
        let mut branch = BranchId::ROOT;
        loop {
            out.push(branch);
            let node = &self.arena[idx.get()];
            let Some(quadrant) = Quadrant::ALL
                .into_iter()
                .find(|q| node.quadrants[q.index()].contains_point(x, y))
            else {
                return out;
            };
            let Some(child) = node.children[quadrant.index()] else {
                return out;
            };
            idx = child;
            branch = branch.push(quadrant);
        }
    }

    /// The `(rect, item)` pairs stored at `branch`, or `None` if that node does not exist.
    pub fn items_in(&self, branch: BranchId) -> Option<&[(Aabb2D<T>, P)]> {
        let idx = self.node_at(branch)?;
        Some(self.arena[idx.get()].items.as_slice())
    }

    /// Iterate over every item: a node's own items first, then its children
    /// depth-first in quadrant order.
    pub fn iter(&self) -> Iter<'_, T, P> {
        Iter::from_node(self, NodeIdx::ROOT)
    }

    fn node_at(&self, branch: BranchId) -> Option<NodeIdx> {
        branch.path().try_fold(NodeIdx::ROOT, |idx, quadrant| {
            self.arena[idx.get()].children[quadrant.index()]
        })
    }
}

/// Remove the last item equal to `item`, keeping the order of the rest.
fn remove_local<T, P, Q>(items: &mut Vec<(Aabb2D<T>, P)>, item: &Q) -> bool
where
    Q: PartialEq<P> + ?Sized,
{
    match items.iter().rposition(|(_, p)| item.eq(p)) {
        Some(i) => {
            items.remove(i);
            true
        }
        None => false,
    }
}

impl<'a, T: Scalar, P> IntoIterator for &'a QuadTree<T, P> {
    type Item = &'a P;
    type IntoIter = Iter<'a, T, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Scalar, P> Debug for QuadTree<T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("bounds", &self.bounds)
            .field("max_depth", &self.max_depth)
            .field("nodes", &self.arena.len())
            .field("items", &self.len())
            .finish_non_exhaustive()
    }
}
