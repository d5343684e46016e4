// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree construction and nearest-neighbour search.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Debug, Display, Write};

use quarry_geom::Scalar;

use crate::error::BuildError;
use crate::types::{Axis, Coord3, Nearest};

/// An immutable 3D KD-tree.
///
/// Nodes live in an arena; the root is always the first entry.
pub struct KdTree<T: Scalar> {
    arena: Vec<Node<T>>,
    depth: usize,
}

#[derive(Clone, Debug)]
struct Node<T> {
    pivot: [T; 3],
    pivot_index: usize,
    axis: Axis,
    left: Option<NodeIdx>,
    right: Option<NodeIdx>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeIdx(usize);

impl NodeIdx {
    const ROOT: Self = Self(0);

    const fn new(i: usize) -> Self {
        Self(i)
    }

    const fn get(self) -> usize {
        self.0
    }
}

/// Recursive construction state.
struct Builder<'a, P: Coord3> {
    points: &'a [P],
    arena: Vec<Node<P::Scalar>>,
    depth: usize,
}

impl<P: Coord3> Builder<'_, P> {
    fn node(&mut self, indices: &mut [usize], depth: usize) -> NodeIdx {
        let axis = Axis::for_depth(depth);
        let split = partition(self.points, indices, axis);
        let pivot_index = indices[split];

        let idx = NodeIdx::new(self.arena.len());
        self.arena.push(Node {
            pivot: self.points[pivot_index].coords(),
            pivot_index,
            axis,
            left: None,
            right: None,
        });
        self.depth = self.depth.max(depth + 1);

        let (below, rest) = indices.split_at_mut(split);
        let above = &mut rest[1..];
        if !below.is_empty() {
            let left = self.node(below, depth + 1);
            self.arena[idx.get()].left = Some(left);
        }
        if !above.is_empty() {
            let right = self.node(above, depth + 1);
            self.arena[idx.get()].right = Some(right);
        }
        idx
    }
}

/// Median-of-three over the first, middle and last entries of `indices`.
///
/// Returns a position within `indices`. Ties prefer the middle element.
fn median_of_three<P: Coord3>(points: &[P], indices: &[usize], axis: Axis) -> usize {
    let end = indices.len() - 1;
    let mid = end / 2;
    let a = points[indices[0]].coord(axis);
    let b = points[indices[end]].coord(axis);
    let m = points[indices[mid]].coord(axis);

    if a > b {
        if m > a {
            0
        } else if b > m {
            end
        } else {
            mid
        }
    } else if a > m {
        0
    } else if m > b {
        end
    } else {
        mid
    }
}

/// Partition `indices` in place around a median-of-three pivot on `axis`.
///
/// Afterwards every entry before the returned position is `<=` the pivot on
/// `axis` and every entry after it is strictly greater. `indices` must not be empty.
fn partition<P: Coord3>(points: &[P], indices: &mut [usize], axis: Axis) -> usize {
    let split = median_of_three(points, indices, axis);
    let pivot = points[indices[split]].coord(axis);
    indices.swap(0, split);

    // The pivot travels along at `curr - 1`.
    let mut curr = 1;
    let mut end = indices.len() - 1;
    while curr <= end {
        if points[indices[curr]].coord(axis) > pivot {
            indices.swap(curr, end);
            end -= 1;
        } else {
            indices.swap(curr - 1, curr);
            curr += 1;
        }
    }
    curr - 1
}

#[inline]
fn sqr_distance<T: Scalar>(a: &[T; 3], b: &[T; 3]) -> T::Acc {
    let dx = T::diff(a[0], b[0]);
    let dy = T::diff(a[1], b[1]);
    let dz = T::diff(a[2], b[2]);
    T::acc_add(T::acc_add(T::acc_sqr(dx), T::acc_sqr(dy)), T::acc_sqr(dz))
}

impl<T: Scalar> KdTree<T> {
    /// Build a tree over `points`.
    ///
    /// Duplicate points are allowed. The returned indices of
    /// [`find_nearest`](Self::find_nearest) refer to positions in `points`.
    ///
    /// # Panics
    ///
    /// Panics if `points` is empty. Use [`try_build`](Self::try_build) when the
    /// point set may be empty.
    pub fn build<P: Coord3<Scalar = T>>(points: &[P]) -> Self {
        assert!(!points.is_empty(), "KdTree::build requires at least one point");
        let mut indices: Vec<usize> = (0..points.len()).collect();
        let mut builder = Builder {
            points,
            arena: Vec::with_capacity(points.len()),
            depth: 0,
        };
        let root = builder.node(&mut indices, 0);
        debug_assert_eq!(root, NodeIdx::ROOT, "root must be the first arena entry");
        tracing::debug!(
            points = points.len(),
            depth = builder.depth,
            "built kd-tree"
        );
        Self {
            arena: builder.arena,
            depth: builder.depth,
        }
    }

    /// Build a tree over `points`, reporting an empty point set as an error.
    pub fn try_build<P: Coord3<Scalar = T>>(points: &[P]) -> Result<Self, BuildError> {
        if points.is_empty() {
            return Err(BuildError::Empty);
        }
        Ok(Self::build(points))
    }

    /// Number of points in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Always false: a tree holds at least one point.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Number of levels from the root to the deepest leaf, inclusive.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Find the point nearest to `query`.
    ///
    /// Ties between equidistant points are resolved by traversal order.
    pub fn find_nearest<P: Coord3<Scalar = T>>(&self, query: &P) -> Nearest<T> {
        let query = query.coords();
        let root = &self.arena[NodeIdx::ROOT.get()];
        let mut best = Nearest {
            index: root.pivot_index,
            sqr_distance: sqr_distance(&root.pivot, &query),
        };
        self.search(NodeIdx::ROOT, &query, &mut best);
        best
    }

    fn search(&self, idx: NodeIdx, query: &[T; 3], best: &mut Nearest<T>) {
        let node = &self.arena[idx.get()];
        let d = sqr_distance(&node.pivot, query);
        if d < best.sqr_distance {
            *best = Nearest {
                index: node.pivot_index,
                sqr_distance: d,
            };
        }

        let a = node.axis.index();
        let plane = T::diff(query[a], node.pivot[a]);
        let (near, far) = if plane <= T::acc_zero() {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        if let Some(near) = near {
            self.search(near, query, best);
        }
        // The far half-space can only hold a closer point if the splitting
        // plane is nearer than the best match so far.
        if let Some(far) = far
            && best.sqr_distance > T::acc_sqr(plane)
        {
            self.search(far, query, best);
        }
    }

    /// Indented structure dump: one pivot index per line, children right-aligned
    /// two columns further than their parent.
    ///
    /// Mainly useful to eyeball how deep the tree is and how well the splitting
    /// heuristic is doing. Same output as the [`Display`] impl.
    pub fn dump(&self) -> String {
        self.to_string()
    }

    fn write_node<W: Write>(&self, out: &mut W, idx: NodeIdx, width: usize) -> fmt::Result {
        let node = &self.arena[idx.get()];
        writeln!(out, "{:>width$}", node.pivot_index)?;
        if let Some(left) = node.left {
            self.write_node(out, left, width + 2)?;
        }
        if let Some(right) = node.right {
            self.write_node(out, right, width + 2)?;
        }
        Ok(())
    }
}

impl<T: Scalar> Display for KdTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, NodeIdx::ROOT, 0)
    }
}

impl<T: Scalar> Debug for KdTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KdTree")
            .field("points", &self.arena.len())
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}
