// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between Kurbo geometry and [`Aabb2D<f64>`].

use kurbo::{Point, Rect};

use crate::types::Aabb2D;

impl From<Rect> for Aabb2D<f64> {
    /// Kurbo rects may be inverted; the box is taken from the normalized rect.
    fn from(r: Rect) -> Self {
        let r = r.abs();
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }
}

impl From<Aabb2D<f64>> for Rect {
    fn from(a: Aabb2D<f64>) -> Self {
        Self::new(a.min_x, a.min_y, a.max_x, a.max_y)
    }
}

impl From<Point> for Aabb2D<f64> {
    fn from(p: Point) -> Self {
        Self::from_point(p.x, p.y)
    }
}
