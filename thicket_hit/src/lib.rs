// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Hit: point-in-shape predicates for interactive scenes.
//!
//! This crate provides the narrow-phase predicate used by Thicket's scene
//! layer to decide whether a pointer position falls on a shape. It is
//! intentionally decoupled from any particular scene tree or event router:
//! callers transform the query point into a shape's local coordinates and ask
//! the shape directly.
//!
//! # Key types
//!
//! - [`PointHit`] – a trait implemented by shapes that can answer "does this
//!   local-space point land on me?" queries.
//!
//! Implementations are provided for two [`kurbo`] primitives:
//!
//! - [`Rect`] – axis-aligned rectangle, tested against its *open* interior
//!   (edge points are not hits).
//! - [`RoundedRect`] – rounded rectangle with per-corner radii. Points
//!   strictly inside the rectangle hit unless they fall in a corner's inset
//!   box but outside that corner's disk; the four closed corner disks are
//!   hits outright.
//!
//! # Boundary semantics
//!
//! The predicate is deliberately asymmetric at the boundary: straight edges
//! are open (a point exactly on an edge is a miss) while corner disks are
//! closed (a point exactly on an arc, or on a disk's edge tangent point, is a
//! hit). With all radii zero the test reduces to the open-rectangle test plus
//! the four exact corner points, which the zero-radius disks collapse to.
//!
//! Inputs are not validated: a radius that is negative or exceeds half the
//! shorter side produces whatever the formulas produce.
//!
//! # Example
//!
//! ```
//! use kurbo::{Point, RoundedRect};
//! use thicket_hit::PointHit;
//!
//! let card = RoundedRect::new(0.0, 0.0, 100.0, 100.0, 20.0);
//! assert!(card.may_hit(Point::new(50.0, 50.0)));
//! // Deep in the corner region, outside the corner disk.
//! assert!(!card.may_hit(Point::new(4.0, 4.0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Point, Rect, RoundedRect, Vec2};

/// Trait for point-in-shape hit testing in local coordinates.
///
/// The predicate must be pure: no side effects, and no dependence on anything
/// but the shape's own geometry and the query point.
pub trait PointHit {
    /// Returns `true` if `pt` lands on this shape.
    fn may_hit(&self, pt: Point) -> bool;
}

impl PointHit for Rect {
    /// Open-interior test: points exactly on an edge are misses.
    ///
    /// This differs from [`Rect::contains`], which is closed on the min edges.
    fn may_hit(&self, pt: Point) -> bool {
        self.x0 < pt.x && pt.x < self.x1 && self.y0 < pt.y && pt.y < self.y1
    }
}

impl PointHit for RoundedRect {
    fn may_hit(&self, pt: Point) -> bool {
        let rect = self.rect();
        let radii = self.radii();

        // Each corner: arc center (the inset corner), radius, and the sign
        // pair selecting the quadrant of the corner's inset box.
        let corners = [
            (
                Point::new(rect.x0 + radii.top_left, rect.y0 + radii.top_left),
                radii.top_left,
                (-1.0, -1.0),
            ),
            (
                Point::new(rect.x1 - radii.top_right, rect.y0 + radii.top_right),
                radii.top_right,
                (1.0, -1.0),
            ),
            (
                Point::new(rect.x1 - radii.bottom_right, rect.y1 - radii.bottom_right),
                radii.bottom_right,
                (1.0, 1.0),
            ),
            (
                Point::new(rect.x0 + radii.bottom_left, rect.y1 - radii.bottom_left),
                radii.bottom_left,
                (-1.0, 1.0),
            ),
        ];

        // Closed corner disks hit outright. This admits the disks' edge
        // tangent points, and collapses to the exact corner point when the
        // corner radius is zero.
        if corners.iter().any(|&(c, r, _)| dist_sq(pt, c) <= r * r) {
            return true;
        }

        // Otherwise the point must be strictly interior and clear of every
        // corner's inset box: the box minus its disk lies outside the shape,
        // and the disks were already checked above.
        rect.may_hit(pt) && !corners.iter().any(|&(c, _, s)| in_corner_box(pt, c, s))
    }
}

#[inline]
fn dist_sq(a: Point, b: Point) -> f64 {
    let d: Vec2 = a - b;
    d.hypot2()
}

/// Strict quadrant test: is `pt` inside the corner box whose inner corner is
/// `center`, on the side selected by the sign pair `s`?
#[inline]
fn in_corner_box(pt: Point, center: Point, s: (f64, f64)) -> bool {
    (pt.x - center.x) * s.0 > 0.0 && (pt.y - center.y) * s.1 > 0.0
}
