// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The narrow seam to the rendering collaborator.

use kurbo::{Rect, RoundedRect};

/// Drawing operations the scene needs from a rendering backend.
///
/// The scene never touches pixels. Once per display frame the host calls
/// [`Scene::render_frame`](crate::Scene::render_frame), which clears the
/// surface, draws all visible entities in insertion order (children
/// depth-first after their parent), and finally draws the active overlay's
/// bounding box so it is always on top. How any of these calls turn into
/// pixels (stroke and fill styles, corner curves, anti-aliasing) is entirely
/// the implementor's business.
pub trait Surface {
    /// Clears the drawing surface at the start of a frame.
    fn clear(&mut self);

    /// Draws one entity shape. `selected` is set for members of the active
    /// overlay so they can be styled distinctly.
    fn rounded_rect(&mut self, shape: RoundedRect, selected: bool);

    /// Draws the overlay's bounding box.
    fn selection_box(&mut self, bounds: Rect);
}
