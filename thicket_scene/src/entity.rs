// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entity types: identifiers, flags, shapes, and the scene-graph node.

use alloc::vec::Vec;
use kurbo::{Point, Rect, RoundedRect, RoundedRectRadii, Vec2};
use thicket_hit::PointHit;

use crate::surface::Surface;

/// Identifier for an entity in a [`Scene`](crate::Scene).
///
/// This is a small, copyable handle that stays stable across updates but
/// becomes invalid when the underlying slot is reused. It consists of a slot
/// index and a generation counter.
///
/// ## Semantics
///
/// - On append, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `EntityId` that pointed to
///   that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a
///   new, distinct `EntityId`.
///
/// Use [`Scene::is_alive`](crate::Scene::is_alive) to check whether an
/// `EntityId` still refers to a live entity. Stale ids never alias a
/// different live entity because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct EntityId(pub(crate) u32, pub(crate) u32);

impl EntityId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Entity flags controlling rendering and gesture participation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EntityFlags: u8 {
        /// Entity is visible (participates in rendering).
        const VISIBLE   = 0b0000_0001;
        /// Entity participates in hover diffing.
        const HOVERABLE = 0b0000_0010;
        /// Entity may be grabbed by the single-entity drag manager.
        const DRAGGABLE = 0b0000_0100;
    }
}

impl Default for EntityFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::HOVERABLE | Self::DRAGGABLE
    }
}

/// The closed set of shape variants an entity can carry.
///
/// New shape kinds are added here as variants; each variant owns its
/// hit-test, translation, and draw behavior. There is no open subclassing.
#[derive(Clone, Debug)]
pub enum Shape {
    /// Rectangle with four corner radii (a shared radius is the common case).
    Rect(RoundedRect),
}

impl Shape {
    /// Hit-tests `pt` against this shape.
    ///
    /// Purely a function of the shape's own geometry; flags and scene
    /// structure do not participate.
    #[must_use]
    pub fn may_hit(&self, pt: Point) -> bool {
        match self {
            Self::Rect(rr) => rr.may_hit(pt),
        }
    }

    /// Translates the shape by `delta`: position changes, size and radii do
    /// not.
    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Self::Rect(rr) => *rr = RoundedRect::from_rect(rr.rect() + delta, rr.radii()),
        }
    }

    /// The shape's axis-aligned bounding rectangle.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect(rr) => rr.rect(),
        }
    }
}

/// A node in the scene graph: a shape plus interaction state and children.
///
/// Entities are created by the scene owner and appended to a
/// [`Scene`](crate::Scene), which then owns them. Drag and group-move
/// operations mutate the shape's position in place; the core never destroys
/// an entity on its own ([`Scene::remove`](crate::Scene::remove) exists for
/// the embedding layer).
#[derive(Clone, Debug)]
pub struct Entity {
    pub(crate) shape: Shape,
    pub(crate) flags: EntityFlags,
    pub(crate) selected: bool,
    pub(crate) children: Vec<EntityId>,
}

impl Entity {
    /// Creates an entity with the given shape and default flags.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            flags: EntityFlags::default(),
            selected: false,
            children: Vec::new(),
        }
    }

    /// Convenience constructor for a rectangle at `(x, y)` with the given
    /// size and corner radius (shared or per-corner).
    #[must_use]
    pub fn rect(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radius: impl Into<RoundedRectRadii>,
    ) -> Self {
        Self::new(Shape::Rect(RoundedRect::new(
            x,
            y,
            x + width,
            y + height,
            radius,
        )))
    }

    /// Builder-style flag override.
    #[must_use]
    pub fn with_flags(mut self, flags: EntityFlags) -> Self {
        self.flags = flags;
        self
    }

    /// The entity's shape.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The entity's flags.
    #[must_use]
    pub fn flags(&self) -> EntityFlags {
        self.flags
    }

    /// Replaces the entity's flags.
    pub fn set_flags(&mut self, flags: EntityFlags) {
        self.flags = flags;
    }

    /// Whether the entity is currently part of the active selection overlay.
    ///
    /// Maintained by the scene; renderers read it to style selected entities.
    #[must_use]
    pub fn selected(&self) -> bool {
        self.selected
    }

    /// The entity's children, in insertion order.
    #[must_use]
    pub fn children(&self) -> &[EntityId] {
        &self.children
    }

    /// Hit-tests `pt` against the entity's own geometry.
    #[must_use]
    pub fn may_hit(&self, pt: Point) -> bool {
        self.shape.may_hit(pt)
    }

    /// Translates the entity by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        self.shape.translate(delta);
    }

    /// Draws the entity onto `surface`.
    pub fn draw(&self, surface: &mut impl Surface) {
        match &self.shape {
            Shape::Rect(rr) => surface.rounded_rect(*rr, self.selected),
        }
    }
}
