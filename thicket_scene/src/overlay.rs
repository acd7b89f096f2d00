// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The multi-selection overlay: membership, grab state, and group motion.

use kurbo::{Point, Vec2};
use thicket_selection::Selection;

use crate::entity::EntityId;

/// An ephemeral multi-selection group.
///
/// An overlay exists only while at least one entity is selected; the scene
/// discards it when the selection empties. Membership outlives a grab: the
/// set persists across pointer-up and is only replaced or cleared by a later
/// pointer-down (see the scene's pointer-down rules).
///
/// While grabbed, the overlay translates every member by the same per-move
/// delta, so relative offsets between members are preserved exactly.
#[derive(Clone, Debug)]
pub struct Overlay {
    members: Selection<EntityId>,
    grabbed: bool,
    last_pos: Option<Point>,
}

impl Overlay {
    /// Creates an overlay containing exactly `first`.
    pub(crate) fn new(first: EntityId) -> Self {
        let mut members = Selection::new();
        members.select_only(first);
        Self {
            members,
            grabbed: false,
            last_pos: None,
        }
    }

    /// The member entities, in selection order.
    #[must_use]
    pub fn members(&self) -> &[EntityId] {
        self.members.items()
    }

    /// Returns `true` if `id` is a member.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.members.contains(&id)
    }

    /// Returns `true` while the overlay is being dragged.
    #[must_use]
    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    /// Adds `id` as a member (no-op if already present).
    pub(crate) fn append(&mut self, id: EntityId) {
        self.members.add(id);
    }

    /// Drops `id` from the membership.
    pub(crate) fn remove_member(&mut self, id: &EntityId) {
        self.members.remove(id);
    }

    /// Grabs the overlay at the given pointer position.
    pub(crate) fn grab(&mut self, pos: Point) {
        self.grabbed = true;
        self.last_pos = Some(pos);
    }

    /// Releases the grab; membership persists.
    pub(crate) fn release(&mut self) {
        self.grabbed = false;
        self.last_pos = None;
    }

    /// Advances a grabbed overlay to `pos`, returning the movement delta
    /// since the last known position (zero when none was recorded).
    ///
    /// Returns `None` while not grabbed.
    pub(crate) fn move_delta(&mut self, pos: Point) -> Option<Vec2> {
        if !self.grabbed {
            return None;
        }
        let delta = pos - self.last_pos.unwrap_or(pos);
        self.last_pos = Some(pos);
        Some(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> EntityId {
        EntityId::new(n, 1)
    }

    #[test]
    fn new_overlay_holds_one_member_ungrabbed() {
        let overlay = Overlay::new(id(0));
        assert_eq!(overlay.members(), &[id(0)]);
        assert!(overlay.contains(id(0)));
        assert!(!overlay.contains(id(1)));
        assert!(!overlay.is_grabbed());
    }

    #[test]
    fn append_grows_membership_once() {
        let mut overlay = Overlay::new(id(0));
        overlay.append(id(1));
        overlay.append(id(1));
        assert_eq!(overlay.members(), &[id(0), id(1)]);
    }

    #[test]
    fn move_delta_requires_grab() {
        let mut overlay = Overlay::new(id(0));
        assert!(overlay.move_delta(Point::new(5.0, 5.0)).is_none());

        overlay.grab(Point::new(5.0, 5.0));
        let delta = overlay.move_delta(Point::new(9.0, 7.0)).unwrap();
        assert_eq!(delta, Vec2::new(4.0, 2.0));
    }

    #[test]
    fn deltas_are_incremental() {
        let mut overlay = Overlay::new(id(0));
        overlay.grab(Point::new(0.0, 0.0));
        assert_eq!(
            overlay.move_delta(Point::new(3.0, 0.0)),
            Some(Vec2::new(3.0, 0.0))
        );
        assert_eq!(
            overlay.move_delta(Point::new(3.0, 5.0)),
            Some(Vec2::new(0.0, 5.0))
        );
    }

    #[test]
    fn release_keeps_members_and_resets_tracking() {
        let mut overlay = Overlay::new(id(0));
        overlay.append(id(1));
        overlay.grab(Point::new(0.0, 0.0));
        overlay.move_delta(Point::new(5.0, 5.0));

        overlay.release();
        assert_eq!(overlay.members(), &[id(0), id(1)]);
        assert!(!overlay.is_grabbed());

        // A fresh grab measures from its own position.
        overlay.grab(Point::new(100.0, 100.0));
        assert_eq!(
            overlay.move_delta(Point::new(104.0, 100.0)),
            Some(Vec2::new(4.0, 0.0))
        );
    }
}
