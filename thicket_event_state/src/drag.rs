// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: track the grabbed element and compute per-move deltas.
//!
//! ## Usage
//!
//! 1) On pointer-down, call [`DragState::grab`] with the grabbed key and the
//!    press position.
//! 2) On each pointer-move, call [`DragState::update`] to get the grabbed key
//!    and the movement delta since the last known position.
//! 3) On pointer-up, call [`DragState::release`] to clear the grab.
//!
//! Deltas are incremental (from the last known position, not from the press),
//! keeping motion 1:1 with the pointer however the updates are batched: the
//! deltas of successive moves always sum to the total displacement. When no
//! prior position is recorded the delta falls back to zero.
//!
//! Only one key may be grabbed at a time; a second grab while one is active
//! is silently ignored until release.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use thicket_event_state::drag::DragState;
//!
//! let mut drag = DragState::new();
//!
//! drag.grab(7, Point::new(10.0, 20.0));
//! assert!(drag.is_grabbing());
//!
//! let (key, delta) = drag.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(key, 7);
//! assert_eq!((delta.x, delta.y), (5.0, 5.0));
//!
//! drag.release();
//! assert!(!drag.is_grabbing());
//! ```

use kurbo::{Point, Vec2};

/// Tracks the single grabbed key and the last known pointer position.
#[derive(Clone, Debug)]
pub struct DragState<K> {
    grabbed: Option<K>,
    last_pos: Option<Point>,
}

impl<K> DragState<K> {
    /// Creates a state with nothing grabbed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            grabbed: None,
            last_pos: None,
        }
    }

    /// Grabs `key` at the given press position.
    ///
    /// Ignored while another grab is active; the existing grab keeps its key
    /// and position tracking until [`DragState::release`].
    pub fn grab(&mut self, key: K, pos: Point) {
        if self.grabbed.is_some() {
            return;
        }
        self.grabbed = Some(key);
        self.last_pos = Some(pos);
    }

    /// Releases the grab and forgets the last position, unconditionally.
    pub fn release(&mut self) {
        self.grabbed = None;
        self.last_pos = None;
    }

    /// Returns `true` while a key is grabbed.
    #[must_use]
    pub fn is_grabbing(&self) -> bool {
        self.grabbed.is_some()
    }

    /// The grabbed key, if any.
    #[must_use]
    pub fn grabbed(&self) -> Option<&K> {
        self.grabbed.as_ref()
    }
}

impl<K: Clone> DragState<K> {
    /// Advances the drag to `pos`, returning the grabbed key and the movement
    /// delta since the last known position.
    ///
    /// Returns `None` when nothing is grabbed. With no prior position
    /// recorded the delta is zero (`pos` is its own reference point).
    pub fn update(&mut self, pos: Point) -> Option<(K, Vec2)> {
        let key = self.grabbed.as_ref()?.clone();
        let delta = pos - self.last_pos.unwrap_or(pos);
        self.last_pos = Some(pos);
        Some((key, delta))
    }
}

impl<K> Default for DragState<K> {
    fn default() -> Self {
        Self::new()
    }
}
