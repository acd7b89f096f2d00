// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click recognition: distinguish a click from a drag by intervening motion.
//!
//! A gesture is a click when the pointer goes down on an element and comes
//! back up on the same element with **no pointer-move in between**. Any move
//! between press and release demotes the gesture to a drag and the click is
//! suppressed.
//!
//! Disambiguating by motion rather than elapsed time avoids misclassifying
//! slow-but-stationary presses as drags and fast jitter as clicks.
//!
//! ## Usage
//!
//! Feed press/move/release in event order:
//! ```
//! use thicket_event_state::click::{ClickState, ClickResult};
//!
//! let mut state: ClickState<u32> = ClickState::new();
//!
//! state.on_down(42);
//! let result = state.on_up(Some(&42));
//! assert!(matches!(result, ClickResult::Click(42)));
//! ```
//!
//! A drag gesture produces no click:
//! ```
//! # use thicket_event_state::click::{ClickState, ClickResult};
//! let mut state: ClickState<u32> = ClickState::new();
//!
//! state.on_down(42);
//! state.on_move();
//! let result = state.on_up(Some(&42));
//! assert_eq!(result, ClickResult::Suppressed(Some(42)));
//! ```
//!
//! ## Recognition Rules
//!
//! 1. **Same target, no motion**: press and release on the same element with
//!    no intervening move generates a click.
//! 2. **Any intervening move**: no click, regardless of where the release
//!    lands.
//! 3. **Different or missing release target**: no click.
//! 4. **No active press**: release is ignored.
//!
//! The state resets to idle after every release, whatever the outcome.

/// Phase of the current gesture.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GesturePhase {
    /// No press is active.
    Idle,
    /// The pointer is down and has not moved since the press.
    Pressed,
    /// The pointer moved while down; a click is no longer possible.
    Dragging,
}

/// State for an active press.
#[derive(Clone, Debug)]
struct Press<K> {
    /// Element the press landed on.
    target: K,
    /// True once any pointer-move was seen during this press.
    moved: bool,
}

/// Result of processing a pointer release.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickResult<K> {
    /// A click should be generated on the target.
    Click(K),
    /// No click; carries the originally pressed target if there was one.
    Suppressed(Option<K>),
}

/// Motion-windowed click state machine.
///
/// Tracks at most one active press (single pointer stream). A new press while
/// one is active replaces it; the caller is expected to deliver release
/// events reliably so this only happens when a release was lost upstream.
#[derive(Clone, Debug)]
pub struct ClickState<K> {
    press: Option<Press<K>>,
    /// Target of the last press that produced a click.
    last_click: Option<K>,
}

impl<K> Default for ClickState<K> {
    fn default() -> Self {
        Self {
            press: None,
            last_click: None,
        }
    }
}

impl<K: PartialEq + Clone> ClickState<K> {
    /// Creates an idle click state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            press: None,
            last_click: None,
        }
    }

    /// Returns the current gesture phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match &self.press {
            None => GesturePhase::Idle,
            Some(press) if press.moved => GesturePhase::Dragging,
            Some(_) => GesturePhase::Pressed,
        }
    }

    /// Records a pointer press on `target`.
    pub fn on_down(&mut self, target: K) {
        self.press = Some(Press {
            target,
            moved: false,
        });
    }

    /// Records a pointer move, demoting an active press to a drag.
    pub fn on_move(&mut self) {
        if let Some(press) = &mut self.press {
            press.moved = true;
        }
    }

    /// Processes a pointer release over `current_target` (if any element was
    /// hit at the release point) and resets to idle.
    ///
    /// Returns [`ClickResult::Click`] only when the press is still in the
    /// pressed phase and the release landed on the pressed element.
    pub fn on_up(&mut self, current_target: Option<&K>) -> ClickResult<K> {
        let Some(press) = self.press.take() else {
            return ClickResult::Suppressed(None);
        };

        if press.moved {
            return ClickResult::Suppressed(Some(press.target));
        }

        match current_target {
            Some(target) if *target == press.target => {
                self.last_click = Some(press.target.clone());
                ClickResult::Click(press.target)
            }
            _ => ClickResult::Suppressed(Some(press.target)),
        }
    }

    /// Cancels the active press, if any.
    ///
    /// Returns `true` if a press was canceled.
    pub fn cancel(&mut self) -> bool {
        self.press.take().is_some()
    }

    /// Returns `true` while a press is active (pressed or dragging).
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Target of the active press, if any.
    #[must_use]
    pub fn pressed(&self) -> Option<&K> {
        self.press.as_ref().map(|press| &press.target)
    }

    /// Target of the most recent press that produced a click, if any.
    #[must_use]
    pub fn last_click(&self) -> Option<&K> {
        self.last_click.as_ref()
    }
}
