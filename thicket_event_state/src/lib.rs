// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Event State: gesture state managers for pointer interactions.
//!
//! This crate provides small, focused state machines for the pointer
//! interactions that require stateful tracking across multiple events. Each
//! module handles one interaction pattern:
//!
//! - [`hover`]: Diff the set of elements under the pointer against the
//!   previous pointer-move to compute enter/exit transitions
//! - [`click`]: Distinguish a click (press and release with no intervening
//!   motion) from a drag
//! - [`drag`]: Track the single grabbed element and compute incremental
//!   movement deltas
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Integration-friendly**: Work with any hit-testing or scene structure
//! - **Generic**: Accept application-specific entity/node ID types
//!
//! The crate does not assume any particular UI framework, event system, or
//! scene graph. The managers accept pre-computed information (hit keys from
//! your own hit testing, canvas-local pointer positions) and produce
//! transitions or per-move deltas that callers interpret. In particular, the
//! managers never invoke callbacks themselves; the caller reads the computed
//! transitions and notifies its entities.
//!
//! ## Usage Patterns
//!
//! ### Hover Diffing
//!
//! Run one [`hover::HoverCycle`] per pointer-move: rotate the sets, append
//! every key hit this frame, then read the enter/exit differences.
//!
//! ```rust
//! use thicket_event_state::hover::HoverCycle;
//!
//! let mut hover = HoverCycle::new();
//!
//! hover.start_cycle();
//! hover.append(1);
//! hover.append(2);
//! assert_eq!(hover.entered(), vec![1, 2]);
//! hover.finish_cycle();
//!
//! // Next move: the pointer left 2 and reached 3.
//! hover.start_cycle();
//! hover.append(1);
//! hover.append(3);
//! assert_eq!(hover.entered(), vec![3]);
//! assert_eq!(hover.exited(), vec![2]);
//! hover.finish_cycle();
//! ```
//!
//! ### Click Recognition
//!
//! [`click::ClickState`] recognizes a click only when nothing moved between
//! press and release; any intervening pointer-move demotes the gesture to a
//! drag.
//!
//! ```rust
//! # #[cfg(feature = "click")]
//! # fn example() {
//! use thicket_event_state::click::{ClickState, ClickResult};
//!
//! let mut clicks = ClickState::new();
//!
//! clicks.on_down(42);
//! let result = clicks.on_up(Some(&42));
//! assert_eq!(result, ClickResult::Click(42));
//!
//! // A move between press and release suppresses the click.
//! clicks.on_down(42);
//! clicks.on_move();
//! let result = clicks.on_up(Some(&42));
//! assert_eq!(result, ClickResult::Suppressed(Some(42)));
//! # }
//! ```
//!
//! ### Drag Tracking
//!
//! [`drag::DragState`] holds the single grabbed key and yields the movement
//! delta since the previous position on each update.
//!
//! ```rust
//! # #[cfg(feature = "drag")]
//! # fn example() {
//! use kurbo::Point;
//! use thicket_event_state::drag::DragState;
//!
//! let mut drag = DragState::new();
//!
//! drag.grab(7, Point::new(10.0, 10.0));
//! let (key, delta) = drag.update(Point::new(15.0, 12.0)).unwrap();
//! assert_eq!(key, 7);
//! assert_eq!((delta.x, delta.y), (5.0, 2.0));
//! # }
//! ```
//!
//! ## Integration
//!
//! These managers are composed by `thicket_scene`, which performs hit
//! testing, feeds the results here in a fixed dispatch order, and turns the
//! computed transitions into entity notifications. They are equally usable
//! against any other scene structure.
//!
//! ## Features
//!
//! - `click`: Enable motion-windowed click recognition
//! - `drag`: Enable drag state tracking (requires the `kurbo` dependency)
//! - `hashbrown`: Enable hash-based hover diffing for large hit sets
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

#[cfg(feature = "click")]
pub mod click;

#[cfg(feature = "drag")]
pub mod drag;
pub mod hover;
