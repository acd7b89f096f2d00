// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Scene: an interactive 2D scene graph for pointer gestures.
//!
//! Thicket Scene turns raw pointer events into higher-level gestures
//! (hover, click, drag, multi-select, group-move) against a set of geometric
//! shapes. It is the event-interpretation layer under a canvas editor where
//! users point at, select, and drag rectangles.
//!
//! ## Architecture
//!
//! A [`Scene`] owns an arena of [`Entity`] nodes (ordered top-level roots,
//! optionally nested children) and routes every pointer event through four
//! collaborating pieces in a fixed order:
//!
//! 1. **Click**: `thicket_event_state::click` distinguishes a click from a
//!    drag by intervening motion.
//! 2. **Hover**: `thicket_event_state::hover` diffs the set of entities
//!    under the pointer against the previous move to produce enter/exit
//!    transitions.
//! 3. **Drag**: `thicket_event_state::drag` tracks the single grabbed
//!    entity and yields incremental movement deltas.
//! 4. **Overlay**: the scene's own [`Overlay`] handling, a multi-selection
//!    that grows via ctrl-click, moves all members rigidly while grabbed,
//!    and renders a bounding box above everything else.
//!
//! Hit testing is linear over the entity list: first match in insertion
//! order wins for click/drag/overlay targeting, while hover collects every
//! hit and descends into the children of hit parents. Both behaviors are
//! part of the contract; there is no spatial index and none is planned at
//! this layer.
//!
//! ## Hosting
//!
//! The scene is passive. The host converts native input into
//! [`PointerEvent`]s (canvas-local coordinates, ctrl modifier on down) and
//! calls [`Scene::handle_event`]; it owns the frame loop and calls
//! [`Scene::render_frame`] once per display frame with its [`Surface`]
//! implementation. The scene registers no listeners and never schedules
//! itself.
//!
//! ## Example
//!
//! ```
//! use kurbo::Point;
//! use thicket_scene::{Entity, PointerEvent, Scene, SceneEvent};
//!
//! let mut scene = Scene::new();
//! let a = scene.append(Entity::rect(0.0, 0.0, 100.0, 100.0, 20.0));
//! let b = scene.append(Entity::rect(100.0, 100.0, 100.0, 100.0, 0.0));
//!
//! // Drag `a` by (5, 0): press, move, release.
//! scene.handle_event(PointerEvent::Down {
//!     pos: Point::new(50.0, 50.0),
//!     ctrl: false,
//! });
//! let events = scene.handle_event(PointerEvent::Move {
//!     pos: Point::new(55.0, 50.0),
//! });
//! assert!(events.contains(&SceneEvent::Moved(a, kurbo::Vec2::new(5.0, 0.0))));
//!
//! // The motion suppressed the click.
//! let events = scene.handle_event(PointerEvent::Up {
//!     pos: Point::new(55.0, 50.0),
//! });
//! assert!(!events.contains(&SceneEvent::Clicked(a)));
//! # let _ = b;
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod entity;
mod overlay;
mod scene;
mod surface;

pub use entity::{Entity, EntityFlags, EntityId, Shape};
pub use overlay::Overlay;
pub use scene::{PointerEvent, Scene, SceneEvent};
pub use surface::Surface;
