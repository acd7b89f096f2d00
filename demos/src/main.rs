// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless gesture demo.
//!
//! Plays the host role around `thicket_scene`: builds a small scene, feeds it
//! a scripted pointer stream through `handle_event`, prints the gesture
//! notifications that come back, and renders a final frame into a surface
//! that logs its draw calls. A real host would do exactly this with native
//! input events and a painting backend, ticking `render_frame` once per
//! display frame.

use kurbo::{Point, Rect, RoundedRect};
use thicket_scene::{Entity, PointerEvent, Scene, SceneEvent, Surface};

/// Surface that logs draw calls instead of painting.
struct ConsoleSurface;

impl Surface for ConsoleSurface {
    fn clear(&mut self) {
        println!("  clear");
    }

    fn rounded_rect(&mut self, shape: RoundedRect, selected: bool) {
        let r = shape.rect();
        let mark = if selected { "  [selected]" } else { "" };
        println!(
            "  rect at ({}, {}) size {}x{} radius {}{mark}",
            r.x0,
            r.y0,
            r.width(),
            r.height(),
            shape.radii().top_left,
        );
    }

    fn selection_box(&mut self, bounds: Rect) {
        println!(
            "  selection box ({}, {}) to ({}, {})",
            bounds.x0, bounds.y0, bounds.x1, bounds.y1
        );
    }
}

fn down(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Down {
        pos: Point::new(x, y),
        ctrl: false,
    }
}

fn ctrl_down(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Down {
        pos: Point::new(x, y),
        ctrl: true,
    }
}

fn mv(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Move {
        pos: Point::new(x, y),
    }
}

fn up(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Up {
        pos: Point::new(x, y),
    }
}

fn describe(event: &SceneEvent) -> String {
    match event {
        SceneEvent::HoverStart(id) => format!("hover start {id:?}"),
        SceneEvent::HoverEnd(id) => format!("hover end {id:?}"),
        SceneEvent::Clicked(id) => format!("clicked {id:?}"),
        SceneEvent::Moved(id, delta) => format!("moved {id:?} by ({}, {})", delta.x, delta.y),
    }
}

fn main() {
    let mut scene = Scene::new();
    scene.append(Entity::rect(0.0, 0.0, 100.0, 100.0, 20.0));
    scene.append(Entity::rect(100.0, 100.0, 100.0, 100.0, 0.0));
    scene.append(Entity::rect(200.0, 200.0, 100.0, 100.0, 0.0));

    let script: Vec<(&str, Vec<PointerEvent>)> = vec![
        (
            "hover across the first card",
            vec![mv(50.0, 50.0), mv(120.0, 50.0)],
        ),
        (
            "click the first card",
            vec![down(50.0, 50.0), up(50.0, 50.0)],
        ),
        (
            "drag it 30 to the right",
            vec![
                down(50.0, 50.0),
                mv(65.0, 50.0),
                mv(80.0, 50.0),
                up(80.0, 50.0),
            ],
        ),
        (
            "ctrl-click the second card into the selection",
            vec![ctrl_down(150.0, 150.0), up(150.0, 150.0)],
        ),
        (
            "drag the group down",
            vec![down(150.0, 150.0), mv(150.0, 170.0), up(150.0, 170.0)],
        ),
    ];

    for (label, events) in script {
        println!("-- {label}");
        for event in events {
            for notification in scene.handle_event(event) {
                println!("  {}", describe(&notification));
            }
        }
    }

    println!("-- final frame");
    scene.render_frame(&mut ConsoleSurface);
}
