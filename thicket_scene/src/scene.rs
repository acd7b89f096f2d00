// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene: entity storage, pointer-event routing, and frame drawing.

use alloc::vec::Vec;
use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;
use thicket_event_state::click::{ClickResult, ClickState};
use thicket_event_state::drag::DragState;
use thicket_event_state::hover::HoverCycle;

use crate::entity::{Entity, EntityFlags, EntityId};
use crate::overlay::Overlay;
use crate::surface::Surface;

/// A raw pointer event in canvas-local coordinates.
///
/// Converting from screen space (via the canvas's bounding rectangle) is the
/// host's job; the scene never registers listeners itself. The host is also
/// responsible for delivering `Up` reliably (listening globally rather than
/// only over the canvas), since a grab is only ever terminated by its
/// release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed. `ctrl` is the modifier used to grow the selection.
    Down {
        /// Canvas-local pointer position.
        pos: Point,
        /// Whether the ctrl modifier was held.
        ctrl: bool,
    },
    /// Pointer moved.
    Move {
        /// Canvas-local pointer position.
        pos: Point,
    },
    /// Pointer released.
    Up {
        /// Canvas-local pointer position.
        pos: Point,
    },
}

/// Entity lifecycle notification produced by event dispatch.
///
/// Notifications are returned from [`Scene::handle_event`] in dispatch order;
/// the embedding layer forwards them to whatever reacts to gestures.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneEvent {
    /// The pointer entered the entity this move.
    HoverStart(EntityId),
    /// The pointer left the entity this move.
    HoverEnd(EntityId),
    /// A press and release landed on the entity with no intervening motion.
    Clicked(EntityId),
    /// The entity was translated by the given delta.
    Moved(EntityId, Vec2),
}

#[derive(Clone, Debug)]
struct Slot {
    entity: Option<Entity>,
    generation: u32,
}

/// The root container and event router.
///
/// A scene owns its entities (one scene per canvas surface; entities belong
/// to exactly one scene), performs hit testing over them, and routes every
/// pointer event through the gesture managers in a fixed order: click, hover,
/// drag, then the scene's own overlay handling. The relative order is part of
/// the observable contract: click recognition must see the move before the
/// gesture state it would demote is consumed elsewhere.
///
/// Hit discovery is deliberately asymmetric: hover descends into the children
/// of hit parents and collects every hit, while click/drag/overlay use the
/// first top-level hit in insertion order.
///
/// All state transitions happen synchronously inside [`Scene::handle_event`]
/// and [`Scene::render_frame`]; the scene never blocks and never schedules
/// itself.
///
/// ## Example
///
/// ```
/// use kurbo::Point;
/// use thicket_scene::{Entity, PointerEvent, Scene, SceneEvent};
///
/// let mut scene = Scene::new();
/// let card = scene.append(Entity::rect(0.0, 0.0, 100.0, 100.0, 20.0));
///
/// let events = scene.handle_event(PointerEvent::Down {
///     pos: Point::new(50.0, 50.0),
///     ctrl: false,
/// });
/// assert!(events.is_empty());
///
/// let events = scene.handle_event(PointerEvent::Up {
///     pos: Point::new(50.0, 50.0),
/// });
/// assert_eq!(events, vec![SceneEvent::Clicked(card)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Scene {
    slots: Vec<Slot>,
    free: Vec<u32>,
    roots: Vec<EntityId>,
    hover: HoverCycle<EntityId>,
    click: ClickState<EntityId>,
    drag: DragState<EntityId>,
    overlay: Option<Overlay>,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a top-level entity.
    ///
    /// Insertion order is hit-test priority: the first appended entity wins
    /// ties for click/drag/overlay targeting, and draws first (bottom-most).
    pub fn append(&mut self, entity: Entity) -> EntityId {
        let id = self.alloc(entity);
        self.roots.push(id);
        id
    }

    /// Appends a child under `parent`.
    ///
    /// Children are hit-tested (for hover) and drawn only when the parent
    /// itself is hit or drawn. Returns `None` when `parent` is stale.
    pub fn append_child(&mut self, parent: EntityId, entity: Entity) -> Option<EntityId> {
        if !self.is_alive(parent) {
            return None;
        }
        let id = self.alloc(entity);
        self.entity_mut(parent)?.children.push(id);
        Some(id)
    }

    /// Removes `id` and its entire subtree, freeing their slots.
    ///
    /// Any gesture state referring to a removed entity (an active press, a
    /// drag grab, hover membership, overlay membership) is canceled so no
    /// grab can go stale. Returns `false` for stale ids.
    pub fn remove(&mut self, id: EntityId) -> bool {
        if !self.is_alive(id) {
            return false;
        }

        // Detach from the roots list or from the parent's children.
        if let Some(at) = self.roots.iter().position(|&root| root == id) {
            self.roots.remove(at);
        } else {
            for slot in &mut self.slots {
                if let Some(entity) = &mut slot.entity {
                    if let Some(at) = entity.children.iter().position(|&child| child == id) {
                        entity.children.remove(at);
                        break;
                    }
                }
            }
        }

        let mut pending: Vec<EntityId> = Vec::from([id]);
        while let Some(current) = pending.pop() {
            if let Some(entity) = self.free_slot(current) {
                pending.extend_from_slice(&entity.children);
                self.purge_gesture_state(current);
            }
        }

        if self
            .overlay
            .as_ref()
            .is_some_and(|overlay| overlay.members().is_empty())
        {
            self.overlay = None;
        }
        true
    }

    /// Returns a reference to a live entity.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.entity.as_ref()
    }

    /// Returns a mutable reference to a live entity.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entity_mut(id)
    }

    /// Returns `true` if `id` refers to a live entity in this scene.
    #[must_use]
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live entities (including nested children).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.entity.is_some()).count()
    }

    /// Returns `true` if the scene holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Top-level entities in insertion order.
    #[must_use]
    pub fn roots(&self) -> &[EntityId] {
        &self.roots
    }

    /// The active multi-selection overlay, if any.
    #[must_use]
    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// Bounding box of the active overlay: the union of its members' bounds,
    /// recomputed on every call.
    #[must_use]
    pub fn overlay_bounds(&self) -> Option<Rect> {
        let overlay = self.overlay.as_ref()?;
        let mut bounds: Option<Rect> = None;
        for &id in overlay.members() {
            if let Some(entity) = self.get(id) {
                let rect = entity.shape().bounds();
                bounds = Some(match bounds {
                    Some(acc) => acc.union(rect),
                    None => rect,
                });
            }
        }
        bounds
    }

    /// Routes one pointer event through the managers and returns the entity
    /// notifications it produced, in dispatch order.
    pub fn handle_event(&mut self, event: PointerEvent) -> Vec<SceneEvent> {
        match event {
            PointerEvent::Down { pos, ctrl } => self.on_down(pos, ctrl),
            PointerEvent::Move { pos } => self.on_move(pos),
            PointerEvent::Up { pos } => self.on_up(pos),
        }
    }

    /// Draws one frame: clear, entities in insertion order (children
    /// depth-first), then the overlay's bounding box on top.
    ///
    /// The host owns the frame loop and calls this once per display frame;
    /// in-flight gesture state never suppresses a frame.
    pub fn render_frame(&self, surface: &mut impl Surface) {
        surface.clear();
        for &root in &self.roots {
            self.draw_subtree(root, surface);
        }
        if let Some(bounds) = self.overlay_bounds() {
            surface.selection_box(bounds);
        }
    }

    fn on_down(&mut self, pos: Point, ctrl: bool) -> Vec<SceneEvent> {
        let hit = self.first_hit(pos);

        if let Some(id) = hit {
            self.click.on_down(id);
            // Hover has no down-phase work.
            if self
                .get(id)
                .is_some_and(|entity| entity.flags.contains(EntityFlags::DRAGGABLE))
            {
                self.drag.grab(id, pos);
            }
        }

        self.overlay_down(hit, pos, ctrl);
        self.sync_selected();
        Vec::new()
    }

    fn on_move(&mut self, pos: Point) -> Vec<SceneEvent> {
        let mut events = Vec::new();

        // Click sees the move first: any motion between press and release
        // demotes the gesture to a drag.
        self.click.on_move();

        // Hover: one cycle per move, recursive hit discovery, every hit
        // collected (no first-match cut).
        self.hover.start_cycle();
        let mut hits: SmallVec<[EntityId; 8]> = SmallVec::new();
        for i in 0..self.roots.len() {
            self.collect_hover_hits(self.roots[i], pos, &mut hits);
        }
        for &id in &hits {
            self.hover.append(id);
        }
        for id in self.hover.entered() {
            events.push(SceneEvent::HoverStart(id));
        }
        for id in self.hover.exited() {
            events.push(SceneEvent::HoverEnd(id));
        }
        self.hover.finish_cycle();

        // Drag and group motion. The pressed entity is always a member of
        // the grabbed overlay, and the two trackers advance over the same
        // positions, so their deltas agree; each entity translates at most
        // once per move.
        let mut moved: SmallVec<[(EntityId, Vec2); 8]> = SmallVec::new();
        if let Some((id, delta)) = self.drag.update(pos) {
            moved.push((id, delta));
        }
        if let Some(overlay) = &mut self.overlay {
            if let Some(delta) = overlay.move_delta(pos) {
                for &id in overlay.members() {
                    if !moved.iter().any(|&(seen, _)| seen == id) {
                        moved.push((id, delta));
                    }
                }
            }
        }
        for &(id, delta) in &moved {
            if let Some(entity) = self.entity_mut(id) {
                entity.translate(delta);
                events.push(SceneEvent::Moved(id, delta));
            }
        }

        events
    }

    fn on_up(&mut self, pos: Point) -> Vec<SceneEvent> {
        let mut events = Vec::new();
        let hit = self.first_hit(pos);

        if let ClickResult::Click(id) = self.click.on_up(hit.as_ref()) {
            events.push(SceneEvent::Clicked(id));
        }
        self.drag.release();
        if let Some(overlay) = &mut self.overlay {
            overlay.release();
        }

        events
    }

    /// Pointer-down rules for the overlay.
    fn overlay_down(&mut self, hit: Option<EntityId>, pos: Point, ctrl: bool) {
        let Some(id) = hit else {
            // A down over empty space discards the selection.
            self.overlay = None;
            return;
        };

        match &mut self.overlay {
            Some(overlay) if overlay.contains(id) => {
                overlay.grab(pos);
            }
            Some(overlay) if ctrl => {
                overlay.append(id);
                overlay.grab(pos);
            }
            _ => {
                // Replace (or create) with a fresh single-entity overlay.
                let mut overlay = Overlay::new(id);
                overlay.grab(pos);
                self.overlay = Some(overlay);
            }
        }
    }

    /// Mirrors overlay membership into each entity's `selected` flag.
    fn sync_selected(&mut self) {
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if let Some(entity) = &mut slot.entity {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "slot count is bounded by u32 at allocation time"
                )]
                let id = EntityId::new(idx as u32, slot.generation);
                entity.selected = self
                    .overlay
                    .as_ref()
                    .is_some_and(|overlay| overlay.contains(id));
            }
        }
    }

    /// First top-level hit in insertion order, or `None`.
    fn first_hit(&self, pos: Point) -> Option<EntityId> {
        self.roots
            .iter()
            .copied()
            .find(|&id| self.get(id).is_some_and(|entity| entity.may_hit(pos)))
    }

    /// Collects every hover-eligible hit under `id`, descending into children
    /// only when the parent itself is hit.
    fn collect_hover_hits(&self, id: EntityId, pos: Point, hits: &mut SmallVec<[EntityId; 8]>) {
        let Some(entity) = self.get(id) else {
            return;
        };
        if !entity.may_hit(pos) {
            return;
        }
        if entity.flags.contains(EntityFlags::HOVERABLE) {
            hits.push(id);
        }
        for i in 0..entity.children.len() {
            self.collect_hover_hits(entity.children[i], pos, hits);
        }
    }

    fn draw_subtree(&self, id: EntityId, surface: &mut impl Surface) {
        let Some(entity) = self.get(id) else {
            return;
        };
        if !entity.flags.contains(EntityFlags::VISIBLE) {
            return;
        }
        entity.draw(surface);
        for &child in &entity.children {
            self.draw_subtree(child, surface);
        }
    }

    fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.entity.as_mut()
    }

    fn alloc(&mut self, entity: Entity) -> EntityId {
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation += 1;
            slot.entity = Some(entity);
            EntityId::new(idx, slot.generation)
        } else {
            self.slots.push(Slot {
                entity: Some(entity),
                generation: 1,
            });
            #[allow(
                clippy::cast_possible_truncation,
                reason = "scenes hold far fewer than u32::MAX entities"
            )]
            let idx = (self.slots.len() - 1) as u32;
            EntityId::new(idx, 1)
        }
    }

    fn free_slot(&mut self, id: EntityId) -> Option<Entity> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        let entity = slot.entity.take()?;
        self.free.push(id.0);
        Some(entity)
    }

    fn purge_gesture_state(&mut self, id: EntityId) {
        if self.click.pressed() == Some(&id) {
            self.click.cancel();
        }
        if self.drag.grabbed() == Some(&id) {
            self.drag.release();
        }
        self.hover.purge(&id);
        if let Some(overlay) = &mut self.overlay {
            overlay.remove_member(&id);
        }
    }
}
