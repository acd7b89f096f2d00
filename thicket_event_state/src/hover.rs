// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover cycle helper: diff consecutive pointer-move hit sets into
//! enter/exit transitions.
//!
//! ## Usage
//!
//! One cycle per pointer-move:
//!
//! 1) [`HoverCycle::start_cycle`] rotates the previous move's hits out of the
//!    way and opens a fresh current set.
//! 2) [`HoverCycle::append`] records every key hit this move. Callers apply
//!    their own eligibility filter (for example a hoverable flag) before
//!    appending, so ineligible keys never enter the sets.
//! 3) [`HoverCycle::entered`] / [`HoverCycle::exited`] read the differences
//!    against the previous cycle.
//! 4) [`HoverCycle::finish_cycle`] closes the cycle.
//!
//! The caller is responsible for delivering hover-start notifications to
//! every entered key and hover-end notifications to every exited key before
//! starting the next cycle.
//!
//! Calling these methods out of order is a programmer error and panics
//! immediately; tolerating it silently would mask dispatch-order bugs in the
//! caller.
//!
//! ## Minimal example
//!
//! ```
//! use thicket_event_state::hover::HoverCycle;
//!
//! let mut hover = HoverCycle::new();
//!
//! hover.start_cycle();
//! hover.append(10);
//! hover.finish_cycle();
//!
//! hover.start_cycle();
//! hover.append(11);
//! assert_eq!(hover.entered(), vec![11]);
//! assert_eq!(hover.exited(), vec![10]);
//! hover.finish_cycle();
//! ```

use alloc::vec::Vec;

/// Phase of a hover cycle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CyclePhase {
    /// No cycle is in progress; only [`HoverCycle::start_cycle`] is legal.
    Idle,
    /// A cycle is in progress; append and diff queries are legal.
    InProgress,
}

/// Tracks the hit sets of two consecutive pointer-move cycles.
///
/// Keys are compared by equality; for identifier types this is identity
/// comparison. Each key is expected to be appended at most once per cycle
/// (hit discovery visits each element once), so no de-duplication is applied.
#[derive(Clone, Debug)]
pub struct HoverCycle<K> {
    prev: Vec<K>,
    current: Vec<K>,
    phase: CyclePhase,
}

impl<K> HoverCycle<K> {
    /// Creates an idle cycle with empty hit sets.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prev: Vec::new(),
            current: Vec::new(),
            phase: CyclePhase::Idle,
        }
    }

    /// Returns the current cycle phase.
    #[must_use]
    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    /// Returns `true` while a cycle is in progress.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.phase == CyclePhase::InProgress
    }

    /// Begins a new cycle: the current set becomes the previous set and a
    /// fresh current set is opened.
    ///
    /// # Panics
    ///
    /// Panics if a cycle is already in progress (`finish_cycle` was not
    /// called).
    pub fn start_cycle(&mut self) {
        assert!(
            self.phase == CyclePhase::Idle,
            "hover cycle already in progress; finish_cycle was not called"
        );
        self.phase = CyclePhase::InProgress;
        core::mem::swap(&mut self.prev, &mut self.current);
        self.current.clear();
    }

    /// Records a key hit during the in-progress cycle.
    ///
    /// # Panics
    ///
    /// Panics if no cycle is in progress (`start_cycle` was not called).
    pub fn append(&mut self, key: K) {
        assert!(
            self.phase == CyclePhase::InProgress,
            "no hover cycle in progress; start_cycle was not called"
        );
        self.current.push(key);
    }

    /// Ends the in-progress cycle.
    ///
    /// # Panics
    ///
    /// Panics if no cycle is in progress.
    pub fn finish_cycle(&mut self) {
        assert!(
            self.phase == CyclePhase::InProgress,
            "no hover cycle in progress; start_cycle was not called"
        );
        self.phase = CyclePhase::Idle;
    }

    /// The keys hit during the in-progress cycle so far.
    #[must_use]
    pub fn current_hits(&self) -> &[K] {
        &self.current
    }

    /// The keys hit during the previous cycle.
    #[must_use]
    pub fn previous_hits(&self) -> &[K] {
        &self.prev
    }

    /// Removes `key` from both hit sets.
    ///
    /// Maintenance hook for callers that delete elements: a purged key never
    /// appears in a later diff. Legal in any phase.
    pub fn purge(&mut self, key: &K)
    where
        K: PartialEq,
    {
        self.prev.retain(|k| k != key);
        self.current.retain(|k| k != key);
    }

    fn assert_in_progress(&self) {
        assert!(
            self.phase == CyclePhase::InProgress,
            "no hover cycle in progress; start_cycle was not called"
        );
    }
}

impl<K> HoverCycle<K>
where
    K: PartialEq + Clone,
{
    /// Keys hit this cycle but not the previous one (hover starts).
    ///
    /// Together with [`HoverCycle::exited`] this forms the symmetric
    /// difference of the two cycles' hit sets; the two results are always
    /// disjoint.
    ///
    /// # Panics
    ///
    /// Panics if no cycle is in progress.
    #[must_use]
    pub fn entered(&self) -> Vec<K> {
        self.assert_in_progress();
        self.current
            .iter()
            .filter(|key| !self.prev.contains(key))
            .cloned()
            .collect()
    }

    /// Keys hit the previous cycle but not this one (hover ends).
    ///
    /// # Panics
    ///
    /// Panics if no cycle is in progress.
    #[must_use]
    pub fn exited(&self) -> Vec<K> {
        self.assert_in_progress();
        self.prev
            .iter()
            .filter(|key| !self.current.contains(key))
            .cloned()
            .collect()
    }
}

#[cfg(feature = "hashbrown")]
impl<K> HoverCycle<K>
where
    K: core::hash::Hash + Eq + Clone,
{
    /// Hash-accelerated variant of [`HoverCycle::entered`].
    ///
    /// The linear scans in `entered`/`exited` are quadratic in the hit-set
    /// size, which is fine for the handful of elements under a pointer.
    /// Callers diffing large sets (marquee selection previews, dense
    /// overlapping scenes) can use the hashed variants instead.
    ///
    /// # Panics
    ///
    /// Panics if no cycle is in progress.
    #[must_use]
    pub fn entered_hashed(&self) -> Vec<K> {
        self.assert_in_progress();
        let prev: hashbrown::HashSet<&K> = self.prev.iter().collect();
        self.current
            .iter()
            .filter(|key| !prev.contains(key))
            .cloned()
            .collect()
    }

    /// Hash-accelerated variant of [`HoverCycle::exited`].
    ///
    /// # Panics
    ///
    /// Panics if no cycle is in progress.
    #[must_use]
    pub fn exited_hashed(&self) -> Vec<K> {
        self.assert_in_progress();
        let current: hashbrown::HashSet<&K> = self.current.iter().collect();
        self.prev
            .iter()
            .filter(|key| !current.contains(key))
            .cloned()
            .collect()
    }
}

impl<K> Default for HoverCycle<K> {
    fn default() -> Self {
        Self::new()
    }
}
