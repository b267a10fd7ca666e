// SPDX-License-Identifier: MPL-2.0
//! Authoritative switch state.
//!
//! [`SwitchStore`] owns the roster and is the only place switch state is
//! mutated. Every view renders from it, and observers registered with
//! [`SwitchStore::subscribe`] hear about each applied mutation together with
//! the post-mutation snapshot.
//!
//! Operations never fail. An unknown id is a silent no-op that returns
//! `false` and notifies nobody; out-of-range intensities are clamped.

use crate::application::port::SwitchReport;
use crate::domain::{default_roster, Intensity, Intent, Switch, SwitchId};
use std::fmt;

/// Kind of mutation that produced a [`StoreChange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Toggled,
    PowerSet,
    IntensitySet,
    Replaced,
    /// State reconciled from a device report.
    Reported,
}

/// Notification delivered to store observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreChange {
    pub kind: ChangeKind,
    pub id: SwitchId,
    pub revision: u64,
}

/// Handle returned by [`SwitchStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&StoreChange, &[Switch])>;

/// Owner of the switch roster.
pub struct SwitchStore {
    /// Sorted by id, ids unique.
    switches: Vec<Switch>,
    revision: u64,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl fmt::Debug for SwitchStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwitchStore")
            .field("switches", &self.switches)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for SwitchStore {
    fn default() -> Self {
        Self::seeded(default_roster())
    }
}

impl SwitchStore {
    /// Builds a store from an initial roster.
    ///
    /// Entries are ordered by id. When an id appears more than once, the
    /// first entry wins and the rest are dropped.
    #[must_use]
    pub fn seeded(roster: Vec<Switch>) -> Self {
        let mut switches: Vec<Switch> = Vec::with_capacity(roster.len());
        for switch in roster {
            match switches.binary_search_by_key(&switch.id, |s| s.id) {
                Ok(_) => tracing::warn!(id = switch.id.value(), "duplicate switch id dropped"),
                Err(pos) => switches.insert(pos, switch),
            }
        }
        Self {
            switches,
            revision: 0,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn get(&self, id: SwitchId) -> Option<&Switch> {
        self.index_of(id).map(|i| &self.switches[i])
    }

    /// All switches in id order.
    #[must_use]
    pub fn switches(&self) -> &[Switch] {
        &self.switches
    }

    /// Owned copy of the roster.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Switch> {
        self.switches.clone()
    }

    /// Monotonic counter bumped by every applied mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Flips the power state.
    pub fn toggle(&mut self, id: SwitchId) -> bool {
        self.mutate(id, ChangeKind::Toggled, |s| s.is_on = !s.is_on)
    }

    /// Assigns the power state explicitly.
    pub fn set_power(&mut self, id: SwitchId, on: bool) -> bool {
        self.mutate(id, ChangeKind::PowerSet, |s| s.is_on = on)
    }

    /// Assigns the intensity, clamped to 0–100.
    pub fn set_intensity(&mut self, id: SwitchId, value: impl Into<Intensity>) -> bool {
        let value = value.into();
        self.mutate(id, ChangeKind::IntensitySet, |s| s.intensity = value)
    }

    /// Replaces the stored entity with the same id wholesale.
    pub fn replace(&mut self, entity: Switch) -> bool {
        let id = entity.id;
        self.mutate(id, ChangeKind::Replaced, move |s| *s = entity)
    }

    /// Reconciles a state report from the device.
    ///
    /// A report that carries neither power nor intensity is ignored.
    pub fn apply_report(&mut self, report: SwitchReport) -> bool {
        if report.is_on.is_none() && report.intensity.is_none() {
            tracing::trace!(id = report.id.value(), "empty device report ignored");
            return false;
        }
        self.mutate(report.id, ChangeKind::Reported, |s| {
            if let Some(on) = report.is_on {
                s.is_on = on;
            }
            if let Some(intensity) = report.intensity {
                s.intensity = intensity;
            }
        })
    }

    /// Applies the store-facing part of a gesture intent.
    ///
    /// `Tap` toggles power and `IntensityDragEnd` commits the dragged value.
    /// Drag start/update are preview-only and opening the detail dialog is a
    /// presentation concern, so those return false.
    pub fn apply_intent(&mut self, id: SwitchId, intent: Intent) -> bool {
        match intent {
            Intent::Tap => self.toggle(id),
            Intent::IntensityDragEnd(value) => self.set_intensity(id, value),
            Intent::IntensityDragStart
            | Intent::IntensityDragUpdate(_)
            | Intent::LongPressOpenDetail => false,
        }
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Registers an observer called after every applied mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&StoreChange, &[Switch]) + 'static,
    {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener, _)| *listener != id);
        self.listeners.len() != before
    }

    fn index_of(&self, id: SwitchId) -> Option<usize> {
        self.switches.binary_search_by_key(&id, |s| s.id).ok()
    }

    fn mutate(&mut self, id: SwitchId, kind: ChangeKind, apply: impl FnOnce(&mut Switch)) -> bool {
        let Some(index) = self.index_of(id) else {
            tracing::debug!(id = id.value(), ?kind, "switch not found, ignoring");
            return false;
        };

        apply(&mut self.switches[index]);
        self.revision += 1;

        let switch = &self.switches[index];
        tracing::debug!(
            id = id.value(),
            ?kind,
            on = switch.is_on,
            intensity = switch.intensity.value(),
            revision = self.revision,
            "switch updated"
        );

        let change = StoreChange {
            kind,
            id,
            revision: self.revision,
        };
        for (_, listener) in &mut self.listeners {
            listener(&change, &self.switches);
        }
        true
    }
}
