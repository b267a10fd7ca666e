// SPDX-License-Identifier: MPL-2.0
//! Editing session for a single switch.
//!
//! Display attributes (name, icon, color) are buffered until [`save`]. Power
//! and intensity are written through to the store immediately so the
//! dashboard previews them live, and they stay applied even if the session
//! is discarded.
//!
//! [`save`]: EditorSession::save

use crate::application::store::SwitchStore;
use crate::domain::{ColorTheme, Icon, Intensity, Switch, SwitchId};

/// Working copy of one switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    /// Entity as it was when the session opened (or last saved).
    baseline: Switch,
    working: Switch,
}

impl EditorSession {
    /// Opens a session on `id`. Returns `None` when the switch does not exist.
    #[must_use]
    pub fn open(store: &SwitchStore, id: SwitchId) -> Option<Self> {
        let Some(switch) = store.get(id) else {
            tracing::debug!(id = id.value(), "cannot edit unknown switch");
            return None;
        };
        Some(Self {
            baseline: switch.clone(),
            working: switch.clone(),
        })
    }

    #[must_use]
    pub fn id(&self) -> SwitchId {
        self.working.id
    }

    /// The buffered working copy.
    #[must_use]
    pub fn entity(&self) -> &Switch {
        &self.working
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.working.name = name.into();
    }

    pub fn select_icon(&mut self, icon: Icon) {
        self.working.icon = icon;
    }

    pub fn select_color(&mut self, color: ColorTheme) {
        self.working.color = color;
    }

    /// Flips power on the working copy and in the store.
    pub fn toggle_power(&mut self, store: &mut SwitchStore) -> bool {
        self.working.is_on = !self.working.is_on;
        store.set_power(self.working.id, self.working.is_on)
    }

    /// Sets intensity on the working copy and in the store.
    pub fn change_intensity(&mut self, store: &mut SwitchStore, value: impl Into<Intensity>) -> bool {
        self.working.intensity = value.into();
        store.set_intensity(self.working.id, self.working.intensity)
    }

    /// Pulls power and intensity from the store after an outside change.
    pub fn sync_live(&mut self, store: &SwitchStore) {
        if let Some(current) = store.get(self.working.id) {
            self.working.is_on = current.is_on;
            self.working.intensity = current.intensity;
        }
    }

    /// True when name, icon or color differ from the baseline.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.working.appearance_differs(&self.baseline)
    }

    /// Commits the full working copy. A later save from another session
    /// overwrites this one.
    pub fn save(&mut self, store: &mut SwitchStore) -> bool {
        let applied = store.replace(self.working.clone());
        if applied {
            self.baseline = self.working.clone();
        }
        applied
    }

    /// Drops buffered edits. Written-through power and intensity remain.
    pub fn discard(&mut self) {
        self.working.name.clone_from(&self.baseline.name);
        self.working.icon = self.baseline.icon;
        self.working.color = self.baseline.color;
    }

    /// Ends the session, saving when `commit` is set.
    pub fn close(mut self, store: &mut SwitchStore, commit: bool) -> bool {
        if commit {
            self.save(store)
        } else {
            self.discard();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fog_store() -> SwitchStore {
        SwitchStore::seeded(vec![Switch::new(
            SwitchId::new(2),
            "Fog",
            Icon::Cloud,
            ColorTheme::Blue,
            Intensity::new(60),
        )])
    }

    #[test]
    fn open_unknown_id_returns_none() {
        let store = SwitchStore::default();
        assert!(EditorSession::open(&store, SwitchId::new(999)).is_none());
    }

    #[test]
    fn rename_is_buffered_until_save() {
        let mut store = fog_store();
        let id = SwitchId::new(2);
        let mut editor = EditorSession::open(&store, id).unwrap();

        editor.set_name("Fog Lights");
        editor.change_intensity(&mut store, 40);

        let live = store.get(id).cloned().unwrap();
        assert_eq!(live.intensity.value(), 40);
        assert_eq!(live.name, "Fog");
        assert!(editor.has_unsaved_changes());

        assert!(editor.save(&mut store));
        let saved = store.get(id).cloned().unwrap();
        assert_eq!(saved.intensity.value(), 40);
        assert_eq!(saved.name, "Fog Lights");
        assert!(!editor.has_unsaved_changes());
    }

    #[test]
    fn discard_keeps_write_through_changes() {
        let mut store = fog_store();
        let id = SwitchId::new(2);
        let mut editor = EditorSession::open(&store, id).unwrap();

        editor.set_name("Roof");
        editor.select_icon(Icon::Sun);
        editor.select_color(ColorTheme::Orange);
        editor.toggle_power(&mut store);
        assert!(!editor.close(&mut store, false));

        let live = store.get(id).cloned().unwrap();
        assert!(live.is_on);
        assert_eq!(live.name, "Fog");
        assert_eq!(live.icon, Icon::Cloud);
        assert_eq!(live.color, ColorTheme::Blue);
    }

    #[test]
    fn discard_restores_buffer() {
        let store = fog_store();
        let mut editor = EditorSession::open(&store, SwitchId::new(2)).unwrap();
        editor.set_name("Other");
        editor.discard();
        assert_eq!(editor.entity().name, "Fog");
        assert!(!editor.has_unsaved_changes());
    }

    #[test]
    fn later_save_wins() {
        let mut store = fog_store();
        let id = SwitchId::new(2);
        let mut first = EditorSession::open(&store, id).unwrap();
        let mut second = EditorSession::open(&store, id).unwrap();

        first.set_name("First");
        second.set_name("Second");
        first.save(&mut store);
        second.close(&mut store, true);

        assert_eq!(store.get(id).map(|s| s.name.as_str()), Some("Second"));
    }

    #[test]
    fn editor_power_does_not_flip_other_editors_value() {
        let mut store = fog_store();
        let id = SwitchId::new(2);
        let mut dialog = EditorSession::open(&store, id).unwrap();
        let mut panel = EditorSession::open(&store, id).unwrap();

        dialog.toggle_power(&mut store);
        panel.toggle_power(&mut store);
        assert_eq!(store.get(id).map(|s| s.is_on), Some(true));

        dialog.sync_live(&store);
        assert!(dialog.entity().is_on);
    }

    #[test]
    fn intensity_is_clamped_in_session() {
        let mut store = fog_store();
        let mut editor = EditorSession::open(&store, SwitchId::new(2)).unwrap();
        editor.change_intensity(&mut store, 500);
        assert_eq!(editor.entity().intensity, Intensity::MAX);
    }
}
