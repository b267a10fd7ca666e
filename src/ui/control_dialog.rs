// SPDX-License-Identifier: MPL-2.0
//! Detail dialog for one switch, opened by a long-press.
//!
//! Power and intensity act on the store immediately. The gear button folds
//! out an inline sheet where name, icon and color are edited; those edits
//! only reach the store through "Save Changes".

use crate::application::{EditorSession, SwitchStore};
use crate::domain::SwitchId;
use crate::i18n::fluent::I18n;
use crate::ui::catalog;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::switch_form;
use iced::widget::{button, Column, Container, Row, Scrollable, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    Form(switch_form::Message),
    ToggleSheet,
    Save,
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The store changed through a write-through control.
    StoreChanged,
    SaveRequested,
    CloseRequested,
}

#[derive(Debug, Clone)]
pub struct State {
    editor: EditorSession,
    sheet_open: bool,
}

impl State {
    /// Opens the dialog on `id`, or `None` if the switch does not exist.
    #[must_use]
    pub fn open(store: &SwitchStore, id: SwitchId) -> Option<Self> {
        EditorSession::open(store, id).map(|editor| Self {
            editor,
            sheet_open: false,
        })
    }

    #[must_use]
    pub fn id(&self) -> SwitchId {
        self.editor.id()
    }

    #[must_use]
    pub fn editor(&self) -> &EditorSession {
        &self.editor
    }

    #[must_use]
    pub fn is_sheet_open(&self) -> bool {
        self.sheet_open
    }

    /// Picks up power and intensity changed elsewhere while the dialog is open.
    pub fn sync_live(&mut self, store: &SwitchStore) {
        self.editor.sync_live(store);
    }

    pub fn update(&mut self, message: Message, store: &mut SwitchStore) -> Event {
        match message {
            Message::Form(form) => {
                if switch_form::apply(&mut self.editor, store, form) {
                    Event::StoreChanged
                } else {
                    Event::None
                }
            }
            Message::ToggleSheet => {
                self.sheet_open = !self.sheet_open;
                Event::None
            }
            Message::Save => Event::SaveRequested,
            Message::Close => Event::CloseRequested,
        }
    }

    /// Ends the dialog. Buffered edits are saved when `commit` is set and
    /// dropped otherwise. Returns true when the store changed.
    pub fn close(self, store: &mut SwitchStore, commit: bool) -> bool {
        self.editor.close(store, commit)
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let switch = self.editor.entity();

        let title = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Text::new(catalog::glyph(switch.icon))
                    .size(sizing::ICON_LG)
                    .color(catalog::accent(switch.color)),
            )
            .push(
                Container::new(Text::new(switch.name.as_str()).size(typography::TITLE_MD))
                    .width(Length::Fill),
            )
            .push(
                button(Text::new("\u{2699}").size(sizing::ICON_SM))
                    .on_press(Message::ToggleSheet)
                    .padding(spacing::XS)
                    .style(if self.sheet_open {
                        styles::button::selected
                    } else {
                        styles::button::ghost
                    }),
            )
            .push(
                button(Text::new("\u{2715}").size(sizing::ICON_SM))
                    .on_press(Message::Close)
                    .padding(spacing::XS)
                    .style(styles::button::ghost),
            );

        let mut body = Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(switch_form::live_controls(i18n, &self.editor).map(Message::Form));

        if self.sheet_open {
            let sheet = Column::new()
                .spacing(spacing::MD)
                .push(Text::new(i18n.tr("dialog-settings-title")).size(typography::TITLE_SM))
                .push(switch_form::name_input(i18n, &self.editor).map(Message::Form))
                .push(switch_form::appearance(i18n, &self.editor).map(Message::Form))
                .push(
                    button(
                        Container::new(Text::new(i18n.tr("dialog-save-changes")).size(typography::BODY))
                            .width(Length::Fill)
                            .align_x(alignment::Horizontal::Center),
                    )
                    .on_press(Message::Save)
                    .padding(spacing::SM)
                    .width(Length::Fill)
                    .style(styles::button::primary),
                );
            body = body.push(
                Container::new(sheet)
                    .padding(spacing::MD)
                    .width(Length::Fill)
                    .style(styles::container::section),
            );
        }

        Container::new(Scrollable::new(body))
            .width(Length::Fixed(sizing::DIALOG_WIDTH))
            .padding(spacing::LG)
            .style(styles::container::panel)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColorTheme, Intensity};

    fn open(store: &SwitchStore) -> State {
        State::open(store, SwitchId::new(2)).expect("seeded switch")
    }

    #[test]
    fn open_unknown_switch_returns_none() {
        assert!(State::open(&SwitchStore::default(), SwitchId::new(999)).is_none());
    }

    #[test]
    fn sheet_toggles() {
        let mut store = SwitchStore::default();
        let mut state = open(&store);
        assert!(!state.is_sheet_open());
        assert_eq!(state.update(Message::ToggleSheet, &mut store), Event::None);
        assert!(state.is_sheet_open());
    }

    #[test]
    fn slider_writes_through_and_reports_change() {
        let mut store = SwitchStore::default();
        let mut state = open(&store);
        let event = state.update(
            Message::Form(switch_form::Message::IntensityChanged(Intensity::new(40))),
            &mut store,
        );
        assert_eq!(event, Event::StoreChanged);
        assert_eq!(store.get(SwitchId::new(2)).map(|s| s.intensity.value()), Some(40));
    }

    #[test]
    fn save_and_close_are_requests() {
        let mut store = SwitchStore::default();
        let mut state = open(&store);
        assert_eq!(state.update(Message::Save, &mut store), Event::SaveRequested);
        assert_eq!(state.update(Message::Close, &mut store), Event::CloseRequested);
    }

    #[test]
    fn closing_without_commit_drops_buffered_edits() {
        let mut store = SwitchStore::default();
        let mut state = open(&store);
        state.update(
            Message::Form(switch_form::Message::ColorSelected(ColorTheme::Green)),
            &mut store,
        );
        assert!(!state.close(&mut store, false));
        assert_eq!(store.get(SwitchId::new(2)).map(|s| s.color), Some(ColorTheme::Blue));
    }

    #[test]
    fn closing_with_commit_saves() {
        let mut store = SwitchStore::default();
        let mut state = open(&store);
        state.update(
            Message::Form(switch_form::Message::NameChanged("Fog Lamps".into())),
            &mut store,
        );
        assert!(state.close(&mut store, true));
        assert_eq!(
            store.get(SwitchId::new(2)).map(|s| s.name.clone()),
            Some("Fog Lamps".to_string())
        );
    }
}
