// SPDX-License-Identifier: MPL-2.0
//! Settings side sheet with two tabs.
//!
//! "Button Settings" edits one switch at a time through an
//! [`EditorSession`]; "Device Settings" holds the dark-mode toggle, the
//! device name and read-only link information.

use crate::application::port::LinkStatus;
use crate::application::{EditorSession, SwitchStore};
use crate::domain::{Switch, SwitchId};
use crate::i18n::fluent::I18n;
use crate::ui::catalog;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::switch_form;
use iced::widget::{button, text_input, toggler, Column, Container, Row, Scrollable, Space, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Button,
    Device,
}

/// Contextual data needed to render the settings panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub switches: &'a [Switch],
    pub is_dark: bool,
    pub status: LinkStatus,
    pub firmware: &'a str,
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    SwitchSelected(SwitchId),
    Form(switch_form::Message),
    SaveSwitch,
    ToggleDarkMode(bool),
    DeviceNameChanged(String),
    SaveDevice,
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    StoreChanged,
    SwitchSaved(SwitchId),
    /// The toggler's requested state, dark when true.
    DarkModeRequested(bool),
    /// The trimmed, non-empty device name to persist.
    DeviceNameSaved(String),
    DeviceNameRejected,
    Closed,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    tab: Tab,
    editor: Option<EditorSession>,
    device_name: String,
}

impl State {
    /// Opens the panel with the current device name as the draft.
    #[must_use]
    pub fn new(device_name: impl Into<String>) -> Self {
        Self {
            tab: Tab::default(),
            editor: None,
            device_name: device_name.into(),
        }
    }

    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    #[must_use]
    pub fn editor(&self) -> Option<&EditorSession> {
        self.editor.as_ref()
    }

    #[must_use]
    pub fn device_name_draft(&self) -> &str {
        &self.device_name
    }

    /// Picks up power and intensity changed elsewhere while editing.
    pub fn sync_live(&mut self, store: &SwitchStore) {
        if let Some(editor) = self.editor.as_mut() {
            editor.sync_live(store);
        }
    }

    pub fn update(&mut self, message: Message, store: &mut SwitchStore) -> Event {
        match message {
            Message::TabSelected(tab) => {
                self.tab = tab;
                Event::None
            }
            Message::SwitchSelected(id) => {
                // Switching targets drops unsaved edits of the previous one
                if let Some(previous) = self.editor.take() {
                    previous.close(store, false);
                }
                self.editor = EditorSession::open(store, id);
                Event::None
            }
            Message::Form(form) => {
                let Some(editor) = self.editor.as_mut() else {
                    return Event::None;
                };
                if switch_form::apply(editor, store, form) {
                    Event::StoreChanged
                } else {
                    Event::None
                }
            }
            Message::SaveSwitch => {
                let Some(editor) = self.editor.as_mut() else {
                    return Event::None;
                };
                if editor.save(store) {
                    Event::SwitchSaved(editor.id())
                } else {
                    Event::None
                }
            }
            Message::ToggleDarkMode(dark) => Event::DarkModeRequested(dark),
            Message::DeviceNameChanged(name) => {
                self.device_name = name;
                Event::None
            }
            Message::SaveDevice => {
                let name = self.device_name.trim();
                if name.is_empty() {
                    Event::DeviceNameRejected
                } else {
                    Event::DeviceNameSaved(name.to_string())
                }
            }
            Message::Close => {
                if let Some(editor) = self.editor.take() {
                    editor.close(store, false);
                }
                Event::Closed
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let header = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_MD))
                    .width(Length::Fill),
            )
            .push(
                button(Text::new("\u{2715}").size(sizing::ICON_SM))
                    .on_press(Message::Close)
                    .padding(spacing::XS)
                    .style(styles::button::ghost),
            );

        let tabs = Row::new()
            .spacing(spacing::XS)
            .push(tab_button(ctx.i18n.tr("settings-tab-button"), Tab::Button, self.tab))
            .push(tab_button(ctx.i18n.tr("settings-tab-device"), Tab::Device, self.tab));

        let body = match self.tab {
            Tab::Button => self.button_tab(&ctx),
            Tab::Device => self.device_tab(&ctx),
        };

        let content = Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(tabs)
            .push(Scrollable::new(body).height(Length::Fill));

        Container::new(content)
            .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
            .height(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::panel)
            .into()
    }

    fn button_tab<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let selected = self.editor.as_ref().map(EditorSession::id);

        let mut picker = Column::new()
            .spacing(spacing::XS)
            .push(Text::new(ctx.i18n.tr("settings-select-switch")).size(typography::BODY_SM));
        for switch in ctx.switches {
            let label = Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(Text::new(catalog::glyph(switch.icon)).size(sizing::ICON_SM))
                .push(Text::new(switch.name.as_str()).size(typography::BODY));
            picker = picker.push(
                button(label)
                    .on_press(Message::SwitchSelected(switch.id))
                    .padding(spacing::XS)
                    .width(Length::Fill)
                    .style(if selected == Some(switch.id) {
                        styles::button::selected
                    } else {
                        styles::button::unselected
                    }),
            );
        }

        let mut column = Column::new().spacing(spacing::MD).push(picker);

        if let Some(editor) = &self.editor {
            let form = Column::new()
                .spacing(spacing::MD)
                .push(switch_form::name_input(ctx.i18n, editor).map(Message::Form))
                .push(switch_form::live_controls(ctx.i18n, editor).map(Message::Form))
                .push(switch_form::appearance(ctx.i18n, editor).map(Message::Form))
                .push(wide_button(ctx.i18n.tr("settings-save-button"), Message::SaveSwitch));
            column = column.push(
                Container::new(form)
                    .padding(spacing::MD)
                    .width(Length::Fill)
                    .style(styles::container::section),
            );
        }

        column.into()
    }

    fn device_tab<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let dark_mode = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(ctx.i18n.tr("settings-dark-mode")).size(typography::BODY))
            .push(Space::new().width(Length::Fill))
            .push(toggler(ctx.is_dark).on_toggle(Message::ToggleDarkMode).size(20.0));

        let name = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(ctx.i18n.tr("settings-device-name")).size(typography::BODY_SM))
            .push(
                text_input(&ctx.i18n.tr("settings-device-name-placeholder"), &self.device_name)
                    .on_input(Message::DeviceNameChanged)
                    .on_submit(Message::SaveDevice)
                    .padding(spacing::XS)
                    .size(typography::BODY),
            );

        let info = Column::new()
            .spacing(spacing::XS)
            .push(info_row(
                ctx.i18n.tr("settings-connection-status"),
                ctx.i18n.tr(ctx.status.i18n_key()),
            ))
            .push(info_row(
                ctx.i18n.tr("settings-firmware-version"),
                ctx.firmware.to_string(),
            ));

        Column::new()
            .spacing(spacing::MD)
            .push(dark_mode)
            .push(name)
            .push(
                Container::new(info)
                    .padding(spacing::SM)
                    .width(Length::Fill)
                    .style(styles::container::section),
            )
            .push(wide_button(ctx.i18n.tr("settings-save-device"), Message::SaveDevice))
            .into()
    }
}

fn tab_button<'a>(label: String, tab: Tab, current: Tab) -> Element<'a, Message> {
    button(
        Container::new(Text::new(label).size(typography::BODY))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(Message::TabSelected(tab))
    .padding(spacing::XS)
    .width(Length::FillPortion(1))
    .style(if tab == current {
        styles::button::selected
    } else {
        styles::button::unselected
    })
    .into()
}

fn wide_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(
        Container::new(Text::new(label).size(typography::BODY))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(message)
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::button::primary)
    .into()
}

fn info_row<'a>(label: String, value: String) -> Element<'a, Message> {
    Row::new()
        .push(Container::new(Text::new(label).size(typography::BODY_SM)).width(Length::Fill))
        .push(Text::new(value).size(typography::BODY_SM))
        .into()
}
