// SPDX-License-Identifier: MPL-2.0
//! Dashboard: device header, grid of switch controls and footer.
//!
//! Each control gets its own [`GestureRecognizer`]. The dashboard does not
//! schedule timers itself; it asks the application to arm one through
//! [`Event::ArmHoldTimer`] and keeps the returned abort handle so the timer
//! can be dropped on every way out of a press.

use crate::application::port::LinkStatus;
use crate::application::SwitchStore;
use crate::domain::{GestureConfig, GesturePhase, GestureRecognizer, HoldTicket, Intensity, Intent, Switch, SwitchId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::switch_button::{self, PointerEvent};
use iced::widget::{button, text, Column, Container, Row, Scrollable, Text};
use iced::{alignment, Element, Length};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Number of switch controls per grid row.
pub const GRID_COLUMNS: usize = 3;

/// Contextual data needed to render the dashboard.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub switches: &'a [Switch],
    pub device_name: &'a str,
    pub status: LinkStatus,
    pub is_dark: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Pointer { id: SwitchId, event: PointerEvent },
    ToggleTheme,
    OpenSettings,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Schedule a hold timer and report back with `hold_elapsed`.
    ArmHoldTimer {
        id: SwitchId,
        ticket: HoldTicket,
        delay: Duration,
    },
    Intent {
        id: SwitchId,
        intent: Intent,
    },
    ToggleTheme,
    OpenSettings,
}

#[derive(Default)]
struct Tracker {
    recognizer: GestureRecognizer,
    timer: Option<iced::task::Handle>,
}

impl Tracker {
    fn disarm(&mut self) {
        if let Some(handle) = self.timer.take() {
            handle.abort();
        }
    }
}

/// Per-control gesture tracking.
#[derive(Default)]
pub struct State {
    config: GestureConfig,
    trackers: BTreeMap<SwitchId, Tracker>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("config", &self.config)
            .field("trackers", &self.trackers.len())
            .field("armed_timers", &self.armed_timers())
            .finish()
    }
}

impl State {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            trackers: BTreeMap::new(),
        }
    }

    /// Replaces gesture thresholds for every control.
    pub fn set_gesture_config(&mut self, config: GestureConfig) {
        self.config = config;
        for tracker in self.trackers.values_mut() {
            tracker.recognizer.set_config(config);
        }
    }

    #[must_use]
    pub fn gesture_config(&self) -> GestureConfig {
        self.config
    }

    #[must_use]
    pub fn phase(&self, id: SwitchId) -> GesturePhase {
        self.trackers
            .get(&id)
            .map_or(GesturePhase::Idle, |t| t.recognizer.phase())
    }

    /// Live intensity for a control that is being adjusted.
    #[must_use]
    pub fn preview(&self, id: SwitchId) -> Option<Intensity> {
        self.trackers.get(&id).and_then(|t| t.recognizer.preview())
    }

    pub fn update(&mut self, message: Message, store: &SwitchStore) -> Event {
        match message {
            Message::Pointer { id, event } => self.handle_pointer(id, event, store),
            Message::ToggleTheme => Event::ToggleTheme,
            Message::OpenSettings => {
                self.cancel_all();
                Event::OpenSettings
            }
        }
    }

    /// Keeps the abort handle of a freshly armed timer.
    ///
    /// A handle arriving after the press already ended is aborted at once.
    pub fn attach_timer(&mut self, id: SwitchId, handle: iced::task::Handle) {
        match self.trackers.get_mut(&id) {
            Some(tracker) if tracker.recognizer.phase() == GesturePhase::Pressing => {
                tracker.disarm();
                tracker.timer = Some(handle);
            }
            _ => handle.abort(),
        }
    }

    /// Delivers an elapsed hold timer.
    pub fn hold_elapsed(&mut self, id: SwitchId, ticket: HoldTicket) -> Event {
        let Some(tracker) = self.trackers.get_mut(&id) else {
            tracing::debug!(%id, "hold elapsed for unknown control");
            return Event::None;
        };
        tracker.timer = None;
        match tracker.recognizer.hold_elapsed(ticket) {
            Some(intent) => Event::Intent { id, intent },
            None => Event::None,
        }
    }

    /// Number of hold timers still waiting to fire.
    #[must_use]
    pub fn armed_timers(&self) -> usize {
        self.trackers.values().filter(|t| t.timer.is_some()).count()
    }

    /// Abandons every interaction in progress and aborts pending timers.
    ///
    /// Returns true when at least one control was active.
    pub fn cancel_all(&mut self) -> bool {
        let mut any = false;
        for tracker in self.trackers.values_mut() {
            tracker.disarm();
            any |= tracker.recognizer.cancel();
        }
        any
    }

    fn handle_pointer(&mut self, id: SwitchId, event: PointerEvent, store: &SwitchStore) -> Event {
        let Some(switch) = store.get(id) else {
            tracing::debug!(%id, "pointer input for unknown switch");
            return Event::None;
        };
        let config = self.config;
        let tracker = self.trackers.entry(id).or_insert_with(|| Tracker {
            recognizer: GestureRecognizer::new(config),
            timer: None,
        });

        let intent = match event {
            PointerEvent::Pressed { x, at, .. } => {
                return match tracker.recognizer.press(x, at, switch.intensity) {
                    Some(ticket) => Event::ArmHoldTimer {
                        id,
                        ticket,
                        delay: config.long_press.as_duration(),
                    },
                    None => Event::None,
                };
            }
            PointerEvent::Moved { x, width } => tracker.recognizer.moved(x, width),
            PointerEvent::Released { at } => {
                tracker.disarm();
                tracker.recognizer.release(at)
            }
            PointerEvent::Cancelled => {
                tracker.disarm();
                tracker.recognizer.cancel();
                None
            }
        };

        intent.map_or(Event::None, |intent| Event::Intent { id, intent })
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let content = Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(header(&ctx))
            .push(
                Scrollable::new(Container::new(self.grid(ctx.switches)).padding(spacing::MD))
                    .height(Length::Fill),
            )
            .push(footer(&ctx));

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn grid<'a>(&'a self, switches: &'a [Switch]) -> Element<'a, Message> {
        let mut rows = Column::new().spacing(spacing::MD).width(Length::Fill);

        for chunk in switches.chunks(GRID_COLUMNS) {
            let mut row = Row::new().spacing(spacing::MD).width(Length::Fill);
            for switch in chunk {
                let id = switch.id;
                let control = switch_button::view(switch, self.preview(id), move |event| {
                    Message::Pointer { id, event }
                });
                row = row.push(Container::new(control).width(Length::FillPortion(1)));
            }
            // Keep cell widths even on a short last row
            for _ in chunk.len()..GRID_COLUMNS {
                row = row.push(Container::new(text("")).width(Length::FillPortion(1)));
            }
            rows = rows.push(row);
        }

        rows.into()
    }
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let dot_color = match ctx.status {
        LinkStatus::Connected => palette::INDICATOR_ON,
        LinkStatus::Disconnected => palette::ERROR_500,
    };

    let status = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(text(""))
                .width(Length::Fixed(sizing::INDICATOR_DOT))
                .height(Length::Fixed(sizing::INDICATOR_DOT))
                .style(styles::container::dot(dot_color)),
        )
        .push(Text::new(ctx.i18n.tr(ctx.status.i18n_key())).size(typography::BODY_SM));

    let titles = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.device_name).size(typography::TITLE_LG))
        .push(status);

    Container::new(titles)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::bar)
        .into()
}

fn footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (theme_glyph, theme_key) = if ctx.is_dark {
        ("\u{2600}", "footer-light-mode")
    } else {
        ("\u{263E}", "footer-dark-mode")
    };

    let theme_button = button(labelled(theme_glyph, ctx.i18n.tr(theme_key)))
        .on_press(Message::ToggleTheme)
        .padding(spacing::XS)
        .style(styles::button::ghost);

    let settings_button = button(labelled("\u{2699}", ctx.i18n.tr("footer-settings")))
        .on_press(Message::OpenSettings)
        .padding(spacing::XS)
        .style(styles::button::primary);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(theme_button).width(Length::Fill))
        .push(settings_button);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::bar)
        .into()
}

fn labelled<'a>(glyph: &'a str, label: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(glyph).size(sizing::ICON_SM))
        .push(Text::new(label).size(typography::BODY))
        .into()
}
