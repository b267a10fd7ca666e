// SPDX-License-Identifier: MPL-2.0
//! Switch control widget.
//!
//! A canvas draws the tile (gradient when on, flat when off), the on/off
//! indicator and the intensity fill bar, and turns raw mouse and touch
//! input into [`PointerEvent`]s with control-relative coordinates. Labels
//! and the percentage overlay are stacked on top as regular widgets.

use crate::domain::{Intensity, Switch};
use crate::ui::catalog;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use iced::widget::canvas::{self, gradient, Frame, Geometry, Path, Program};
use iced::widget::{text, Column, Container, Stack, Text};
use iced::{alignment, mouse, touch, Color, Element, Length, Point, Rectangle, Size, Theme};
use std::time::Instant;

/// Raw input for one switch control, already in control coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed { x: f32, width: f32, at: Instant },
    Moved { x: f32, width: f32 },
    Released { at: Instant },
    Cancelled,
}

/// Which input device owns the current interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pointer {
    #[default]
    None,
    Mouse,
    Finger(touch::Finger),
}

/// Maps an iced event onto the control, updating which pointer is tracked.
///
/// Leaving the control while pressed becomes [`PointerEvent::Cancelled`].
pub fn translate(
    tracked: &mut Pointer,
    event: &iced::Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
    now: Instant,
) -> Option<PointerEvent> {
    match event {
        iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            if *tracked != Pointer::None {
                return None;
            }
            let position = cursor.position_in(bounds)?;
            *tracked = Pointer::Mouse;
            Some(PointerEvent::Pressed {
                x: position.x,
                width: bounds.width,
                at: now,
            })
        }
        iced::Event::Mouse(mouse::Event::CursorMoved { .. }) if *tracked == Pointer::Mouse => {
            if let Some(position) = cursor.position_in(bounds) {
                Some(PointerEvent::Moved {
                    x: position.x,
                    width: bounds.width,
                })
            } else {
                *tracked = Pointer::None;
                Some(PointerEvent::Cancelled)
            }
        }
        iced::Event::Mouse(mouse::Event::CursorLeft) if *tracked == Pointer::Mouse => {
            *tracked = Pointer::None;
            Some(PointerEvent::Cancelled)
        }
        iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            if *tracked == Pointer::Mouse =>
        {
            *tracked = Pointer::None;
            Some(PointerEvent::Released { at: now })
        }
        iced::Event::Touch(touch::Event::FingerPressed { id, position }) => {
            if *tracked != Pointer::None || !bounds.contains(*position) {
                return None;
            }
            *tracked = Pointer::Finger(*id);
            Some(PointerEvent::Pressed {
                x: position.x - bounds.x,
                width: bounds.width,
                at: now,
            })
        }
        iced::Event::Touch(touch::Event::FingerMoved { id, position })
            if *tracked == Pointer::Finger(*id) =>
        {
            if bounds.contains(*position) {
                Some(PointerEvent::Moved {
                    x: position.x - bounds.x,
                    width: bounds.width,
                })
            } else {
                *tracked = Pointer::None;
                Some(PointerEvent::Cancelled)
            }
        }
        iced::Event::Touch(touch::Event::FingerLifted { id, .. })
            if *tracked == Pointer::Finger(*id) =>
        {
            *tracked = Pointer::None;
            Some(PointerEvent::Released { at: now })
        }
        iced::Event::Touch(touch::Event::FingerLost { id, .. })
            if *tracked == Pointer::Finger(*id) =>
        {
            *tracked = Pointer::None;
            Some(PointerEvent::Cancelled)
        }
        _ => None,
    }
}

struct SwitchCanvas<'a, F> {
    switch: &'a Switch,
    shown: Intensity,
    on_pointer: F,
}

impl<Message, F> Program<Message> for SwitchCanvas<'_, F>
where
    F: Fn(PointerEvent) -> Message,
{
    type State = Pointer;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        let pointer_event = translate(state, event, bounds, cursor, Instant::now())?;
        Some(iced::widget::Action::publish((self.on_pointer)(pointer_event)).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();
        let is_on = self.switch.is_on;

        // Tile
        let tile = Path::rounded_rectangle(Point::ORIGIN, size, radius::LG.into());
        if is_on {
            let (from, to) = catalog::gradient(self.switch.color);
            let fill = gradient::Linear::new(Point::ORIGIN, Point::new(size.width, size.height))
                .add_stop(0.0, from)
                .add_stop(1.0, to);
            frame.fill(&tile, fill);
        } else {
            frame.fill(&tile, theme.extended_palette().background.weak.color);
        }

        // On/off indicator
        let dot_radius = sizing::INDICATOR_DOT / 2.0;
        let dot = Path::circle(
            Point::new(size.width - spacing::MD - dot_radius, spacing::MD + dot_radius),
            dot_radius,
        );
        frame.fill(&dot, if is_on { palette::INDICATOR_ON } else { palette::GRAY_400 });

        // Intensity bar
        let track_width = (size.width - spacing::MD * 2.0).max(0.0);
        let track_origin = Point::new(spacing::MD, size.height - spacing::MD - sizing::FILL_BAR_HEIGHT);
        let bar_radius = sizing::FILL_BAR_HEIGHT / 2.0;
        let (track_color, fill_color) = if is_on {
            (
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::WHITE
                },
                palette::WHITE,
            )
        } else {
            (
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::FILL_TRACK_OFF
                },
                palette::FILL_TRACK_OFF,
            )
        };
        let track = Path::rounded_rectangle(
            track_origin,
            Size::new(track_width, sizing::FILL_BAR_HEIGHT),
            bar_radius.into(),
        );
        frame.fill(&track, track_color);

        let filled = track_width * self.shown.as_fraction();
        if filled > 0.0 {
            let bar = Path::rounded_rectangle(
                track_origin,
                Size::new(filled, sizing::FILL_BAR_HEIGHT),
                bar_radius.into(),
            );
            frame.fill(&bar, fill_color);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Renders one switch control.
///
/// `preview` is the live intensity while the user is adjusting; it replaces
/// the stored value in the fill bar and shows a large percentage overlay.
pub fn view<'a, Message: 'a>(
    switch: &'a Switch,
    preview: Option<Intensity>,
    on_pointer: impl Fn(PointerEvent) -> Message + 'a,
) -> Element<'a, Message> {
    let is_on = switch.is_on;
    let label_style = move |theme: &Theme| text::Style {
        color: Some(if is_on {
            palette::WHITE
        } else {
            theme.palette().text
        }),
    };

    let surface = canvas::Canvas::new(SwitchCanvas {
        switch,
        shown: preview.unwrap_or(switch.intensity),
        on_pointer,
    })
    .width(Length::Fill)
    .height(Length::Fixed(sizing::SWITCH_HEIGHT));

    let labels = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(catalog::glyph(switch.icon)).size(sizing::ICON_LG).style(label_style))
        .push(Text::new(switch.name.as_str()).size(typography::BODY_LG).style(label_style));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SWITCH_HEIGHT))
        .push(surface)
        .push(
            Container::new(labels)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        );

    if let Some(value) = preview {
        layers = layers.push(
            Container::new(
                Text::new(value.to_string())
                    .size(typography::DISPLAY)
                    .color(palette::WHITE),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(|_theme: &Theme| iced::widget::container::Style {
                background: Some(iced::Background::Color(Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..palette::BLACK
                })),
                border: iced::Border {
                    radius: radius::LG.into(),
                    ..Default::default()
                },
                ..Default::default()
            }),
        );
    }

    layers.into()
}
