// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.

use super::manager::{Manager, Message};
use super::notification::{Notification, ToastId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Stack of visible toasts pinned to the bottom-right corner.
///
/// Renders an empty, non-interactive space when nothing is visible so the
/// layer can always sit on top of the app stack.
pub fn overlay<'a>(manager: &'a Manager, i18n: &I18n) -> Element<'a, Message> {
    if manager.visible_count() == 0 {
        return Space::new().into();
    }

    let column = manager.visible().fold(
        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right),
        |column, (id, toast)| column.push(card(id, toast, i18n)),
    );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .into()
}

fn card<'a>(id: ToastId, toast: &Notification, i18n: &I18n) -> Element<'a, Message> {
    let accent = toast.severity().accent();

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(toast.severity().glyph())
                .size(typography::TITLE_SM)
                .color(accent),
        )
        .push(
            Text::new(toast.text(i18n))
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(
            button(Text::new("\u{2715}").size(typography::CAPTION))
                .on_press(Message::Dismiss(id))
                .padding(spacing::XXS)
                .style(close_button),
        );

    Container::new(row)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| card_style(theme, accent))
        .into()
}

fn card_style(theme: &Theme, accent: Color) -> container::Style {
    let base = theme.extended_palette().background.base;
    container::Style {
        background: Some(Background::Color(base.color)),
        text_color: Some(base.text),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

fn close_button(theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };
    button::Style {
        background: alpha.map(|a| Background::Color(Color { a, ..palette::GRAY_400 })),
        text_color: theme.extended_palette().background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
