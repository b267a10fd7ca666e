// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the settings side sheet and dialogs.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Dimmed layer behind modal surfaces.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Header and footer bars of the dashboard.
pub fn bar(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak;
    container::Style {
        background: Some(Background::Color(weak.color)),
        text_color: Some(weak.text),
        ..Default::default()
    }
}

/// Inset section inside a dialog (the inline settings sheet, device info rows).
pub fn section(theme: &Theme) -> container::Style {
    let strong = theme.extended_palette().background.strong;
    container::Style {
        border: Border {
            color: strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Small status dot.
pub fn dot(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
