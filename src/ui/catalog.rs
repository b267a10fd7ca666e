// SPDX-License-Identifier: MPL-2.0
//! Visual resolution of catalog keys.
//!
//! Switches only store [`Icon`] and [`ColorTheme`] keys; this module turns
//! them into what the screen shows.

use crate::domain::{ColorTheme, Icon, Rgb};
use iced::Color;

/// Glyph rendered for an icon key.
#[must_use]
pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Lightbulb => "\u{1F4A1}",
        Icon::Cloud => "\u{2601}",
        Icon::Home => "\u{2302}",
        Icon::Zap => "\u{26A1}",
        Icon::Sparkles => "\u{2728}",
        Icon::Power => "\u{23FB}",
        Icon::Sun => "\u{2600}",
    }
}

/// Converts a domain color stop into an iced color.
#[must_use]
pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

/// Gradient endpoints (from, to) for an "on" switch.
#[must_use]
pub fn gradient(color: ColorTheme) -> (Color, Color) {
    let (from, to) = color.gradient_stops();
    (to_color(from), to_color(to))
}

/// Solid color used for swatches and the fill bar.
#[must_use]
pub fn accent(color: ColorTheme) -> Color {
    to_color(color.gradient_stops().1)
}

/// i18n key for an icon's accessible name.
#[must_use]
pub fn icon_label_key(icon: Icon) -> String {
    format!("icon-{}", icon.key())
}

/// i18n key for a color's accessible name.
#[must_use]
pub fn color_label_key(color: ColorTheme) -> String {
    format!("color-{}", color.key())
}
