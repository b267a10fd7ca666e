// SPDX-License-Identifier: MPL-2.0
//! Button styles.
//!
//! All buttons share one shape per role; only the fill changes with status.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color, Shadow, Theme};

fn filled(fill: Color, text: Color, edge: Color, corner: f32, lift: Shadow) -> Style {
    Style {
        background: Some(Background::Color(fill)),
        text_color: text,
        border: Border {
            color: edge,
            width: border::WIDTH_SM,
            radius: corner.into(),
        },
        shadow: lift,
        snap: true,
    }
}

fn is_light(theme: &Theme) -> bool {
    !theme.extended_palette().is_dark
}

/// Disabled look shared by every role.
fn muted(theme: &Theme) -> Style {
    let fill = if is_light(theme) {
        palette::GRAY_100
    } else {
        palette::GRAY_700
    };
    filled(fill, palette::GRAY_400, palette::GRAY_400, radius::SM, shadow::NONE)
}

/// Save and other confirming actions.
pub fn primary(theme: &Theme, status: Status) -> Style {
    match status {
        Status::Active => filled(
            palette::PRIMARY_500,
            palette::WHITE,
            palette::PRIMARY_600,
            radius::SM,
            shadow::SM,
        ),
        Status::Hovered => filled(
            palette::PRIMARY_400,
            palette::WHITE,
            palette::PRIMARY_500,
            radius::SM,
            shadow::MD,
        ),
        Status::Pressed => filled(
            palette::PRIMARY_600,
            palette::WHITE,
            palette::PRIMARY_600,
            radius::SM,
            shadow::NONE,
        ),
        Status::Disabled => muted(theme),
    }
}

/// Current choice in a picker or tab row.
pub fn selected(theme: &Theme, status: Status) -> Style {
    match status {
        // A selected choice does not sink when pressed again.
        Status::Pressed => primary(theme, Status::Active),
        other => primary(theme, other),
    }
}

/// Other choices in a picker or tab row.
pub fn unselected(theme: &Theme, status: Status) -> Style {
    let (fill, hover, text) = if is_light(theme) {
        (palette::GRAY_100, palette::GRAY_200, palette::GRAY_900)
    } else {
        (palette::GRAY_700, Color::from_rgb(0.36, 0.36, 0.38), palette::WHITE)
    };

    match status {
        Status::Active | Status::Pressed => {
            filled(fill, text, palette::GRAY_400, radius::SM, shadow::NONE)
        }
        Status::Hovered => filled(hover, text, palette::PRIMARY_500, radius::SM, shadow::SM),
        Status::Disabled => muted(theme),
    }
}

/// Round color swatch; the selected one gets a ring in the text color.
pub fn swatch(fill: Color, is_selected: bool) -> impl Fn(&Theme, Status) -> Style {
    move |theme: &Theme, status: Status| {
        let ring = match (is_selected, status) {
            (true, _) => theme.palette().text,
            (false, Status::Hovered) => palette::GRAY_400,
            (false, _) => Color::TRANSPARENT,
        };
        let lift = if is_selected { shadow::SM } else { shadow::NONE };

        let mut style = filled(fill, palette::WHITE, ring, radius::FULL, lift);
        style.border.width = if is_selected {
            border::WIDTH_MD + 1.0
        } else {
            border::WIDTH_MD
        };
        style
    }
}

/// Power toggle: green while the switch is on, neutral while off.
pub fn power(is_on: bool) -> impl Fn(&Theme, Status) -> Style {
    move |theme: &Theme, status: Status| {
        if !is_on {
            return unselected(theme, status);
        }
        let fill = match status {
            Status::Hovered | Status::Pressed => Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::SUCCESS_500
            },
            Status::Active | Status::Disabled => palette::SUCCESS_500,
        };
        filled(fill, palette::WHITE, palette::SUCCESS_500, radius::MD, shadow::SM)
    }
}

/// Borderless icon button (theme toggle, gear, close).
pub fn ghost(theme: &Theme, status: Status) -> Style {
    let tint = match status {
        Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        Status::Active | Status::Disabled => None,
    };

    Style {
        background: tint.map(|a| Background::Color(Color { a, ..palette::GRAY_400 })),
        text_color: theme.palette().text,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_fill_darkens_while_pressed() {
        let theme = Theme::Dark;
        assert_eq!(
            primary(&theme, Status::Active).background,
            Some(Background::Color(palette::PRIMARY_500))
        );
        assert_eq!(
            primary(&theme, Status::Pressed).background,
            Some(Background::Color(palette::PRIMARY_600))
        );
    }

    #[test]
    fn selected_choice_stays_put_when_pressed() {
        let theme = Theme::Light;
        assert_eq!(
            selected(&theme, Status::Pressed).background,
            selected(&theme, Status::Active).background
        );
        assert_ne!(
            selected(&theme, Status::Active).background,
            unselected(&theme, Status::Active).background
        );
    }

    #[test]
    fn swatch_ring_marks_selection() {
        let theme = Theme::Dark;
        let chosen = swatch(palette::ERROR_500, true)(&theme, Status::Active);
        let plain = swatch(palette::ERROR_500, false)(&theme, Status::Active);
        assert_eq!(plain.border.color, Color::TRANSPARENT);
        assert_ne!(chosen.border.color, Color::TRANSPARENT);
        assert!(chosen.border.width > plain.border.width);
    }

    #[test]
    fn power_button_is_green_only_when_on() {
        let theme = Theme::Light;
        let on = power(true)(&theme, Status::Active);
        let off = power(false)(&theme, Status::Active);
        assert_eq!(on.background, Some(Background::Color(palette::SUCCESS_500)));
        assert_ne!(off.background, on.background);
    }

    #[test]
    fn ghost_button_is_transparent_at_rest() {
        assert!(ghost(&Theme::Dark, Status::Active).background.is_none());
    }
}
