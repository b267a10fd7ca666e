// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the switch panel.
//!
//! Every color, size and spacing used by the widgets comes from here so the
//! dashboard, the detail dialog and the settings sheet stay visually aligned.
//! Sizes are in logical pixels on a 4px grid; the switch tiles and color
//! swatches are sized for gloved fingers on an in-vehicle touch screen.
//!
//! ```
//! use powerswitch::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let scrim = Color {
//!     a: opacity::OVERLAY_MEDIUM,
//!     ..palette::BLACK
//! };
//! assert!(spacing::MD > spacing::SM);
//! assert!(scrim.a < 1.0);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Accent used by primary actions and focus rings
    pub const PRIMARY_400: Color = Color::from_rgb(0.38, 0.65, 0.98);
    pub const PRIMARY_500: Color = Color::from_rgb(0.23, 0.51, 0.96);
    pub const PRIMARY_600: Color = Color::from_rgb(0.15, 0.39, 0.92);

    // Switch surfaces
    pub const FILL_TRACK_OFF: Color = Color::from_rgb(0.42, 0.45, 0.5);
    pub const INDICATOR_ON: Color = Color::from_rgb(0.29, 0.87, 0.5);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    //! Alpha levels for scrims and translucent surfaces.

    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_HOVER: f32 = 0.8;

    /// Dialog and side sheet background
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    // Switch controls
    /// Height of one switch tile; well above the 44px touch minimum
    pub const SWITCH_HEIGHT: f32 = 128.0;
    pub const FILL_BAR_HEIGHT: f32 = 6.0;
    pub const INDICATOR_DOT: f32 = 10.0;
    pub const SWATCH: f32 = 40.0;

    // Component widths
    pub const SIDEBAR_WIDTH: f32 = 360.0;
    pub const DIALOG_WIDTH: f32 = 420.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Percentage overlay shown while dragging intensity
    pub const DISPLAY: f32 = 44.0;

    /// Settings sheet heading
    pub const TITLE_LG: f32 = 28.0;
    /// Device name and dialog titles
    pub const TITLE_MD: f32 = 22.0;
    /// Switch names on tiles
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 15.0;
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Selected icon or swatch outline
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::DIALOG_WIDTH > sizing::TOAST_WIDTH);

    // Touch target validation (WCAG 2.5.5, 44x44 minimum)
    assert!(sizing::SWITCH_HEIGHT >= 44.0);
    assert!(sizing::SWATCH >= sizing::ICON_LG);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

};
