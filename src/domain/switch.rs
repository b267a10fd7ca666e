// SPDX-License-Identifier: MPL-2.0
//! The switch entity and its fixed icon and color catalogs.
//!
//! Entities only carry catalog *keys*. Turning a key into a glyph or a
//! paint is the presentation layer's job, which keeps `Switch` cheap to
//! clone, compare and serialize.

use super::newtypes::Intensity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a switch. Assigned at seeding, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SwitchId(u32);

impl SwitchId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SwitchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Icon Catalog
// =============================================================================

/// Entry in the fixed icon catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    #[default]
    Lightbulb,
    Cloud,
    Home,
    Zap,
    Sparkles,
    Power,
    Sun,
}

impl Icon {
    /// Every icon, in picker order.
    pub const ALL: [Icon; 7] = [
        Icon::Lightbulb,
        Icon::Cloud,
        Icon::Home,
        Icon::Zap,
        Icon::Sparkles,
        Icon::Power,
        Icon::Sun,
    ];

    /// Stable key used for i18n lookups (`icon-<key>`).
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Icon::Lightbulb => "lightbulb",
            Icon::Cloud => "cloud",
            Icon::Home => "home",
            Icon::Zap => "zap",
            Icon::Sparkles => "sparkles",
            Icon::Power => "power",
            Icon::Sun => "sun",
        }
    }
}

// =============================================================================
// Color Catalog
// =============================================================================

/// An sRGB color stop, framework independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Entry in the fixed color catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTheme {
    Red,
    #[default]
    Blue,
    Green,
    Yellow,
    Purple,
    Amber,
    Orange,
    White,
    Pink,
}

impl ColorTheme {
    /// Every color, in picker order.
    pub const ALL: [ColorTheme; 9] = [
        ColorTheme::Red,
        ColorTheme::Blue,
        ColorTheme::Green,
        ColorTheme::Yellow,
        ColorTheme::Purple,
        ColorTheme::Amber,
        ColorTheme::Orange,
        ColorTheme::White,
        ColorTheme::Pink,
    ];

    /// Stable key used for i18n lookups (`color-<key>`).
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ColorTheme::Red => "red",
            ColorTheme::Blue => "blue",
            ColorTheme::Green => "green",
            ColorTheme::Yellow => "yellow",
            ColorTheme::Purple => "purple",
            ColorTheme::Amber => "amber",
            ColorTheme::Orange => "orange",
            ColorTheme::White => "white",
            ColorTheme::Pink => "pink",
        }
    }

    /// The two gradient stops (from, to) used when the switch is on.
    #[must_use]
    pub fn gradient_stops(self) -> (Rgb, Rgb) {
        match self {
            ColorTheme::Red => (Rgb::new(0xf8, 0x71, 0x71), Rgb::new(0xdc, 0x26, 0x26)),
            ColorTheme::Blue => (Rgb::new(0x60, 0xa5, 0xfa), Rgb::new(0x25, 0x63, 0xeb)),
            ColorTheme::Green => (Rgb::new(0x4a, 0xde, 0x80), Rgb::new(0x16, 0xa3, 0x4a)),
            ColorTheme::Yellow => (Rgb::new(0xfd, 0xe0, 0x47), Rgb::new(0xea, 0xb3, 0x08)),
            ColorTheme::Purple => (Rgb::new(0xc0, 0x84, 0xfc), Rgb::new(0x93, 0x33, 0xea)),
            ColorTheme::Amber => (Rgb::new(0xfc, 0xd3, 0x4d), Rgb::new(0xf5, 0x9e, 0x0b)),
            ColorTheme::Orange => (Rgb::new(0xfb, 0x92, 0x3c), Rgb::new(0xea, 0x58, 0x0c)),
            ColorTheme::White => (Rgb::new(0xf3, 0xf4, 0xf6), Rgb::new(0xd1, 0xd5, 0xdb)),
            ColorTheme::Pink => (Rgb::new(0xf4, 0x72, 0xb6), Rgb::new(0xdb, 0x27, 0x77)),
        }
    }
}

// =============================================================================
// Switch
// =============================================================================

/// One controllable accessory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Switch {
    pub id: SwitchId,
    pub name: String,
    pub icon: Icon,
    pub color: ColorTheme,
    pub is_on: bool,
    pub intensity: Intensity,
}

impl Switch {
    /// Creates an off switch with the given display attributes.
    pub fn new(
        id: SwitchId,
        name: impl Into<String>,
        icon: Icon,
        color: ColorTheme,
        intensity: Intensity,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            icon,
            color,
            is_on: false,
            intensity,
        }
    }

    /// Returns true when any display attribute (name, icon, color) differs.
    #[must_use]
    pub fn appearance_differs(&self, other: &Switch) -> bool {
        self.name != other.name || self.icon != other.icon || self.color != other.color
    }
}

/// The roster every session starts with.
#[must_use]
pub fn default_roster() -> Vec<Switch> {
    let seed = |id, name, icon, color, intensity| {
        Switch::new(SwitchId::new(id), name, icon, color, Intensity::new(intensity))
    };

    vec![
        seed(1, "KC Lites", Icon::Lightbulb, ColorTheme::Yellow, 80),
        seed(2, "Fog Lights", Icon::Cloud, ColorTheme::Blue, 60),
        seed(3, "Interior", Icon::Home, ColorTheme::Amber, 50),
        seed(4, "Spotlights", Icon::Lightbulb, ColorTheme::White, 100),
        seed(5, "Underglow", Icon::Sparkles, ColorTheme::Purple, 70),
        seed(6, "Aux Power", Icon::Zap, ColorTheme::Red, 90),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_roster_has_unique_ids_in_order() {
        let roster = default_roster();
        let ids: Vec<u32> = roster.iter().map(|s| s.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        let unique: HashSet<_> = roster.iter().map(|s| s.id).collect();
        assert_eq!(unique.len(), roster.len());
    }

    #[test]
    fn default_roster_starts_off() {
        assert!(default_roster().iter().all(|s| !s.is_on));
    }

    #[test]
    fn catalog_keys_are_unique() {
        let icons: HashSet<_> = Icon::ALL.iter().map(|i| i.key()).collect();
        assert_eq!(icons.len(), Icon::ALL.len());
        let colors: HashSet<_> = ColorTheme::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(colors.len(), ColorTheme::ALL.len());
    }

    #[test]
    fn gradient_stops_differ_for_every_color() {
        for color in ColorTheme::ALL {
            let (from, to) = color.gradient_stops();
            assert_ne!(from, to, "{color:?} should have a visible gradient");
        }
    }

    #[test]
    fn appearance_differs_ignores_power_and_intensity() {
        let a = default_roster().remove(0);
        let mut b = a.clone();
        b.is_on = true;
        b.intensity = Intensity::new(10);
        assert!(!a.appearance_differs(&b));
        b.name = "Roof Bar".into();
        assert!(a.appearance_differs(&b));
    }

    #[test]
    fn switch_serializes_catalog_keys() {
        let switch = default_roster().remove(1);
        let encoded = toml::to_string(&switch).expect("serializable");
        assert!(encoded.contains("icon = \"cloud\""));
        assert!(encoded.contains("color = \"blue\""));
        assert!(encoded.contains("intensity = 60"));
    }
}
