// SPDX-License-Identifier: MPL-2.0
//! Switch and gesture newtypes.
//!
//! This module provides type-safe wrappers for bounded values,
//! ensuring they are always within valid ranges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

// =============================================================================
// Intensity Bounds
// =============================================================================

/// Intensity percentage bounds (0% to 100%).
pub mod intensity_bounds {
    /// Minimum intensity percentage.
    pub const MIN: u8 = 0;
    /// Maximum intensity percentage.
    pub const MAX: u8 = 100;
}

// =============================================================================
// Intensity
// =============================================================================

/// Switch intensity (brightness/strength), guaranteed to be within 0–100.
///
/// Any out-of-range input is clamped, never rejected. An off switch keeps
/// its intensity so turning it back on restores the previous level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    /// Fully dimmed.
    pub const MIN: Self = Self(intensity_bounds::MIN);
    /// Full strength.
    pub const MAX: Self = Self(intensity_bounds::MAX);

    /// Creates a new intensity, clamping the value to 0–100.
    #[must_use]
    pub fn new(percent: i64) -> Self {
        let clamped = percent.clamp(
            i64::from(intensity_bounds::MIN),
            i64::from(intensity_bounds::MAX),
        );
        // Lossless: the value is within 0..=100
        Self(u8::try_from(clamped).unwrap_or(intensity_bounds::MAX))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the intensity as a fraction in 0.0–1.0.
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        f32::from(self.0) / f32::from(intensity_bounds::MAX)
    }

    /// Returns a new intensity offset by `delta` percentage points (clamped).
    #[must_use]
    pub fn offset(self, delta: i64) -> Self {
        Self::new(i64::from(self.0).saturating_add(delta))
    }
}

impl From<i64> for Intensity {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Intensity {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u8> for Intensity {
    fn from(value: u8) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<Intensity> for u8 {
    fn from(value: Intensity) -> Self {
        value.0
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Long-Press Delay
// =============================================================================

/// Long-press hold delay bounds (in milliseconds).
pub mod long_press_bounds {
    /// Minimum hold delay.
    pub const MIN_MS: u64 = 200;
    /// Maximum hold delay.
    pub const MAX_MS: u64 = 2000;
    /// Default hold delay.
    pub const DEFAULT_MS: u64 = 500;
}

/// How long a press must be held before it becomes a long-press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongPressDelay(u64);

impl LongPressDelay {
    /// Creates a new hold delay, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(long_press_bounds::MIN_MS, long_press_bounds::MAX_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for LongPressDelay {
    fn default() -> Self {
        Self(long_press_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Move Threshold
// =============================================================================

/// Movement threshold bounds (in logical pixels).
pub mod move_threshold_bounds {
    /// Minimum threshold.
    pub const MIN_PX: f32 = 1.0;
    /// Maximum threshold.
    pub const MAX_PX: f32 = 50.0;
    /// Default threshold.
    pub const DEFAULT_PX: f32 = 5.0;
}

/// Horizontal distance a pointer may travel before a press stops being a tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveThreshold(f32);

impl MoveThreshold {
    /// Creates a new threshold, clamping to the valid range.
    ///
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if pixels.is_finite() {
            Self(pixels.clamp(move_threshold_bounds::MIN_PX, move_threshold_bounds::MAX_PX))
        } else {
            Self::default()
        }
    }

    /// Returns the threshold in pixels.
    #[must_use]
    pub fn pixels(self) -> f32 {
        self.0
    }

    /// Returns true when a displacement strictly exceeds the threshold.
    #[must_use]
    pub fn is_exceeded_by(self, displacement: f32) -> bool {
        displacement.abs() > self.0
    }
}

impl Default for MoveThreshold {
    fn default() -> Self {
        Self(move_threshold_bounds::DEFAULT_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_clamps_to_valid_range() {
        assert_eq!(Intensity::new(150).value(), 100);
        assert_eq!(Intensity::new(-10).value(), 0);
        assert_eq!(Intensity::new(i64::MAX).value(), 100);
        assert_eq!(Intensity::new(i64::MIN).value(), 0);
    }

    #[test]
    fn intensity_accepts_valid_values() {
        assert_eq!(Intensity::new(0).value(), 0);
        assert_eq!(Intensity::new(42).value(), 42);
        assert_eq!(Intensity::new(100).value(), 100);
    }

    #[test]
    fn intensity_offset_clamps() {
        assert_eq!(Intensity::new(90).offset(25), Intensity::MAX);
        assert_eq!(Intensity::new(10).offset(-25), Intensity::MIN);
        assert_eq!(Intensity::new(50).offset(-5).value(), 45);
        assert_eq!(Intensity::new(80).offset(i64::MAX), Intensity::MAX);
        assert_eq!(Intensity::new(80).offset(i64::MIN), Intensity::MIN);
    }

    #[test]
    fn intensity_fraction_and_display() {
        assert!((Intensity::new(25).as_fraction() - 0.25).abs() < f32::EPSILON);
        assert_eq!(Intensity::new(80).to_string(), "80%");
    }

    #[test]
    fn intensity_converts_from_integers() {
        assert_eq!(Intensity::from(250_i32), Intensity::MAX);
        assert_eq!(Intensity::from(-3_i32), Intensity::MIN);
        assert_eq!(Intensity::from(42_u8).value(), 42);
        assert_eq!(u8::from(Intensity::new(7)), 7);
    }

    #[test]
    fn intensity_deserialization_clamps() {
        #[derive(Deserialize)]
        struct Wrapper {
            value: Intensity,
        }
        let parsed: Wrapper = toml::from_str("value = 250").expect("valid toml");
        assert_eq!(parsed.value, Intensity::MAX);
    }

    #[test]
    fn long_press_delay_clamps() {
        assert_eq!(LongPressDelay::new(0).millis(), long_press_bounds::MIN_MS);
        assert_eq!(LongPressDelay::new(60_000).millis(), long_press_bounds::MAX_MS);
        assert_eq!(LongPressDelay::default().as_duration(), Duration::from_millis(500));
    }

    #[test]
    fn move_threshold_is_strict() {
        let threshold = MoveThreshold::default();
        assert!(!threshold.is_exceeded_by(4.0));
        assert!(!threshold.is_exceeded_by(5.0));
        assert!(threshold.is_exceeded_by(-5.5));
        assert!(threshold.is_exceeded_by(10.0));
    }

    #[test]
    fn move_threshold_rejects_non_finite() {
        assert_eq!(MoveThreshold::new(f32::NAN), MoveThreshold::default());
        assert_eq!(MoveThreshold::new(0.1).pixels(), move_threshold_bounds::MIN_PX);
    }
}
