// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Gesture bounds live next to their newtypes
//! in [`crate::domain::newtypes`] and are re-exported here.
//!
//! # Categories
//!
//! - **Gesture**: Long-press delay and tap movement threshold
//! - **Device**: Default vehicle name and report polling interval
//! - **Notifications**: Toast stack and auto-dismiss timing

pub use crate::domain::newtypes::long_press_bounds::{
    DEFAULT_MS as DEFAULT_LONG_PRESS_MS, MAX_MS as MAX_LONG_PRESS_MS,
    MIN_MS as MIN_LONG_PRESS_MS,
};
pub use crate::domain::newtypes::move_threshold_bounds::{
    DEFAULT_PX as DEFAULT_MOVE_THRESHOLD_PX, MAX_PX as MAX_MOVE_THRESHOLD_PX,
    MIN_PX as MIN_MOVE_THRESHOLD_PX,
};

// ==========================================================================
// Device Defaults
// ==========================================================================

/// Name shown in the dashboard header until the user renames the vehicle.
pub const DEFAULT_DEVICE_NAME: &str = "Sprinter Van";

/// Interval at which device reports are drained (milliseconds).
pub const DEVICE_POLL_MS: u64 = 1000;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Maximum number of toasts visible at once.
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 3;

/// Auto-dismiss delay for success and info toasts (milliseconds).
pub const NOTIFICATION_SHORT_MS: u64 = 3000;

/// Auto-dismiss delay for warning toasts (milliseconds).
pub const NOTIFICATION_LONG_MS: u64 = 5000;

/// Notification tick interval while toasts are visible (milliseconds).
pub const NOTIFICATION_TICK_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_LONG_PRESS_MS <= DEFAULT_LONG_PRESS_MS);
    assert!(DEFAULT_LONG_PRESS_MS <= MAX_LONG_PRESS_MS);
    assert!(MAX_VISIBLE_NOTIFICATIONS > 0);
    assert!(NOTIFICATION_SHORT_MS < NOTIFICATION_LONG_MS);
    assert!(NOTIFICATION_TICK_MS < NOTIFICATION_SHORT_MS);
    assert!(DEVICE_POLL_MS >= NOTIFICATION_TICK_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_threshold_default_within_bounds() {
        assert!(DEFAULT_MOVE_THRESHOLD_PX >= MIN_MOVE_THRESHOLD_PX);
        assert!(DEFAULT_MOVE_THRESHOLD_PX <= MAX_MOVE_THRESHOLD_PX);
    }

    #[test]
    fn device_name_is_not_blank() {
        assert!(!DEFAULT_DEVICE_NAME.trim().is_empty());
    }
}
