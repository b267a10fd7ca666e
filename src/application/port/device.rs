// SPDX-License-Identifier: MPL-2.0
//! Device link port definition.
//!
//! This module defines the [`DeviceLink`] trait, the boundary between the
//! control surface and whatever actually drives the accessory relays.
//! The only adapter today is [`SimulatedDevice`], which reports a static
//! connection and never pushes state of its own.
//!
//! # Design Notes
//!
//! - Commands carry the full output state of one switch, so a lost command
//!   is repaired by the next one
//! - Methods are not `async`; a real adapter would queue internally and be
//!   polled from the update loop via `receive_state`
//! - Uses domain types only (`SwitchId`, `Intensity`)

use crate::domain::{Intensity, Switch, SwitchId};

// =============================================================================
// Wire-level Types
// =============================================================================

/// Desired output state for one switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchCommand {
    pub id: SwitchId,
    pub is_on: bool,
    pub intensity: Intensity,
}

impl From<&Switch> for SwitchCommand {
    fn from(switch: &Switch) -> Self {
        Self {
            id: switch.id,
            is_on: switch.is_on,
            intensity: switch.intensity,
        }
    }
}

/// State pushed by the device. Absent fields are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchReport {
    pub id: SwitchId,
    pub is_on: Option<bool>,
    pub intensity: Option<Intensity>,
}

/// Connection state shown in the header and device settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkStatus {
    #[default]
    Connected,
    Disconnected,
}

impl LinkStatus {
    /// Returns the i18n key for this status.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            LinkStatus::Connected => "device-status-connected",
            LinkStatus::Disconnected => "device-status-disconnected",
        }
    }
}

// =============================================================================
// DeviceLink Trait
// =============================================================================

/// Port for talking to the switch hardware.
pub trait DeviceLink {
    /// Forwards the new output state of one switch.
    fn send_command(&mut self, command: SwitchCommand);

    /// Drains state changes reported by the device since the last call.
    fn receive_state(&mut self) -> Vec<SwitchReport>;

    /// Current connection state.
    fn status(&self) -> LinkStatus;

    /// Firmware version string as reported by the device.
    fn firmware_version(&self) -> &str;
}

// =============================================================================
// Simulated Adapter
// =============================================================================

/// Firmware version the simulated controller claims to run.
pub const SIMULATED_FIRMWARE: &str = "v2.4.1";

/// In-process stand-in for a real controller.
#[derive(Debug, Default)]
pub struct SimulatedDevice {
    sent: usize,
    last: Option<SwitchCommand>,
}

impl SimulatedDevice {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of commands received so far.
    #[must_use]
    pub fn commands_sent(&self) -> usize {
        self.sent
    }

    #[must_use]
    pub fn last_command(&self) -> Option<SwitchCommand> {
        self.last
    }
}

impl DeviceLink for SimulatedDevice {
    fn send_command(&mut self, command: SwitchCommand) {
        tracing::debug!(
            id = command.id.value(),
            on = command.is_on,
            intensity = command.intensity.value(),
            "simulated device command"
        );
        self.sent += 1;
        self.last = Some(command);
    }

    fn receive_state(&mut self) -> Vec<SwitchReport> {
        Vec::new()
    }

    fn status(&self) -> LinkStatus {
        LinkStatus::Connected
    }

    fn firmware_version(&self) -> &str {
        SIMULATED_FIRMWARE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::default_roster;

    #[test]
    fn simulated_device_reports_static_identity() {
        let mut device = SimulatedDevice::new();
        assert_eq!(device.status(), LinkStatus::Connected);
        assert_eq!(device.firmware_version(), "v2.4.1");
        assert!(device.receive_state().is_empty());
    }

    #[test]
    fn simulated_device_records_commands() {
        let mut device = SimulatedDevice::new();
        let switch = &default_roster()[0];
        device.send_command(SwitchCommand::from(switch));
        assert_eq!(device.commands_sent(), 1);
        assert_eq!(
            device.last_command(),
            Some(SwitchCommand {
                id: SwitchId::new(1),
                is_on: false,
                intensity: Intensity::new(80),
            })
        );
    }

    #[test]
    fn status_keys_are_distinct() {
        assert_ne!(
            LinkStatus::Connected.i18n_key(),
            LinkStatus::Disconnected.i18n_key()
        );
    }
}
