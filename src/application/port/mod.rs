// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`device`]: Switch hardware link (commands out, state reports in)

pub mod device;

// Re-export main types for convenience
pub use device::{
    DeviceLink, LinkStatus, SimulatedDevice, SwitchCommand, SwitchReport, SIMULATED_FIRMWARE,
};
