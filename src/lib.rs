// SPDX-License-Identifier: MPL-2.0
//! `powerswitch` is a touch-friendly control panel for vehicle accessory
//! switches, built with the Iced GUI framework.
//!
//! Tap a switch to toggle it, hold and drag sideways to dim it, or hold in
//! place to open its detail dialog. Names, icons and colors are editable;
//! every change is forwarded to the device link.
//!
//! # Layers
//!
//! - [`domain`] - Switch entity, bounded values and the gesture recognizer
//! - [`application`] - Observable store, editing sessions and device ports
//! - [`app`] - Iced application shell, configuration and paths
//! - [`ui`] - Components and styling
//! - [`i18n`] - Fluent localization

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
