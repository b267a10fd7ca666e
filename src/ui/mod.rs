// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Surfaces
//!
//! - [`dashboard`] - Header, grid of switch controls and footer
//! - [`control_dialog`] - Modal detail dialog opened by a long-press
//! - [`settings`] - Side sheet with button and device settings
//!
//! # Shared Infrastructure
//!
//! - [`switch_button`] - Canvas-backed switch control and pointer translation
//! - [`switch_form`] - Name, power, intensity, icon and color fields
//! - [`catalog`] - Glyphs and colors for catalog keys
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod catalog;
pub mod control_dialog;
pub mod dashboard;
pub mod design_tokens;
pub mod notifications;
pub mod settings;
pub mod styles;
pub mod switch_button;
pub mod switch_form;
pub mod theming;
