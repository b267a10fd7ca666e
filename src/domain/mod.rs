// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core switch model and gesture rules.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Apart from `serde` derives and `tracing` events it has no dependencies on
//! external crates, and nothing here knows about the GUI toolkit.
//!
//! # Modules
//!
//! - [`newtypes`]: Bounded values ([`Intensity`](newtypes::Intensity),
//!   [`LongPressDelay`](newtypes::LongPressDelay), [`MoveThreshold`](newtypes::MoveThreshold))
//! - [`switch`]: The [`Switch`](switch::Switch) entity, its catalogs and the default roster
//! - [`gesture`]: The [`GestureRecognizer`](gesture::GestureRecognizer) state machine

pub mod gesture;
pub mod newtypes;
pub mod switch;

pub use gesture::{GestureConfig, GesturePhase, GestureRecognizer, HoldTicket, Intent};
pub use newtypes::{Intensity, LongPressDelay, MoveThreshold};
pub use switch::{default_roster, ColorTheme, Icon, Rgb, Switch, SwitchId};
