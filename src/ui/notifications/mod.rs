// SPDX-License-Identifier: MPL-2.0
//! Toasts confirming saves and surfacing config problems without blocking
//! the dashboard.
//!
//! Successes disappear after 3s and warnings after 5s; errors stay until
//! dismissed.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity, ToastId};
pub use toast::overlay;
