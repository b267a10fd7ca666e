// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::config::{DEVICE_POLL_MS, NOTIFICATION_TICK_MS};
use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes Escape to the app unless a widget already consumed it.
pub fn create_keyboard_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match (&event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape),
                ..
            }),
            event::Status::Ignored,
        ) => Some(Message::Escape),
        _ => None,
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Drains device reports at a fixed interval.
pub fn create_device_subscription() -> Subscription<Message> {
    time::every(Duration::from_millis(DEVICE_POLL_MS)).map(Message::DevicePoll)
}
