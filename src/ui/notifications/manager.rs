// SPDX-License-Identifier: MPL-2.0
//! Toast queue.
//!
//! At most [`MAX_VISIBLE_NOTIFICATIONS`] toasts are on screen; the rest wait
//! in arrival order. A toast's lifetime starts when it becomes visible, not
//! when it is pushed, so a queued warning is never skipped.

use super::notification::{Notification, Severity, ToastId};
use crate::app::config::MAX_VISIBLE_NOTIFICATIONS;
use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Dismiss(ToastId),
}

#[derive(Debug)]
struct Entry {
    id: ToastId,
    notification: Notification,
    shown_at: Instant,
}

impl Entry {
    fn expired(&self, now: Instant) -> bool {
        self.notification
            .severity()
            .lifetime()
            .is_some_and(|lifetime| now.saturating_duration_since(self.shown_at) >= lifetime)
    }
}

#[derive(Debug, Default)]
pub struct Manager {
    next_id: u64,
    visible: Vec<Entry>,
    queue: VecDeque<(ToastId, Notification)>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a toast and logs it at a level matching its severity.
    pub fn push(&mut self, notification: Notification) -> ToastId {
        match notification.severity() {
            Severity::Success => tracing::debug!(key = notification.key(), "toast"),
            Severity::Warning => tracing::warn!(key = notification.key(), "toast"),
            Severity::Error => tracing::error!(
                key = notification.key(),
                args = ?notification.args(),
                "toast"
            ),
        }

        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.queue.push_back((id, notification));
        self.promote(Instant::now());
        id
    }

    /// Removes a toast whether it is visible or still queued.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        if let Some(index) = self.visible.iter().position(|entry| entry.id == id) {
            self.visible.remove(index);
            self.promote(Instant::now());
            return true;
        }
        let before = self.queue.len();
        self.queue.retain(|(queued, _)| *queued != id);
        self.queue.len() != before
    }

    /// Drops expired toasts and shows waiting ones in their place.
    pub fn tick(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|entry| !entry.expired(now));
        if self.visible.len() != before {
            self.promote(now);
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
        }
    }

    /// Visible toasts, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = (ToastId, &Notification)> {
        self.visible.iter().map(|entry| (entry.id, &entry.notification))
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.queue.is_empty()
    }

    fn promote(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE_NOTIFICATIONS {
            let Some((id, notification)) = self.queue.pop_front() else {
                break;
            };
            self.visible.push(Entry {
                id,
                notification,
                shown_at: now,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn fill(manager: &mut Manager) -> Vec<ToastId> {
        (0..MAX_VISIBLE_NOTIFICATIONS)
            .map(|i| manager.push(Notification::success(format!("saved-{i}"))))
            .collect()
    }

    #[test]
    fn overflow_waits_in_queue() {
        let mut manager = Manager::new();
        assert!(manager.is_empty());
        fill(&mut manager);
        manager.push(Notification::warning("late"));

        assert_eq!(manager.visible_count(), MAX_VISIBLE_NOTIFICATIONS);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismissing_a_visible_toast_promotes_the_next() {
        let mut manager = Manager::new();
        let ids = fill(&mut manager);
        let late = manager.push(Notification::warning("late"));

        manager.update(Message::Dismiss(ids[0]));
        assert_eq!(manager.queued_count(), 0);
        assert!(manager.visible().any(|(id, _)| id == late));
        assert!(!manager.dismiss(ids[0]));
    }

    #[test]
    fn queued_toasts_can_be_dismissed() {
        let mut manager = Manager::new();
        fill(&mut manager);
        let late = manager.push(Notification::error("late"));
        assert!(manager.dismiss(late));
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn tick_expires_timed_toasts_only() {
        let mut manager = Manager::new();
        manager.push(Notification::success("saved"));
        manager.push(Notification::error("failed"));

        manager.tick(Instant::now() + Duration::from_millis(NOTIFICATION_WAIT_MS));
        let keys: Vec<&str> = manager.visible().map(|(_, toast)| toast.key()).collect();
        assert_eq!(keys, vec!["failed"]);
    }

    #[test]
    fn queued_toast_lifetime_starts_when_shown() {
        let mut manager = Manager::new();
        fill(&mut manager);
        manager.push(Notification::warning("late"));

        let later = Instant::now() + Duration::from_millis(NOTIFICATION_WAIT_MS);
        manager.tick(later);
        let keys: Vec<&str> = manager.visible().map(|(_, toast)| toast.key()).collect();
        assert_eq!(keys, vec!["late"]);

        manager.tick(later + Duration::from_millis(10));
        assert_eq!(manager.visible_count(), 1);
    }

    /// Longer than a success toast, shorter than a warning.
    const NOTIFICATION_WAIT_MS: u64 = crate::app::config::NOTIFICATION_SHORT_MS + 500;
}
