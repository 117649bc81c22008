// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` limits the number of visible toasts, queues the rest in
//! arrival order and drops expired toasts on every tick. A toast's display
//! time starts when it becomes visible, not when it is queued.

use super::notification::{Notification, NotificationId, Severity};
use crate::config::MAX_VISIBLE_TOASTS;
use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Notifications waiting for a free slot (oldest first).
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the notification, or queues it when `MAX_VISIBLE_TOASTS` are
    /// already on screen.
    pub fn push(&mut self, mut notification: Notification) {
        match notification.severity() {
            Severity::Warning => {
                tracing::warn!(key = notification.message_key(), "warning notification");
            }
            Severity::Error => {
                tracing::error!(key = notification.message_key(), "error notification");
            }
            Severity::Success | Severity::Info => {
                tracing::debug!(key = notification.message_key(), "notification");
            }
        }

        if self.visible.len() < MAX_VISIBLE_TOASTS {
            notification.mark_shown(Instant::now());
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.dismiss_at(id, Instant::now())
    }

    /// Like [`Manager::dismiss`], with promoted toasts shown at `now`.
    fn dismiss_at(&mut self, id: NotificationId, now: Instant) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue(now);
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every visible notification whose delay elapsed at `now`.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.is_expired(now))
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss_at(id, now);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
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
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE_TOASTS {
            let Some(mut notification) = self.queue.pop_front() else {
                break;
            };
            notification.mark_shown(now);
            self.visible.push_front(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SUCCESS_TOAST_SECS;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE_TOASTS {
            manager.push(Notification::success(format!("test-{i}")));
        }
        manager.push(Notification::success("queued"));

        assert_eq!(manager.visible_count(), MAX_VISIBLE_TOASTS);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_promotes_from_queue_in_arrival_order() {
        let mut manager = Manager::new();
        let first = Notification::success("visible-0");
        let first_id = first.id();
        manager.push(first);
        for i in 1..MAX_VISIBLE_TOASTS {
            manager.push(Notification::success(format!("visible-{i}")));
        }
        manager.push(Notification::success("queued-a"));
        manager.push(Notification::success("queued-b"));

        assert!(manager.dismiss(first_id));

        assert_eq!(manager.visible_count(), MAX_VISIBLE_TOASTS);
        assert_eq!(manager.queued_count(), 1);
        assert!(manager.visible().any(|n| n.message_key() == "queued-a"));
    }

    #[test]
    fn promoted_toast_is_shown_on_top() {
        let mut manager = Manager::new();
        let first = Notification::success("visible-0");
        let first_id = first.id();
        manager.push(first);
        for i in 1..MAX_VISIBLE_TOASTS {
            manager.push(Notification::success(format!("visible-{i}")));
        }
        manager.push(Notification::success("queued"));

        manager.dismiss(first_id);

        let top = manager.visible().next().map(Notification::message_key);
        assert_eq!(top, Some("queued"));
    }

    #[test]
    fn queued_toasts_get_full_display_time_after_promotion() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE_TOASTS + 2 {
            manager.push(Notification::success(format!("toast-{i}")));
        }
        let lifetime = Duration::from_secs(SUCCESS_TOAST_SECS);

        let first_expiry = Instant::now() + lifetime + Duration::from_millis(100);
        manager.tick(first_expiry);
        assert_eq!(manager.visible_count(), 2);
        assert_eq!(manager.queued_count(), 0);

        manager.tick(first_expiry + Duration::from_millis(100));
        assert_eq!(manager.visible_count(), 2);

        manager.tick(first_expiry + lifetime);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let stray = Notification::success("stray").id();
        assert!(!manager.dismiss(stray));
    }

    #[test]
    fn tick_removes_expired_success_but_keeps_errors() {
        let mut manager = Manager::new();
        manager.push(Notification::success("done"));
        manager.push(Notification::error("failed"));

        manager.tick(Instant::now() + Duration::from_secs(SUCCESS_TOAST_SECS + 1));

        assert_eq!(manager.visible_count(), 1);
        assert!(manager.visible().all(|n| n.message_key() == "failed"));
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::info("hello");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }
}
