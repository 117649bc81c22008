// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! Pages never render feedback themselves: they hand a [`Notification`] back
//! to the application, which queues it in the toast manager.

use crate::config::{SUCCESS_TOAST_SECS, WARNING_TOAST_SECS};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed (green, short duration).
    #[default]
    Success,
    /// Informational message (blue, short duration).
    Info,
    /// Something went wrong but the app keeps working (yellow, longer duration).
    Warning,
    /// Requires attention (red, manual dismiss).
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Glyph shown at the start of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "ℹ",
            Severity::Warning | Severity::Error => "⚠",
        }
    }

    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(SUCCESS_TOAST_SECS)),
            Severity::Warning => Some(Duration::from_secs(WARNING_TOAST_SECS)),
            Severity::Error => None,
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// i18n key resolved at render time.
    message_key: String,
    message_args: Vec<(String, String)>,
    /// Set when the toast enters the visible stack; queued toasts never expire.
    shown_at: Option<Instant>,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            shown_at: None,
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds a Fluent argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Starts the auto-dismiss countdown.
    pub(super) fn mark_shown(&mut self, at: Instant) {
        self.shown_at = Some(at);
    }

    /// Returns whether the auto-dismiss delay, counted from the moment the
    /// toast became visible, has elapsed at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        let Some(shown_at) = self.shown_at else {
            return false;
        };
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|d| now.saturating_duration_since(shown_at) >= d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn error_severity_has_no_auto_dismiss() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
        let mut n = Notification::error("boom");
        n.mark_shown(Instant::now());
        assert!(!n.is_expired(Instant::now() + Duration::from_secs(3600)));
    }

    #[test]
    fn warning_duration_is_longer_than_success() {
        let success = Severity::Success.auto_dismiss_duration().unwrap();
        let warning = Severity::Warning.auto_dismiss_duration().unwrap();
        assert!(warning > success);
    }

    #[test]
    fn success_expires_after_its_duration() {
        let shown = Instant::now();
        let mut n = Notification::success("saved");
        n.mark_shown(shown);
        assert!(!n.is_expired(shown));
        assert!(n.is_expired(shown + Duration::from_secs(SUCCESS_TOAST_SECS)));
    }

    #[test]
    fn toast_that_was_never_shown_does_not_expire() {
        let n = Notification::success("waiting");
        assert!(!n.is_expired(Instant::now() + Duration::from_secs(3600)));
    }

    #[test]
    fn builder_collects_args() {
        let n = Notification::success("notification-copied").with_arg("kind", "HEX");
        assert_eq!(n.severity(), Severity::Success);
        assert_eq!(n.message_key(), "notification-copied");
        assert_eq!(n.message_args(), &[("kind".to_string(), "HEX".to_string())]);
    }
}
