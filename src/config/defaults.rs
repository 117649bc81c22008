// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Calendar**: Upcoming panel size and rolling window
//! - **Notifications**: Toast lifetimes and queue size
//! - **Timers**: Tick interval and transient indicators
//! - **Records**: Defaults applied to newly created records

// ==========================================================================
// Calendar Defaults
// ==========================================================================

/// Maximum number of entries in the "upcoming" calendar panel.
pub const UPCOMING_EVENTS_LIMIT: usize = 5;

/// Length of the rolling window used by the "next days" calendar counter.
pub const UPCOMING_WINDOW_DAYS: i64 = 30;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Maximum number of toasts visible at once (others are queued).
pub const MAX_VISIBLE_TOASTS: usize = 3;

/// Lifetime of success and info toasts (in seconds).
pub const SUCCESS_TOAST_SECS: u64 = 3;

/// Lifetime of warning toasts (in seconds).
pub const WARNING_TOAST_SECS: u64 = 5;

// ==========================================================================
// Timer Defaults
// ==========================================================================

/// Interval of the periodic tick driving auto-dismiss and indicator resets.
pub const TICK_INTERVAL_MS: u64 = 250;

/// Delay after which the brand guide "copied" indicator clears.
pub const COPIED_INDICATOR_RESET_MS: u64 = 2000;

// ==========================================================================
// Record Defaults
// ==========================================================================

/// Image reference assigned to events and classifieds created from a form.
pub const DEFAULT_RECORD_IMAGE: &str = "https://images.unsplash.com/photo-1614447912305-2084b1cc2821?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";

/// Author shown on classifieds published from the form.
pub const DEFAULT_CLASSIFIED_AUTHOR: &str = "Usuario";

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Below this window width the header collapses into a menu button.
pub const COMPACT_LAYOUT_WIDTH: f32 = 900.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(UPCOMING_EVENTS_LIMIT > 0);
    assert!(UPCOMING_WINDOW_DAYS > 0);
    assert!(WARNING_TOAST_SECS > SUCCESS_TOAST_SECS);
    assert!(COPIED_INDICATOR_RESET_MS > TICK_INTERVAL_MS);
};
