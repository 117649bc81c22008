// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only two things reach the update loop from outside: window resizes, which
//! switch the header between its full and compact layouts, and a periodic
//! tick while something on screen is waiting to expire.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Forwards window resizes.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(window::Event::Resized(size)) = event {
            Some(Message::WindowResized(size))
        } else {
            None
        }
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss and
/// the brand guide "copied" indicator.
///
/// The tick only runs while one of them is pending, so an idle window
/// receives no messages.
pub fn create_tick_subscription(
    has_notifications: bool,
    copied_indicator_pending: bool,
) -> Subscription<Message> {
    if has_notifications || copied_indicator_pending {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
