// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Pages and chrome return events; the handlers here turn them into state
//! changes on the navigator, the theme store and the toast manager, or into
//! runtime tasks (the clipboard write).

use super::navigator::Navigator;
use super::{Message, Page};
use crate::config::COMPACT_LAYOUT_WIDTH;
use crate::ui::footer::{self, Event as FooterEvent};
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::pages::{admin, brand, classifieds, contact, events, home, login};
use crate::ui::theming::ThemeStore;
use chrono::NaiveDate;
use iced::{Size, Task};
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub navigator: &'a mut Navigator,
    pub theme: &'a mut ThemeStore,
    pub notifications: &'a mut notifications::Manager,
    pub menu_open: &'a mut bool,
    pub compact: &'a mut bool,
}

impl UpdateContext<'_> {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

/// Navigates and closes the compact menu.
fn navigate(ctx: &mut UpdateContext<'_>, page: Page) -> Task<Message> {
    ctx.navigator.navigate(page);
    *ctx.menu_open = false;
    Task::none()
}

/// Flips the theme. A failed save keeps the new theme on screen and warns.
fn toggle_theme(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if let Err(err) = ctx.theme.toggle() {
        tracing::warn!(error = %err, "failed to persist theme");
        ctx.notify(Notification::warning(err.i18n_key()));
    }
    Task::none()
}

/// Handles header messages.
pub fn handle_header_message(
    ctx: &mut UpdateContext<'_>,
    message: header::Message,
) -> Task<Message> {
    match header::update(message, ctx.menu_open) {
        HeaderEvent::None => Task::none(),
        HeaderEvent::Navigate(page) => navigate(ctx, page),
        HeaderEvent::ToggleTheme => toggle_theme(ctx),
        HeaderEvent::Logout => {
            ctx.navigator.logout();
            Task::none()
        }
    }
}

/// Handles footer messages.
pub fn handle_footer_message(
    ctx: &mut UpdateContext<'_>,
    message: &footer::Message,
) -> Task<Message> {
    match footer::update(message) {
        FooterEvent::Navigate(page) => navigate(ctx, page),
    }
}

/// Handles home page messages.
pub fn handle_home_message(
    ctx: &mut UpdateContext<'_>,
    state: &home::State,
    message: &home::Message,
) -> Task<Message> {
    match state.update(message) {
        home::Event::Navigate(page) => navigate(ctx, page),
    }
}

/// Handles login page messages.
///
/// A successful login opens the session, returns to the home page with a
/// welcome toast and clears the form.
pub fn handle_login_message(
    ctx: &mut UpdateContext<'_>,
    state: &mut login::State,
    message: login::Message,
) -> Task<Message> {
    match state.update(message) {
        login::Event::None => {}
        login::Event::Notify(notification) => ctx.notify(notification),
        login::Event::Login { is_admin } => {
            ctx.navigator.login(is_admin);
            ctx.navigator.navigate(Page::Home);
            *state = login::State::new();
            let key = if is_admin {
                "notification-welcome-admin"
            } else {
                "notification-welcome-user"
            };
            ctx.notify(Notification::success(key));
        }
    }
    Task::none()
}

/// Handles events page messages.
pub fn handle_events_message(
    ctx: &mut UpdateContext<'_>,
    state: &mut events::State,
    message: events::Message,
) -> Task<Message> {
    let session = ctx.navigator.session();
    if let events::Event::Notify(notification) = state.update(message, session) {
        ctx.notify(notification);
    }
    Task::none()
}

/// Handles classifieds page messages. `today` stamps new classifieds.
pub fn handle_classifieds_message(
    ctx: &mut UpdateContext<'_>,
    state: &mut classifieds::State,
    message: classifieds::Message,
    today: NaiveDate,
) -> Task<Message> {
    let logged_in = ctx.navigator.session().logged_in();
    if let classifieds::Event::Notify(notification) = state.update(message, logged_in, today) {
        ctx.notify(notification);
    }
    Task::none()
}

/// Handles contact page messages.
pub fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    state: &mut contact::State,
    message: contact::Message,
) -> Task<Message> {
    if let contact::Event::Notify(notification) = state.update(message) {
        ctx.notify(notification);
    }
    Task::none()
}

/// Handles admin dashboard messages. Ignored outside an admin session.
pub fn handle_admin_message(
    ctx: &mut UpdateContext<'_>,
    state: &mut admin::State,
    message: admin::Message,
) -> Task<Message> {
    if !ctx.navigator.session().is_admin() {
        tracing::debug!(?message, "admin message without admin session; ignored");
        return Task::none();
    }
    if let admin::Event::Notify(notification) = state.update(message) {
        ctx.notify(notification);
    }
    Task::none()
}

/// Handles brand guide messages: writes the copied value to the clipboard.
pub fn handle_brand_message(
    ctx: &mut UpdateContext<'_>,
    state: &mut brand::State,
    message: brand::Message,
    now: Instant,
) -> Task<Message> {
    match state.update(message, now) {
        brand::Event::Copy { text, notification } => {
            ctx.notify(notification);
            iced::clipboard::write(text)
        }
    }
}

/// Advances every timer: toast expiry and the copied indicator.
pub fn handle_tick(
    ctx: &mut UpdateContext<'_>,
    brand: &mut brand::State,
    now: Instant,
) -> Task<Message> {
    ctx.notifications.tick(now);
    brand.tick(now);
    Task::none()
}

/// Switches between the full and compact header.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    let compact = size.width < COMPACT_LAYOUT_WIDTH;
    if compact != *ctx.compact {
        tracing::debug!(width = size.width, compact, "layout changed");
    }
    *ctx.compact = compact;
    if !compact {
        *ctx.menu_open = false;
    }
    Task::none()
}
