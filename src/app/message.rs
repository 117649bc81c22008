// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::footer;
use crate::ui::header;
use crate::ui::notifications;
use crate::ui::pages::{admin, brand, calendar, classifieds, contact, events, home, login};
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level page messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Footer(footer::Message),
    Home(home::Message),
    Login(login::Message),
    Events(events::Message),
    Calendar(calendar::Message),
    Classifieds(classifieds::Message),
    Contact(contact::Message),
    Admin(admin::Message),
    Brand(brand::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for toast auto-dismiss and the copied indicator.
    Tick(Instant),
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `JAC_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
