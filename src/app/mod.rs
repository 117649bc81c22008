// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the pages.
//!
//! The `App` struct owns the navigator (current page and session), the theme
//! store, the toast manager and the state of every page. Pages return events
//! and the handlers in [`update`] translate them into navigation, session
//! changes, toasts or clipboard writes.

mod message;
pub mod navigator;
pub mod paths;
pub mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use navigator::{Navigator, Session};
pub use screen::Page;

use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::pages::{admin, brand, calendar, classifieds, contact, events, home, login};
use crate::ui::theming::ThemeStore;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    navigator: Navigator,
    theme: ThemeStore,
    notifications: notifications::Manager,
    home: home::State,
    login: login::State,
    events: events::State,
    calendar: calendar::State,
    classifieds: classifieds::State,
    contact: contact::State,
    admin: admin::State,
    brand: brand::State,
    /// Whether the compact header dropdown is open.
    menu_open: bool,
    /// Whether the window is narrower than `COMPACT_LAYOUT_WIDTH`.
    compact: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("page", &self.navigator.current_page())
            .field("session", &self.navigator.session())
            .field("theme", &self.theme.mode())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Local date and time used for calendar projections and date stamps.
fn local_now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}

impl App {
    /// Builds the application with the theme loaded from `settings.toml`.
    ///
    /// A corrupt settings file does not block startup: defaults are used and
    /// a warning toast is queued.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (theme, warning) = ThemeStore::load(flags.config_dir.map(PathBuf::from));
        let mut app = Self::with_theme(theme, local_now().date());
        if let Some(key) = warning {
            app.notifications.push(Notification::warning(key));
        }
        tracing::info!(theme = ?app.theme.mode(), "application started");
        (app, Task::none())
    }

    fn with_theme(theme: ThemeStore, today: chrono::NaiveDate) -> Self {
        Self {
            i18n: I18n::new(),
            navigator: Navigator::new(),
            theme,
            notifications: notifications::Manager::new(),
            home: home::State::new(),
            login: login::State::new(),
            events: events::State::new(),
            calendar: calendar::State::new(today),
            classifieds: classifieds::State::new(),
            contact: contact::State::new(),
            admin: admin::State::new(),
            brand: brand::State::new(),
            menu_open: false,
            compact: false,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-name");
        match self.navigator.resolved_page() {
            Page::Home => app_name,
            page => format!("{} - {app_name}", self.i18n.tr(page.label_key())),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let window_sub = subscription::create_window_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.notifications.has_notifications(),
            self.brand.has_pending_indicator(),
        );
        Subscription::batch([window_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let before = self.navigator.session();
        let task = self.dispatch(message);
        let after = self.navigator.session();
        if after != before {
            self.discard_privileged_state(before, after);
        }
        task
    }

    /// Drops page state opened under a session that no longer holds.
    fn discard_privileged_state(&mut self, before: Session, after: Session) {
        if before.is_admin() && !after.is_admin() {
            self.events.close_dialog();
            self.admin.reset_tab();
        }
        if before.logged_in() && !after.logged_in() {
            self.classifieds.close_dialog();
        }
        tracing::debug!(?before, ?after, "session changed");
    }

    fn dispatch(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            navigator: &mut self.navigator,
            theme: &mut self.theme,
            notifications: &mut self.notifications,
            menu_open: &mut self.menu_open,
            compact: &mut self.compact,
        };

        match message {
            Message::Header(message) => update::handle_header_message(&mut ctx, message),
            Message::Footer(message) => update::handle_footer_message(&mut ctx, &message),
            Message::Home(message) => update::handle_home_message(&mut ctx, &self.home, &message),
            Message::Login(message) => {
                update::handle_login_message(&mut ctx, &mut self.login, message)
            }
            Message::Events(message) => {
                update::handle_events_message(&mut ctx, &mut self.events, message)
            }
            Message::Calendar(message) => {
                self.calendar.update(message);
                Task::none()
            }
            Message::Classifieds(message) => update::handle_classifieds_message(
                &mut ctx,
                &mut self.classifieds,
                message,
                local_now().date(),
            ),
            Message::Contact(message) => {
                update::handle_contact_message(&mut ctx, &mut self.contact, message)
            }
            Message::Admin(message) => {
                update::handle_admin_message(&mut ctx, &mut self.admin, message)
            }
            Message::Brand(message) => {
                update::handle_brand_message(&mut ctx, &mut self.brand, message, Instant::now())
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, &mut self.brand, now),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            page: self.navigator.resolved_page(),
            session: self.navigator.session(),
            theme_mode: self.theme.mode(),
            compact: self.compact,
            menu_open: self.menu_open,
            now: local_now(),
            pages: view::Pages {
                home: &self.home,
                login: &self.login,
                events: &self.events,
                calendar: &self.calendar,
                classifieds: &self.classifieds,
                contact: &self.contact,
                admin: &self.admin,
                brand: &self.brand,
            },
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::ui::header;
    use crate::ui::pages::brand::CopyKind;
    use crate::ui::theming::ThemeMode;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn app_in(dir: &std::path::Path) -> App {
        let theme = ThemeStore::new(Some(ThemeMode::Light), Some(dir.to_path_buf()));
        App::with_theme(theme, NaiveDate::from_ymd_opt(2025, 10, 24).unwrap())
    }

    fn login(app: &mut App, is_admin: bool) {
        let tab = if is_admin {
            login::Tab::Admin
        } else {
            login::Tab::UserLogin
        };
        for message in [
            login::Message::TabSelected(tab),
            login::Message::FieldChanged(login::Field::Email, "ana@email.com".into()),
            login::Message::FieldChanged(login::Field::Password, "secreto".into()),
            login::Message::Submit,
        ] {
            let _ = app.update(Message::Login(message));
        }
    }

    #[test]
    fn starts_on_home_logged_out() {
        let dir = tempdir().expect("temp dir");
        let app = app_in(dir.path());
        assert_eq!(app.navigator.resolved_page(), Page::Home);
        assert!(!app.navigator.session().logged_in());
        assert_eq!(app.title(), app.i18n.tr("app-name"));
    }

    #[test]
    fn admin_login_welcomes_and_unlocks_dashboard() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_in(dir.path());
        let _ = app.update(Message::Header(header::Message::Navigate(Page::Login)));

        login(&mut app, true);

        assert!(app.navigator.session().is_admin());
        assert_eq!(app.navigator.current_page(), Page::Home);
        assert!(app
            .notifications
            .visible()
            .any(|n| n.message_key() == "notification-welcome-admin"));

        let _ = app.update(Message::Header(header::Message::Navigate(Page::Admin)));
        assert_eq!(app.navigator.resolved_page(), Page::Admin);
    }

    #[test]
    fn admin_messages_are_ignored_for_regular_users() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_in(dir.path());
        login(&mut app, false);

        let _ = app.update(Message::Admin(admin::Message::DeleteUser(
            crate::domain::RecordId::new(1),
        )));
        assert_eq!(app.admin.users().len(), 4);
    }

    #[test]
    fn logout_from_header_returns_home() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_in(dir.path());
        login(&mut app, true);
        let _ = app.update(Message::Header(header::Message::Navigate(Page::Admin)));

        let _ = app.update(Message::Header(header::Message::Logout));

        assert_eq!(app.navigator.current_page(), Page::Home);
        assert!(!app.navigator.session().logged_in());
    }

    #[test]
    fn logout_discards_dialogs_opened_while_signed_in() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_in(dir.path());
        login(&mut app, true);
        let _ = app.update(Message::Events(events::Message::OpenCreate));
        let _ = app.update(Message::Classifieds(classifieds::Message::OpenDialog));
        let _ = app.update(Message::Admin(admin::Message::TabSelected(
            admin::AdminTab::Classifieds,
        )));
        assert!(app.events.draft().is_some());
        assert!(app.classifieds.draft().is_some());

        let _ = app.update(Message::Header(header::Message::Logout));
        let _ = app.update(Message::Header(header::Message::Navigate(Page::Events)));

        assert!(app.events.draft().is_none());
        assert!(app.classifieds.draft().is_none());
        assert_eq!(app.admin.tab(), admin::AdminTab::Users);
    }

    #[test]
    fn regular_login_after_admin_closes_event_dialog() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_in(dir.path());
        login(&mut app, true);
        let _ = app.update(Message::Events(events::Message::OpenCreate));
        let _ = app.update(Message::Classifieds(classifieds::Message::OpenDialog));

        login(&mut app, false);

        assert!(!app.navigator.session().is_admin());
        assert!(app.events.draft().is_none());
        assert!(app.classifieds.draft().is_some());
    }

    #[test]
    fn theme_toggle_is_persisted() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_in(dir.path());

        let _ = app.update(Message::Header(header::Message::ToggleTheme));

        assert_eq!(app.theme(), Theme::Dark);
        let (reloaded, warning) = ThemeStore::load(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(reloaded.mode(), ThemeMode::Dark);
    }

    #[test]
    fn copy_shows_toast_and_indicator_until_tick() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_in(dir.path());

        let _ = app.update(Message::Brand(brand::Message::Copy {
            text: "#007B3E".into(),
            kind: CopyKind::Hex,
        }));
        assert!(app.brand.has_pending_indicator());
        assert_eq!(app.notifications.visible_count(), 1);

        let later = Instant::now() + std::time::Duration::from_millis(
            config::COPIED_INDICATOR_RESET_MS + config::SUCCESS_TOAST_SECS * 1000,
        );
        let _ = app.update(Message::Tick(later));
        assert!(!app.brand.has_pending_indicator());
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn narrow_window_switches_to_compact_header() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_in(dir.path());

        let _ = app.update(Message::WindowResized(iced::Size::new(600.0, 800.0)));
        assert!(app.compact);
        let _ = app.update(Message::Header(header::Message::ToggleMenu));
        assert!(app.menu_open);

        let _ = app.update(Message::WindowResized(iced::Size::new(1200.0, 800.0)));
        assert!(!app.compact);
        assert!(!app.menu_open);
    }
}
