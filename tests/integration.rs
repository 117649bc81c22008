// SPDX-License-Identifier: MPL-2.0
use chrono::NaiveDate;
use jac_community::app::{Navigator, Page};
use jac_community::config::{self, Config, GeneralConfig, CONFIG_LOAD_WARNING_KEY};
use jac_community::domain::calendar::{self, MonthCursor};
use jac_community::domain::classified::{filter_classifieds, Category, CategoryFilter};
use jac_community::domain::{seed, RecordId};
use jac_community::i18n::fluent::I18n;
use jac_community::ui::pages::{classifieds, events};
use jac_community::ui::theming::{ThemeMode, ThemeStore};
use std::fs;
use tempfile::tempdir;

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn admin_page_is_unreachable_without_admin_session() {
    let mut nav = Navigator::new();

    assert!(!nav.navigate(Page::Admin));
    assert_eq!(nav.resolved_page(), Page::Home);

    nav.login(false);
    assert!(!nav.navigate(Page::Admin));
    assert_eq!(nav.resolved_page(), Page::Home);

    nav.logout();
    nav.login(true);
    assert!(nav.navigate(Page::Admin));
    assert_eq!(nav.resolved_page(), Page::Admin);

    nav.logout();
    assert_eq!(nav.current_page(), Page::Home);
    assert!(!nav.session().logged_in());
}

#[test]
fn published_classified_is_listed_first_and_filterable() {
    let mut page = classifieds::State::new();
    let today = day(2025, 10, 24);

    for message in [
        classifieds::Message::OpenDialog,
        classifieds::Message::FieldChanged(classifieds::Field::Title, "Vendo Sofá".into()),
        classifieds::Message::FieldChanged(
            classifieds::Field::Description,
            "Sofá de tres puestos en buen estado".into(),
        ),
        classifieds::Message::CategorySelected(Category::Venta),
        classifieds::Message::FieldChanged(classifieds::Field::Contact, "+57 311 000 0000".into()),
        classifieds::Message::FieldChanged(classifieds::Field::Email, "sofa@email.com".into()),
    ] {
        let _ = page.update(message, true, today);
    }
    let event = page.update(classifieds::Message::Submit, true, today);

    assert!(matches!(event, classifieds::Event::Notify(_)));
    assert!(page.draft().is_none());
    let first = page.records().iter().next().expect("records");
    assert_eq!(first.title, "Vendo Sofá");
    assert_eq!(first.id, RecordId::new(4));
    assert_eq!(first.author, config::DEFAULT_CLASSIFIED_AUTHOR);
    assert_eq!(first.date, "24 de octubre de 2025");

    let ventas = filter_classifieds(
        page.records().as_slice(),
        "SOFÁ",
        CategoryFilter::Only(Category::Venta),
    );
    assert_eq!(ventas.len(), 1);
    assert!(filter_classifieds(
        page.records().as_slice(),
        "sofá",
        CategoryFilter::Only(Category::Servicios)
    )
    .is_empty());
}

#[test]
fn classified_submission_requires_session() {
    let mut page = classifieds::State::new();
    let today = day(2025, 10, 24);

    let _ = page.update(classifieds::Message::OpenDialog, false, today);
    let event = page.update(classifieds::Message::Submit, false, today);

    assert!(page.draft().is_none());
    assert!(matches!(event, classifieds::Event::None));
    assert_eq!(page.records().len(), seed::classifieds().len());
}

#[test]
fn deleting_an_event_keeps_the_others_in_order() {
    let mut nav = Navigator::new();
    nav.login(true);
    let mut page = events::State::new();

    let _ = page.update(events::Message::Delete(RecordId::new(2)), nav.session());

    let titles: Vec<&str> = page.events().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        ["Jornada de Limpieza Comunitaria", "Festival Cultural Comunitario"]
    );
}

#[test]
fn new_event_ids_are_never_reused() {
    let mut nav = Navigator::new();
    nav.login(true);
    let session = nav.session();
    let mut page = events::State::new();

    let _ = page.update(events::Message::Delete(RecordId::new(3)), session);
    let _ = page.update(events::Message::OpenCreate, session);
    for (field, value) in [
        (events::Field::Title, "Bazar Navideño"),
        (events::Field::Description, "Venta de productos locales"),
        (events::Field::Date, "13 de Diciembre, 2025"),
        (events::Field::Time, "9:00 AM"),
        (events::Field::Location, "Salón Comunal"),
    ] {
        let _ = page.update(events::Message::FieldChanged(field, value.into()), session);
    }
    let _ = page.update(events::Message::Submit, session);

    let last = page.events().iter().last().expect("events");
    assert_eq!(last.title, "Bazar Navideño");
    assert_eq!(last.id, RecordId::new(4));
    assert_eq!(last.attendees, 0);
}

#[test]
fn calendar_projections_follow_the_clock() {
    let events = seed::calendar_events();
    let now = day(2025, 11, 1).and_hms_opt(12, 0, 0).expect("valid time");

    let upcoming = calendar::upcoming(&events, now, config::UPCOMING_EVENTS_LIMIT);
    assert_eq!(upcoming.len(), 4);
    assert_eq!(upcoming[0].title, "Reunión Mensual de Vecinos");

    let november = MonthCursor::new(2025, 11).expect("valid month");
    assert_eq!(calendar::in_month(&events, november).len(), 4);
    assert_eq!(calendar::in_month(&events, november.previous()).len(), 1);

    assert_eq!(
        calendar::count_within(&events, now, config::UPCOMING_WINDOW_DAYS),
        4
    );
}

#[test]
fn theme_choice_survives_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut store = ThemeStore::new(Some(ThemeMode::Light), Some(dir.path().to_path_buf()));
    store.toggle().expect("Failed to persist theme");

    let (reloaded, warning) = ThemeStore::load(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(reloaded.mode(), ThemeMode::Dark);

    let saved = config::load_from_path(&dir.path().join("settings.toml"))
        .expect("Failed to load saved config");
    assert_eq!(
        saved,
        Config {
            general: GeneralConfig {
                theme: Some(ThemeMode::Dark),
            },
        }
    );
}

#[test]
fn corrupt_settings_fall_back_with_a_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "general = [").expect("write settings");

    let (store, warning) = ThemeStore::load(Some(dir.path().to_path_buf()));

    assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING_KEY));
    assert_eq!(store.mode(), ThemeMode::from_system());
}

#[test]
fn every_notification_key_is_translated() {
    let i18n = I18n::new();
    for key in [
        "notification-welcome-admin",
        "notification-event-created",
        "notification-classified-published",
        "notification-config-load-error",
        "notification-config-save-error",
    ] {
        assert!(
            !i18n.tr(key).starts_with("MISSING"),
            "missing translation for {key}"
        );
    }
}
