// SPDX-License-Identifier: MPL-2.0
//! Admin dashboard: stat cards and the users, events and classifieds
//! tables.
//!
//! The dashboard works on its own copies of the records. Deleting a user or
//! an event here, or moderating a classified, never affects the public
//! pages.

use crate::domain::admin::{
    self, AdminEventRow, AdminStats, ModerationRow, ModerationStatus, UserRow, UserStatus,
};
use crate::domain::{seed, RecordId, RecordStore};
use crate::i18n::fluent::I18n;
use crate::ui::components::table::{self, TableColumn};
use crate::ui::components::{badge, card, tabs};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use iced::widget::{button, Column, Row, Text};
use iced::{Color, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Users,
    Events,
    Classifieds,
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(AdminTab),
    DeleteUser(RecordId),
    DeleteEvent(RecordId),
    Approve(RecordId),
    Reject(RecordId),
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Notify(Notification),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub struct State {
    tab: AdminTab,
    users: RecordStore<UserRow>,
    events: RecordStore<AdminEventRow>,
    classifieds: RecordStore<ModerationRow>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            tab: AdminTab::default(),
            users: RecordStore::from_seed(seed::admin_users()),
            events: RecordStore::from_seed(seed::admin_events()),
            classifieds: RecordStore::from_seed(seed::admin_classifieds()),
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tab(&self) -> AdminTab {
        self.tab
    }

    /// Returns to the first tab.
    pub fn reset_tab(&mut self) {
        self.tab = AdminTab::default();
    }

    #[must_use]
    pub fn users(&self) -> &RecordStore<UserRow> {
        &self.users
    }

    #[must_use]
    pub fn events(&self) -> &RecordStore<AdminEventRow> {
        &self.events
    }

    #[must_use]
    pub fn classifieds(&self) -> &RecordStore<ModerationRow> {
        &self.classifieds
    }

    #[must_use]
    pub fn stats(&self) -> AdminStats {
        AdminStats::from_tables(&self.users, &self.events, &self.classifieds)
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::TabSelected(tab) => {
                self.tab = tab;
                Event::None
            }
            Message::DeleteUser(id) => notify_if(
                self.users.remove(id).is_some(),
                "notification-user-deleted",
                id,
            ),
            Message::DeleteEvent(id) => notify_if(
                self.events.remove(id).is_some(),
                "notification-event-deleted",
                id,
            ),
            Message::Approve(id) => notify_if(
                admin::approve(&mut self.classifieds, id),
                "notification-classified-approved",
                id,
            ),
            Message::Reject(id) => notify_if(
                admin::reject(&mut self.classifieds, id).is_some(),
                "notification-classified-rejected",
                id,
            ),
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let (title_key, subtitle_key, table) = match self.tab {
            AdminTab::Users => (
                "admin-users-title",
                "admin-users-subtitle",
                self.users_table(i18n),
            ),
            AdminTab::Events => (
                "admin-events-title",
                "admin-events-subtitle",
                self.events_table(i18n),
            ),
            AdminTab::Classifieds => (
                "admin-classifieds-title",
                "admin-classifieds-subtitle",
                self.classifieds_table(i18n),
            ),
        };

        let table_card = Column::new()
            .spacing(spacing::MD)
            .push(card::heading(
                i18n.tr(title_key),
                i18n.tr(subtitle_key),
                typography::TITLE_SM,
            ))
            .push(table);

        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::XL)
            .width(Length::Fill)
            .push(card::page_heading(
                i18n.tr("admin-title"),
                i18n.tr("admin-subtitle"),
            ))
            .push(stat_cards(self.stats(), i18n))
            .push(tabs::tabs(
                vec![
                    (AdminTab::Users, i18n.tr("admin-tab-users")),
                    (AdminTab::Events, i18n.tr("admin-tab-events")),
                    (AdminTab::Classifieds, i18n.tr("admin-tab-classifieds")),
                ],
                self.tab,
                Message::TabSelected,
            ))
            .push(card::card(table_card))
            .into()
    }

    fn users_table<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let columns = [
            TableColumn::new(i18n.tr("admin-column-name"), 3),
            TableColumn::new(i18n.tr("admin-column-email"), 3),
            TableColumn::new(i18n.tr("admin-column-role"), 2),
            TableColumn::new(i18n.tr("admin-column-status"), 2),
            TableColumn::new(i18n.tr("admin-column-joined"), 2),
            TableColumn::new(i18n.tr("admin-column-actions"), 2),
        ];
        let rows = self
            .users
            .iter()
            .map(|user| {
                vec![
                    table::text_cell(user.name.as_str()),
                    table::text_cell(user.email.as_str()),
                    table::text_cell(user.role.as_str()),
                    badge::badge(user.status.as_str(), user_status_color(user.status)),
                    table::text_cell(user.joined.as_str()),
                    delete_button(Message::DeleteUser(user.id)),
                ]
            })
            .collect();
        table::table(&columns, rows)
    }

    fn events_table<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let columns = [
            TableColumn::new(i18n.tr("admin-column-title"), 4),
            TableColumn::new(i18n.tr("admin-column-date"), 2),
            TableColumn::new(i18n.tr("admin-column-attendees"), 2),
            TableColumn::new(i18n.tr("admin-column-status"), 2),
            TableColumn::new(i18n.tr("admin-column-actions"), 2),
        ];
        let rows = self
            .events
            .iter()
            .map(|event| {
                vec![
                    table::text_cell(event.title.as_str()),
                    table::text_cell(event.date.as_str()),
                    table::text_cell(event.attendees.to_string()),
                    badge::badge(event.status.as_str(), palette::BRAND_BLUE),
                    delete_button(Message::DeleteEvent(event.id)),
                ]
            })
            .collect();
        table::table(&columns, rows)
    }

    fn classifieds_table<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let columns = [
            TableColumn::new(i18n.tr("admin-column-title"), 3),
            TableColumn::new(i18n.tr("admin-column-author"), 2),
            TableColumn::new(i18n.tr("admin-column-category"), 2),
            TableColumn::new(i18n.tr("admin-column-date"), 2),
            TableColumn::new(i18n.tr("admin-column-status"), 2),
            TableColumn::new(i18n.tr("admin-column-actions"), 3),
        ];
        let rows = self
            .classifieds
            .iter()
            .map(|row| {
                let mut actions = Row::new().spacing(spacing::XXS);
                if row.status == ModerationStatus::Pendiente {
                    actions = actions.push(
                        button(Text::new("✓"))
                            .on_press(Message::Approve(row.id))
                            .style(styles::button::primary),
                    );
                }
                actions = actions.push(
                    button(Text::new("✕"))
                        .on_press(Message::Reject(row.id))
                        .style(styles::button::danger),
                );
                vec![
                    table::text_cell(row.title.as_str()),
                    table::text_cell(row.author.as_str()),
                    table::text_cell(row.category.as_str()),
                    table::text_cell(row.date.as_str()),
                    badge::badge(row.status.as_str(), moderation_color(row.status)),
                    actions.into(),
                ]
            })
            .collect();
        table::table(&columns, rows)
    }
}

fn notify_if(changed: bool, key: &str, id: RecordId) -> Event {
    if changed {
        tracing::info!(id = %id, action = key, "admin table changed");
        Event::Notify(Notification::success(key))
    } else {
        tracing::debug!(id = %id, action = key, "no matching row");
        Event::None
    }
}

fn user_status_color(status: UserStatus) -> Color {
    match status {
        UserStatus::Activo => palette::SUCCESS_500,
        UserStatus::Inactivo => palette::GRAY_500,
    }
}

fn moderation_color(status: ModerationStatus) -> Color {
    match status {
        ModerationStatus::Pendiente => palette::WARNING_500,
        ModerationStatus::Aprobado => palette::SUCCESS_500,
    }
}

fn delete_button<'a>(message: Message) -> Element<'a, Message> {
    button(Text::new("🗑"))
        .on_press(message)
        .style(styles::button::danger)
        .into()
}

fn stat_cards(stats: AdminStats, i18n: &I18n) -> Element<'_, Message> {
    let participation = format!("{}%", stats.participation_percent);
    let figures = [
        ("admin-stat-users", stats.users.to_string(), "+12%"),
        ("admin-stat-events", stats.events.to_string(), "+8%"),
        ("admin-stat-classifieds", stats.classifieds.to_string(), "+15%"),
        ("admin-stat-participation", participation, "+5%"),
    ];

    let cards = figures
        .into_iter()
        .map(|(label, value, change)| {
            card::card(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(
                        Text::new(i18n.tr(label))
                            .size(typography::BODY)
                            .style(styles::text::muted),
                    )
                    .push(
                        Text::new(value)
                            .size(typography::TITLE_LG)
                            .style(styles::text::brand),
                    )
                    .push(
                        Text::new(i18n.tr_with_args("admin-stat-change", &[("change", change)]))
                            .size(typography::CAPTION)
                            .style(styles::text::success),
                    ),
            )
            .into()
        })
        .collect();

    card::grid(cards, 4)
}
