// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a header above a scrollable column holding the current
//! page and the footer. Open page dialogs and the toast overlay are stacked
//! over the whole window.

use super::navigator::Session;
use super::{Message, Page};
use crate::i18n::fluent::I18n;
use crate::ui::components::dialog;
use crate::ui::footer;
use crate::ui::header;
use crate::ui::notifications::{self, Toast};
use crate::ui::pages::{admin, brand, calendar, classifieds, contact, events, home, login};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use chrono::NaiveDateTime;
use iced::widget::{scrollable, Column, Container, Stack};
use iced::{Element, Length};

/// Page states borrowed for rendering.
pub struct Pages<'a> {
    pub home: &'a home::State,
    pub login: &'a login::State,
    pub events: &'a events::State,
    pub calendar: &'a calendar::State,
    pub classifieds: &'a classifieds::State,
    pub contact: &'a contact::State,
    pub admin: &'a admin::State,
    pub brand: &'a brand::State,
}

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Already resolved: never `Admin` for a non-admin session.
    pub page: Page,
    pub session: Session,
    pub theme_mode: ThemeMode,
    pub compact: bool,
    pub menu_open: bool,
    pub now: NaiveDateTime,
    pub pages: Pages<'a>,
    pub notifications: &'a notifications::Manager,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let header = header::view(header::ViewContext {
        i18n,
        current_page: ctx.page,
        session: ctx.session,
        theme_mode: ctx.theme_mode,
        compact: ctx.compact,
        menu_open: ctx.menu_open,
    })
    .map(Message::Header);

    let footer = footer::view(footer::ViewContext { i18n }).map(Message::Footer);

    let body = scrollable(
        Column::new()
            .width(Length::Fill)
            .push(view_page(&ctx))
            .push(footer),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let base = Container::new(Column::new().push(header).push(body))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    let with_dialog = match view_dialog(&ctx) {
        Some((content, on_close)) => dialog::modal(base, content, on_close),
        None => base.into(),
    };

    let toasts = Toast::view_overlay(ctx.notifications, i18n).map(Message::Notification);

    Stack::new().push(with_dialog).push(toasts).into()
}

fn view_page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let pages = &ctx.pages;

    match ctx.page {
        Page::Home => pages.home.view(home::ViewContext { i18n }).map(Message::Home),
        Page::Login => pages
            .login
            .view(login::ViewContext { i18n })
            .map(Message::Login),
        Page::Events => pages
            .events
            .view(events::ViewContext {
                i18n,
                session: ctx.session,
            })
            .map(Message::Events),
        Page::Calendar => pages
            .calendar
            .view(calendar::ViewContext { i18n, now: ctx.now })
            .map(Message::Calendar),
        Page::Classifieds => pages
            .classifieds
            .view(classifieds::ViewContext {
                i18n,
                logged_in: ctx.session.logged_in(),
            })
            .map(Message::Classifieds),
        Page::Contact => pages
            .contact
            .view(contact::ViewContext { i18n })
            .map(Message::Contact),
        Page::Admin => pages
            .admin
            .view(admin::ViewContext { i18n })
            .map(Message::Admin),
        Page::Brand => pages
            .brand
            .view(brand::ViewContext {
                i18n,
                theme_mode: ctx.theme_mode,
            })
            .map(Message::Brand),
    }
}

/// The open dialog of the current page, with the message that closes it.
fn view_dialog<'a>(ctx: &ViewContext<'a>) -> Option<(Element<'a, Message>, Message)> {
    match ctx.page {
        Page::Events => ctx.pages.events.dialog_view(ctx.i18n).map(|content| {
            (
                content.map(Message::Events),
                Message::Events(events::Message::CloseDialog),
            )
        }),
        Page::Classifieds => ctx.pages.classifieds.dialog_view(ctx.i18n).map(|content| {
            (
                content.map(Message::Classifieds),
                Message::Classifieds(classifieds::Message::CloseDialog),
            )
        }),
        _ => None,
    }
}
