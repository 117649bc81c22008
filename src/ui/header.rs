// SPDX-License-Identifier: MPL-2.0
//! Top bar shown above every page.
//!
//! Holds the brand mark, the page links, the theme toggle and the session
//! buttons. Below [`crate::config::COMPACT_LAYOUT_WIDTH`] the links collapse
//! into a menu button with a dropdown.

use crate::app::navigator::Session;
use crate::app::screen::Page;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Pages linked from the header, in display order.
pub const NAV_PAGES: [Page; 5] = [
    Page::Home,
    Page::Events,
    Page::Calendar,
    Page::Classifieds,
    Page::Contact,
];

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current_page: Page,
    pub session: Session,
    pub theme_mode: ThemeMode,
    /// Narrow window: links live in the dropdown.
    pub compact: bool,
    pub menu_open: bool,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Page),
    ToggleMenu,
    ToggleTheme,
    Logout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Page),
    ToggleTheme,
    Logout,
}

/// Process a header message and return the corresponding event.
///
/// Any action taken from the dropdown closes it.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::Navigate(page) => {
            *menu_open = false;
            Event::Navigate(page)
        }
        Message::ToggleTheme => Event::ToggleTheme,
        Message::Logout => {
            *menu_open = false;
            Event::Logout
        }
    }
}

/// Render the header.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut bar = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::LG])
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .align_y(Vertical::Center)
        .push(brand_mark(&ctx))
        .push(Space::new().width(Length::Fill));

    if ctx.compact {
        bar = bar.push(theme_toggle(&ctx)).push(
            button(Text::new("☰").size(typography::TITLE_SM))
                .on_press(Message::ToggleMenu)
                .style(styles::button::ghost),
        );
    } else {
        bar = bar
            .push(nav_links(&ctx, Row::new().spacing(spacing::XXS)))
            .push(theme_toggle(&ctx))
            .push(session_buttons(&ctx, Row::new().spacing(spacing::XS)));
    }

    let mut content = Column::new().width(Length::Fill).push(bar);

    if ctx.compact && ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    Container::new(content)
        .width(Length::Fill)
        .style(styles::container::header)
        .into()
}

fn brand_mark<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let logo = Container::new(Text::new("JAC").size(typography::BODY))
        .width(Length::Fixed(sizing::LOGO_SM))
        .height(Length::Fixed(sizing::LOGO_SM))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::filled(palette::BRAND_GREEN));

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(logo)
        .push(
            Text::new(ctx.i18n.tr("app-name"))
                .size(typography::TITLE_SM)
                .style(styles::text::brand),
        );

    button(row)
        .padding(0.0)
        .on_press(Message::Navigate(Page::Home))
        .style(styles::button::ghost)
        .into()
}

/// Pushes one button per [`NAV_PAGES`] entry into any row or column.
fn nav_links<'a, C>(ctx: &ViewContext<'a>, container: C) -> C
where
    C: Pushable<'a>,
{
    NAV_PAGES.iter().fold(container, |container, page| {
        container.push_element(
            button(Text::new(ctx.i18n.tr(page.label_key())).size(typography::BODY))
                .padding([spacing::XS, spacing::SM])
                .on_press(Message::Navigate(*page))
                .style(styles::button::nav_item(ctx.current_page == *page))
                .into(),
        )
    })
}

fn session_buttons<'a, C>(ctx: &ViewContext<'a>, container: C) -> C
where
    C: Pushable<'a>,
{
    if ctx.session.logged_in() {
        let container = if ctx.session.is_admin() {
            container.push_element(
                button(Text::new(ctx.i18n.tr("header-admin-panel")).size(typography::BODY))
                    .on_press(Message::Navigate(Page::Admin))
                    .style(styles::button::nav_item(ctx.current_page == Page::Admin))
                    .into(),
            )
        } else {
            container
        };
        container.push_element(
            button(Text::new(ctx.i18n.tr("header-logout")).size(typography::BODY))
                .on_press(Message::Logout)
                .style(styles::button::outline)
                .into(),
        )
    } else {
        container.push_element(
            button(Text::new(ctx.i18n.tr("header-login")).size(typography::BODY))
                .on_press(Message::Navigate(Page::Login))
                .style(styles::button::primary)
                .into(),
        )
    }
}

fn theme_toggle<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let glyph = if ctx.theme_mode.is_dark() { "☀" } else { "🌙" };
    button(Text::new(glyph).size(typography::BODY_LG))
        .on_press(Message::ToggleTheme)
        .style(styles::button::ghost)
        .into()
}

/// Dropdown used in compact mode.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::XXS)
        .padding([spacing::XS, spacing::LG])
        .width(Length::Fill);
    let column = nav_links(ctx, column);
    let column = session_buttons(ctx, column);
    column.into()
}

/// Lets the link builders fill both the wide row and the dropdown column.
trait Pushable<'a> {
    fn push_element(self, element: Element<'a, Message>) -> Self;
}

impl<'a> Pushable<'a> for Row<'a, Message> {
    fn push_element(self, element: Element<'a, Message>) -> Self {
        self.push(element)
    }
}

impl<'a> Pushable<'a> for Column<'a, Message> {
    fn push_element(self, element: Element<'a, Message>) -> Self {
        self.push(element)
    }
}
