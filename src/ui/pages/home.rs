// SPDX-License-Identifier: MPL-2.0
//! Home page: hero band, quick-access cards, featured events and community
//! figures. Every action on this page is a navigation.

use crate::app::screen::Page;
use crate::domain::event::EventRecord;
use crate::domain::seed;
use crate::i18n::fluent::I18n;
use crate::ui::components::{card, image};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Number of events previewed on the home page.
const FEATURED_EVENTS: usize = 3;

/// Quick-access cards as `(glyph, target, title key, description key)`.
const QUICK_ACCESS: [(&str, Page, &str, &str); 4] = [
    ("📅", Page::Events, "nav-events", "home-quick-events"),
    ("🗓", Page::Calendar, "nav-calendar", "home-quick-calendar"),
    ("📰", Page::Classifieds, "nav-classifieds", "home-quick-classifieds"),
    ("✉", Page::Contact, "nav-contact", "home-quick-contact"),
];

/// Community figures as `(value, label key)`. Static, not derived from data.
const COMMUNITY_STATS: [(&str, &str); 4] = [
    ("250+", "home-stat-members"),
    ("48", "home-stat-events"),
    ("120+", "home-stat-classifieds"),
    ("15", "home-stat-years"),
];

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Page),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(Page),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub struct State {
    featured: Vec<EventRecord>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            featured: seed::events().into_iter().take(FEATURED_EVENTS).collect(),
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn featured(&self) -> &[EventRecord] {
        &self.featured
    }

    #[must_use]
    pub fn update(&self, message: &Message) -> Event {
        match message {
            Message::Navigate(page) => Event::Navigate(*page),
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        Column::new()
            .width(Length::Fill)
            .push(hero(i18n))
            .push(
                Column::new()
                    .spacing(spacing::XXL)
                    .padding(spacing::XL)
                    .push(quick_access(i18n))
                    .push(self.featured_section(i18n))
                    .push(community(i18n)),
            )
            .into()
    }

    fn featured_section<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title_row = Row::new()
            .align_y(Vertical::Center)
            .push(
                Text::new(i18n.tr("home-upcoming-title"))
                    .size(typography::TITLE_MD)
                    .style(styles::text::brand),
            )
            .push(Space::new().width(Length::Fill))
            .push(
                button(Text::new(format!("{} →", i18n.tr("home-see-all"))))
                    .on_press(Message::Navigate(Page::Events))
                    .style(styles::button::ghost),
            );

        let cards = self
            .featured
            .iter()
            .map(|record| featured_card(record, i18n))
            .collect();

        Column::new()
            .spacing(spacing::LG)
            .push(title_row)
            .push(card::grid(cards, FEATURED_EVENTS))
            .into()
    }
}

fn hero(i18n: &I18n) -> Element<'_, Message> {
    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new(i18n.tr("home-cta-events")))
                .padding([spacing::SM, spacing::LG])
                .on_press(Message::Navigate(Page::Events))
                .style(styles::button::secondary),
        )
        .push(
            button(Text::new(i18n.tr("home-cta-classifieds")))
                .padding([spacing::SM, spacing::LG])
                .on_press(Message::Navigate(Page::Classifieds))
                .style(styles::button::outline),
        );

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .max_width(800.0)
        .push(Text::new(i18n.tr("home-hero-title")).size(typography::DISPLAY))
        .push(Text::new(i18n.tr("home-hero-body")).size(typography::BODY_LG))
        .push(actions);

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXL * 1.5, spacing::XL])
        .align_x(Horizontal::Center)
        .style(styles::container::hero)
        .into()
}

fn quick_access(i18n: &I18n) -> Element<'_, Message> {
    let cards = QUICK_ACCESS
        .iter()
        .map(|(glyph, page, title, description)| {
            let content = Column::new()
                .spacing(spacing::SM)
                .push(Text::new(*glyph).size(typography::TITLE_LG))
                .push(Text::new(i18n.tr(title)).size(typography::TITLE_SM))
                .push(
                    Text::new(i18n.tr(description))
                        .size(typography::BODY)
                        .style(styles::text::muted),
                )
                .push(
                    button(Text::new(format!("{} →", i18n.tr("home-access"))))
                        .on_press(Message::Navigate(*page))
                        .style(styles::button::ghost),
                );
            card::card(content).into()
        })
        .collect();

    Column::new()
        .spacing(spacing::LG)
        .push(
            Text::new(i18n.tr("home-quick-title"))
                .size(typography::TITLE_MD)
                .style(styles::text::brand),
        )
        .push(card::grid(cards, QUICK_ACCESS.len()))
        .into()
}

fn featured_card<'a>(record: &'a EventRecord, i18n: &'a I18n) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(record.title.as_str()).size(typography::TITLE_SM))
        .push(
            Text::new(format!("📅 {} · {}", record.date, record.time))
                .size(typography::BODY)
                .style(styles::text::muted),
        )
        .push(
            Text::new(format!("📍 {}", record.location))
                .size(typography::BODY)
                .style(styles::text::muted),
        )
        .push(
            button(Text::new(i18n.tr("home-more-info")).center())
                .width(Length::Fill)
                .on_press(Message::Navigate(Page::Events))
                .style(styles::button::primary),
        );

    Container::new(
        Column::new()
            .push(image::image_with_fallback(
                &record.image,
                &record.title,
                sizing::CARD_IMAGE_HEIGHT,
            ))
            .push(Container::new(body).padding(spacing::MD)),
    )
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn community(i18n: &I18n) -> Element<'_, Message> {
    let stats = COMMUNITY_STATS
        .iter()
        .map(|(value, label)| {
            Column::new()
                .spacing(spacing::XXS)
                .align_x(Horizontal::Center)
                .width(Length::Fill)
                .push(
                    Text::new(*value)
                        .size(typography::DISPLAY)
                        .style(styles::text::brand),
                )
                .push(
                    Text::new(i18n.tr(label))
                        .size(typography::BODY)
                        .style(styles::text::muted),
                )
                .into()
        })
        .collect();

    card::card(
        Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .push(Text::new(i18n.tr("home-community-title")).size(typography::TITLE_MD))
            .push(card::grid(stats, COMMUNITY_STATS.len())),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_the_first_three_events() {
        let state = State::new();
        let titles: Vec<&str> = state.featured().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Jornada de Limpieza Comunitaria",
                "Reunión Mensual de Vecinos",
                "Festival Cultural Comunitario",
            ]
        );
    }

    #[test]
    fn every_action_is_a_navigation() {
        let state = State::new();
        assert_eq!(
            state.update(&Message::Navigate(Page::Classifieds)),
            Event::Navigate(Page::Classifieds)
        );
    }

    #[test]
    fn quick_access_never_targets_admin() {
        assert!(QUICK_ACCESS.iter().all(|(_, page, _, _)| *page != Page::Admin));
    }
}
