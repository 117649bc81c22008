// SPDX-License-Identifier: MPL-2.0
//! Footer band with the about blurb, quick links, contact details and the
//! copyright line.

use crate::app::screen::Page;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, rule, Column, Container, Row, Text},
    Element, Length,
};

/// Quick links and the labels they use.
const QUICK_LINKS: [(Page, &str); 5] = [
    (Page::Events, "nav-events"),
    (Page::Calendar, "nav-calendar"),
    (Page::Classifieds, "nav-classifieds"),
    (Page::Contact, "nav-contact"),
    (Page::Brand, "footer-brand-guide"),
];

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Page),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(Page),
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Navigate(page) => Event::Navigate(*page),
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let about = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(section_title(ctx.i18n.tr("footer-about-title")))
        .push(Text::new(ctx.i18n.tr("footer-about-body")).size(typography::BODY));

    let links = QUICK_LINKS.iter().fold(
        Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fill)
            .push(section_title(ctx.i18n.tr("footer-links-title"))),
        |column, (page, key)| {
            column.push(
                button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
                    .padding([spacing::XXS, 0.0])
                    .on_press(Message::Navigate(*page))
                    .style(styles::button::footer_link),
            )
        },
    );

    let contact = [
        "contact-address-line",
        "contact-phone-line",
        "contact-email-line",
    ]
    .iter()
    .fold(
        Column::new()
            .spacing(spacing::XS)
            .width(Length::Fill)
            .push(section_title(ctx.i18n.tr("footer-contact-title"))),
        |column, key| column.push(Text::new(ctx.i18n.tr(key)).size(typography::BODY)),
    );

    let columns = Row::new()
        .spacing(spacing::XL)
        .push(about)
        .push(links)
        .push(contact);

    let content = Column::new()
        .spacing(spacing::LG)
        .push(columns)
        .push(rule::horizontal(1))
        .push(
            Container::new(Text::new(ctx.i18n.tr("footer-copyright")).size(typography::CAPTION))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XL, spacing::XXL])
        .style(styles::container::footer)
        .into()
}

fn section_title<'a>(label: String) -> Element<'a, Message> {
    Text::new(label).size(typography::TITLE_SM).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_link_reports_its_page() {
        assert_eq!(
            update(&Message::Navigate(Page::Brand)),
            Event::Navigate(Page::Brand)
        );
    }

    #[test]
    fn brand_guide_is_only_reachable_from_the_footer() {
        assert!(QUICK_LINKS.iter().any(|(page, _)| *page == Page::Brand));
        assert!(!crate::ui::header::NAV_PAGES.contains(&Page::Brand));
    }
}
