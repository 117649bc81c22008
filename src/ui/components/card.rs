// SPDX-License-Identifier: MPL-2.0
//! Card surfaces and the title/subtitle heading used at the top of cards
//! and pages.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Wraps `content` in a padded card surface.
pub fn card<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card)
}

/// Title with a muted subtitle underneath.
pub fn heading<'a, Message: 'a>(
    title: String,
    subtitle: String,
    size: f32,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(title).size(size))
        .push(
            Text::new(subtitle)
                .size(typography::BODY)
                .style(styles::text::muted),
        )
        .into()
}

/// Heading of a full page: large brand-colored title and a muted tagline.
pub fn page_heading<'a, Message: 'a>(title: String, subtitle: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(title)
                .size(typography::TITLE_LG)
                .style(styles::text::brand),
        )
        .push(
            Text::new(subtitle)
                .size(typography::BODY_LG)
                .style(styles::text::muted),
        )
        .into()
}

/// Lays `items` out in rows of `columns` equally wide cells. The last row is
/// padded with empty space so its cells keep the same width.
pub fn grid<'a, Message: 'a>(
    items: Vec<Element<'a, Message>>,
    columns: usize,
) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(spacing::LG).width(Length::Fill);
    let mut items = items.into_iter().peekable();

    while items.peek().is_some() {
        let mut row = Row::new().spacing(spacing::LG).width(Length::Fill);
        for _ in 0..columns {
            row = match items.next() {
                Some(item) => row.push(Container::new(item).width(Length::Fill)),
                None => row.push(Space::new().width(Length::Fill)),
            };
        }
        rows = rows.push(row);
    }

    rows.into()
}
