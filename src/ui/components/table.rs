// SPDX-License-Identifier: MPL-2.0
//! Simple data table: a shaded header row followed by data rows separated
//! by hairlines. Column widths are proportional (`FillPortion`).

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{rule, Column, Container, Row, Text};
use iced::{Element, Length};

/// Header label and relative width of one column.
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: String,
    pub portion: u16,
}

impl TableColumn {
    pub fn new(header: String, portion: u16) -> Self {
        Self { header, portion }
    }
}

/// Lays out `rows` under `columns`.
///
/// Cells beyond the number of columns are dropped; missing cells are left
/// empty.
pub fn table<'a, Message: 'a>(
    columns: &[TableColumn],
    rows: Vec<Vec<Element<'a, Message>>>,
) -> Element<'a, Message> {
    let header = columns.iter().fold(
        Row::new().padding([spacing::XS, spacing::SM]),
        |row, column| {
            row.push(
                Container::new(Text::new(column.header.clone()).size(typography::CAPTION))
                    .width(Length::FillPortion(column.portion)),
            )
        },
    );

    let mut body = Column::new().push(
        Container::new(header)
            .width(Length::Fill)
            .style(styles::container::table_header),
    );

    for cells in rows {
        let mut cells = cells.into_iter();
        let row = columns.iter().fold(
            Row::new()
                .padding([spacing::SM, spacing::SM])
                .align_y(Vertical::Center),
            |row, column| {
                let cell: Element<'a, Message> =
                    cells.next().unwrap_or_else(|| Text::new("").into());
                row.push(Container::new(cell).width(Length::FillPortion(column.portion)))
            },
        );
        body = body.push(row).push(rule::horizontal(1));
    }

    body.width(Length::Fill).into()
}

/// Plain text cell at body size.
pub fn text_cell<'a, Message: 'a>(value: impl Into<String>) -> Element<'a, Message> {
    Text::new(value.into()).size(typography::BODY).into()
}
