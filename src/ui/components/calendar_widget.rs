// SPDX-License-Identifier: MPL-2.0
//! Month calendar grid.
//!
//! Weeks start on Sunday. Days with at least one event are tinted and the
//! selected day is filled with the brand color.

use crate::domain::calendar::MonthCursor;
use crate::domain::dates;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use chrono::{Datelike, NaiveDate};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, Column, Row, Space, Text};
use iced::{Element, Length};

/// Splits the month into rows of seven cells, padding the first and last
/// week with `None`.
#[must_use]
pub fn weeks(cursor: MonthCursor) -> Vec<[Option<NaiveDate>; 7]> {
    let blanks = cursor.leading_blanks() as usize;
    let cells: Vec<Option<NaiveDate>> = std::iter::repeat_n(None, blanks)
        .chain(cursor.days().map(Some))
        .collect();

    cells
        .chunks(7)
        .map(|chunk| {
            let mut week = [None; 7];
            for (slot, day) in week.iter_mut().zip(chunk) {
                *slot = *day;
            }
            week
        })
        .collect()
}

/// Callbacks of the grid.
pub struct Actions<Message, F>
where
    F: Fn(NaiveDate) -> Message,
{
    pub on_previous: Message,
    pub on_next: Message,
    pub on_select: F,
}

pub fn month_grid<'a, Message, F>(
    cursor: MonthCursor,
    selected: Option<NaiveDate>,
    marked: &[NaiveDate],
    actions: Actions<Message, F>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
    F: Fn(NaiveDate) -> Message,
{
    let nav = Row::new()
        .align_y(Vertical::Center)
        .push(
            button(Text::new("‹").size(typography::TITLE_SM))
                .on_press(actions.on_previous)
                .style(styles::button::ghost),
        )
        .push(
            container(
                Text::new(dates::month_year(cursor.year(), cursor.month()))
                    .size(typography::BODY_LG),
            )
            .width(Length::Fill)
            .align_x(Horizontal::Center),
        )
        .push(
            button(Text::new("›").size(typography::TITLE_SM))
                .on_press(actions.on_next)
                .style(styles::button::ghost),
        );

    let weekday_row = dates::WEEKDAYS_SHORT.iter().fold(Row::new(), |row, name| {
        row.push(
            container(
                Text::new(*name)
                    .size(typography::CAPTION)
                    .style(styles::text::muted),
            )
            .width(Length::Fixed(sizing::CALENDAR_CELL))
            .align_x(Horizontal::Center),
        )
    });

    let mut grid = Column::new().spacing(spacing::XXS).push(weekday_row);
    for week in weeks(cursor) {
        let row = week.iter().fold(Row::new(), |row, slot| match slot {
            Some(date) => row.push(day_cell(
                *date,
                selected == Some(*date),
                marked.contains(date),
                &actions.on_select,
            )),
            None => row.push(
                Space::new()
                    .width(Length::Fixed(sizing::CALENDAR_CELL))
                    .height(Length::Fixed(sizing::CALENDAR_CELL)),
            ),
        });
        grid = grid.push(row);
    }

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Shrink)
        .push(nav)
        .push(grid)
        .into()
}

fn day_cell<'a, Message, F>(
    date: NaiveDate,
    selected: bool,
    has_events: bool,
    on_select: &F,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
    F: Fn(NaiveDate) -> Message,
{
    let label = container(Text::new(date.day().to_string()).size(typography::BODY))
        .center(Length::Fixed(sizing::CALENDAR_CELL))
        .style(styles::container::calendar_day(selected, has_events));

    button(label)
        .padding(0.0)
        .on_press(on_select(date))
        .style(styles::button::ghost)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn november_2025_starts_on_the_last_column() {
        let november = MonthCursor::new(2025, 11).unwrap();
        let rows = weeks(november);

        assert_eq!(rows.len(), 6);
        assert!(rows[0][..6].iter().all(Option::is_none));
        assert_eq!(rows[0][6], NaiveDate::from_ymd_opt(2025, 11, 1));
        assert_eq!(rows[5][0], NaiveDate::from_ymd_opt(2025, 11, 30));
        assert!(rows[5][1..].iter().all(Option::is_none));
    }

    #[test]
    fn every_day_appears_once() {
        let february = MonthCursor::new(2026, 2).unwrap();
        let days = weeks(february).iter().flatten().flatten().count();
        assert_eq!(days, 28);
    }
}
