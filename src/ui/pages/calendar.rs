// SPDX-License-Identifier: MPL-2.0
//! Calendar page: month grid, upcoming list, monthly summary and the list
//! of events in the displayed month.
//!
//! The projections are recomputed on every render from the fixed entry
//! list and the `now` passed in by the application.

use crate::config::{UPCOMING_EVENTS_LIMIT, UPCOMING_WINDOW_DAYS};
use crate::domain::calendar::{self, CalendarEvent, EventColor, MonthCursor};
use crate::domain::{dates, seed};
use crate::i18n::fluent::I18n;
use crate::ui::components::calendar_widget::{self, Actions};
use crate::ui::components::card;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use chrono::{NaiveDate, NaiveDateTime};
use iced::alignment::Vertical;
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{Color, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    PreviousMonth,
    NextMonth,
    SelectDate(NaiveDate),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub now: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct State {
    events: Vec<CalendarEvent>,
    cursor: MonthCursor,
    selected: Option<NaiveDate>,
}

impl State {
    /// Opens on the month containing `today`, with `today` selected.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            events: seed::calendar_events(),
            cursor: MonthCursor::containing(today),
            selected: Some(today),
        }
    }

    #[must_use]
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    #[must_use]
    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    #[must_use]
    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Moving the cursor never touches the entry list.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::PreviousMonth => self.cursor = self.cursor.previous(),
            Message::NextMonth => self.cursor = self.cursor.next(),
            Message::SelectDate(date) => {
                self.selected = Some(date);
                self.cursor = MonthCursor::containing(date);
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let marked: Vec<NaiveDate> = self.events.iter().map(|e| e.date).collect();

        let mut month_card = Column::new()
            .spacing(spacing::MD)
            .push(card::heading(
                i18n.tr("calendar-monthly-view"),
                i18n.tr("calendar-monthly-view-subtitle"),
                typography::TITLE_SM,
            ))
            .push(calendar_widget::month_grid(
                self.cursor,
                self.selected,
                &marked,
                Actions {
                    on_previous: Message::PreviousMonth,
                    on_next: Message::NextMonth,
                    on_select: Message::SelectDate,
                },
            ))
            .push(
                Text::new(i18n.tr("calendar-legend"))
                    .size(typography::CAPTION)
                    .style(styles::text::muted),
            );

        if let Some(date) = self.selected {
            let on_day = calendar::on_date(&self.events, date);
            if !on_day.is_empty() {
                month_card =
                    month_card.push(Text::new(dates::long_date(date)).size(typography::BODY_LG));
                for event in on_day {
                    month_card = month_card.push(event_entry(event));
                }
            }
        }

        let upcoming = calendar::upcoming(&self.events, ctx.now, UPCOMING_EVENTS_LIMIT);
        let upcoming_card = upcoming.into_iter().fold(
            Column::new().spacing(spacing::SM).push(card::heading(
                i18n.tr("calendar-upcoming-title"),
                i18n.tr("calendar-upcoming-subtitle"),
                typography::TITLE_SM,
            )),
            |column, event| column.push(event_entry(event)),
        );

        let this_month = calendar::in_month(&self.events, self.cursor);
        let summary_card = Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("calendar-summary-title")).size(typography::TITLE_SM))
            .push(summary_line(i18n.tr("calendar-summary-total"), self.events.len()))
            .push(summary_line(i18n.tr("calendar-summary-month"), this_month.len()))
            .push(summary_line(
                i18n.tr("calendar-summary-window"),
                calendar::count_within(&self.events, ctx.now, UPCOMING_WINDOW_DAYS),
            ));

        let month_label = dates::month_year(self.cursor.year(), self.cursor.month());
        let mut month_list = Column::new().spacing(spacing::SM).push(card::heading(
            i18n.tr("calendar-month-events-title"),
            i18n.tr_with_args("calendar-month-events-subtitle", &[("month", month_label.as_str())]),
            typography::TITLE_SM,
        ));
        if this_month.is_empty() {
            month_list = month_list.push(
                Text::new(i18n.tr("calendar-month-empty"))
                    .size(typography::BODY)
                    .style(styles::text::muted),
            );
        } else {
            month_list = this_month
                .into_iter()
                .fold(month_list, |column, event| column.push(event_entry(event)));
        }

        let top = Row::new()
            .spacing(spacing::LG)
            .push(card::card(month_card).width(Length::FillPortion(3)))
            .push(
                Column::new()
                    .spacing(spacing::LG)
                    .width(Length::FillPortion(2))
                    .push(card::card(upcoming_card))
                    .push(card::card(summary_card)),
            );

        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::XL)
            .width(Length::Fill)
            .push(card::page_heading(
                i18n.tr("calendar-title"),
                i18n.tr("calendar-subtitle"),
            ))
            .push(top)
            .push(card::card(month_list))
            .into()
    }
}

fn accent(color: EventColor) -> Color {
    match color {
        EventColor::Green => palette::BRAND_GREEN,
        EventColor::Blue => palette::BRAND_BLUE,
    }
}

fn event_entry<'a>(event: &'a CalendarEvent) -> Element<'a, Message> {
    let bar = Container::new(Space::new())
        .width(Length::Fixed(spacing::XXS))
        .height(Length::Fixed(56.0))
        .style(styles::container::filled(accent(event.color)));

    let when = format!(
        "📅 {} · {}",
        dates::long_date(event.date),
        event.time
    );

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(bar)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(event.title.as_str()).size(typography::BODY_LG))
                .push(Text::new(when).size(typography::CAPTION).style(styles::text::muted))
                .push(
                    Text::new(format!("📍 {}", event.location))
                        .size(typography::CAPTION)
                        .style(styles::text::muted),
                ),
        )
        .into()
}

fn summary_line<'a>(label: String, value: usize) -> Element<'a, Message> {
    Row::new()
        .push(Text::new(label).size(typography::BODY).width(Length::Fill))
        .push(
            Text::new(value.to_string())
                .size(typography::TITLE_SM)
                .style(styles::text::brand),
        )
        .into()
}
