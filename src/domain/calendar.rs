// SPDX-License-Identifier: MPL-2.0
//! Dated calendar entries and the three calendar projections.
//!
//! An entry has no time of day for comparison purposes: its moment is the
//! start of its date. All projections take `now` as a parameter so they can
//! be recomputed on every render and tested with a fixed clock.

use super::store::{Record, RecordId};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Accent bar color of an entry in the upcoming list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColor {
    Green,
    Blue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub id: RecordId,
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub color: EventColor,
}

impl Record for CalendarEvent {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl CalendarEvent {
    /// Midnight at the start of the event's date.
    #[must_use]
    pub fn moment(&self) -> NaiveDateTime {
        self.date.and_time(NaiveTime::MIN)
    }
}

/// The month displayed by the calendar widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthCursor {
    year: i32,
    /// `1..=12`
    month: u32,
}

impl MonthCursor {
    /// Cursor on the month containing `date`.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns `None` when `month` is not in `1..=12`.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12)
            .contains(&month)
            .then_some(Self { year, month })
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn month(self) -> u32 {
        self.month
    }

    #[must_use]
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                month: self.month + 1,
                ..self
            }
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                month: self.month - 1,
                ..self
            }
        }
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// First day of the month, or `None` outside chrono's supported range.
    #[must_use]
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    #[must_use]
    pub fn days_in_month(self) -> u32 {
        match (self.first_day(), self.next().first_day()) {
            (Some(first), Some(next)) => {
                u32::try_from((next - first).num_days()).unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// Empty cells before day 1 in a grid whose weeks start on Sunday.
    #[must_use]
    pub fn leading_blanks(self) -> u32 {
        self.first_day()
            .map_or(0, |first| first.weekday().num_days_from_sunday())
    }

    /// Every date of the month, in order.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let first = self.first_day();
        (0..self.days_in_month()).filter_map(move |offset| {
            first.and_then(|f| f.checked_add_signed(Duration::days(i64::from(offset))))
        })
    }
}

/// (a) Events on or after `now`, earliest first, at most `limit`.
#[must_use]
pub fn upcoming(events: &[CalendarEvent], now: NaiveDateTime, limit: usize) -> Vec<&CalendarEvent> {
    let mut future: Vec<&CalendarEvent> = events.iter().filter(|e| e.moment() >= now).collect();
    future.sort_by_key(|e| e.moment());
    future.truncate(limit);
    future
}

/// (b) Events inside the month shown by `cursor`, in list order.
#[must_use]
pub fn in_month(events: &[CalendarEvent], cursor: MonthCursor) -> Vec<&CalendarEvent> {
    events.iter().filter(|e| cursor.contains(e.date)).collect()
}

/// (c) Number of events with `now <= moment <= now + days`.
#[must_use]
pub fn count_within(events: &[CalendarEvent], now: NaiveDateTime, days: i64) -> usize {
    let end = now + Duration::days(days);
    events
        .iter()
        .filter(|e| {
            let moment = e.moment();
            moment >= now && moment <= end
        })
        .count()
}

/// Events falling on `date`.
#[must_use]
pub fn on_date(events: &[CalendarEvent], date: NaiveDate) -> Vec<&CalendarEvent> {
    events.iter().filter(|e| e.date == date).collect()
}
