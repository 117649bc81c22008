// SPDX-License-Identifier: MPL-2.0
//! Spanish date formatting.

use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Column headers of the calendar grid, Sunday first.
pub const WEEKDAYS_SHORT: [&str; 7] = ["do", "lu", "ma", "mi", "ju", "vi", "sá"];

/// Full month name, `month` in `1..=12`.
#[must_use]
pub fn month_name(month: u32) -> &'static str {
    let index = month.clamp(1, 12) as usize - 1;
    MONTHS[index]
}

/// Three-letter month abbreviation (`oct`, `nov`).
#[must_use]
pub fn month_abbrev(month: u32) -> &'static str {
    let name = month_name(month);
    // Every month name is ASCII and longer than three bytes.
    &name[..3]
}

/// `23 de octubre de 2025`
#[must_use]
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        month_name(date.month()),
        date.year()
    )
}

/// `noviembre de 2025`
#[must_use]
pub fn month_year(year: i32, month: u32) -> String {
    format!("{} de {}", month_name(month), year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_uses_spanish_month() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 23).unwrap();
        assert_eq!(long_date(date), "23 de octubre de 2025");
    }

    #[test]
    fn month_year_formats_lowercase_name() {
        assert_eq!(month_year(2025, 11), "noviembre de 2025");
    }

    #[test]
    fn abbreviations_are_three_letters() {
        assert_eq!(month_abbrev(9), "sep");
        assert_eq!(month_abbrev(2), "feb");
    }

    #[test]
    fn out_of_range_month_is_clamped() {
        assert_eq!(month_name(0), "enero");
        assert_eq!(month_name(13), "diciembre");
    }
}
