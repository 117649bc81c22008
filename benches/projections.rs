// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the list projections recomputed on every frame.
//!
//! Measures the performance of:
//! - Calendar projections (upcoming, month, 30-day window)
//! - Classified search and category filtering

use chrono::{Duration, NaiveDate, NaiveDateTime};
use criterion::{criterion_group, criterion_main, Criterion};
use jac_community::config::{UPCOMING_EVENTS_LIMIT, UPCOMING_WINDOW_DAYS};
use jac_community::domain::calendar::{self, CalendarEvent, MonthCursor};
use jac_community::domain::classified::{filter_classifieds, Category, CategoryFilter};
use jac_community::domain::seed;
use std::hint::black_box;

/// A year of events built by shifting the seed calendar week by week.
fn year_of_events() -> Vec<CalendarEvent> {
    let seed = seed::calendar_events();
    (0..52)
        .flat_map(|week| {
            seed.iter().map(move |event| {
                let mut shifted = event.clone();
                shifted.date += Duration::weeks(week);
                shifted
            })
        })
        .collect()
}

fn noon(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(12, 0, 0).unwrap()
}

fn bench_calendar_projections(c: &mut Criterion) {
    let mut group = c.benchmark_group("calendar_projections");
    let events = year_of_events();
    let now = noon(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    let cursor = MonthCursor::containing(now.date());

    group.bench_function("upcoming", |b| {
        b.iter(|| black_box(calendar::upcoming(&events, now, UPCOMING_EVENTS_LIMIT)));
    });

    group.bench_function("in_month", |b| {
        b.iter(|| black_box(calendar::in_month(&events, cursor)));
    });

    group.bench_function("count_within", |b| {
        b.iter(|| black_box(calendar::count_within(&events, now, UPCOMING_WINDOW_DAYS)));
    });

    group.finish();
}

fn bench_classified_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("classified_filter");
    let records: Vec<_> = (0..200).flat_map(|_| seed::classifieds()).collect();

    group.bench_function("search_all_categories", |b| {
        b.iter(|| black_box(filter_classifieds(&records, "guitarra", CategoryFilter::All)));
    });

    group.bench_function("search_one_category", |b| {
        b.iter(|| {
            black_box(filter_classifieds(
                &records,
                "bicicleta",
                CategoryFilter::Only(Category::Venta),
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_calendar_projections, bench_classified_filter);
criterion_main!(benches);
