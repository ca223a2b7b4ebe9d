//! Calendar-date helpers shared by the rotation engine and the month grid.
//!
//! Everything operates on [`chrono::NaiveDate`]: a pure year/month/day value
//! with no time-of-day component, so day arithmetic is exact across month and
//! year boundaries, leap years and DST transitions.

use chrono::{Datelike, Days, Months, NaiveDate};

/// Canonical `YYYY-MM-DD` key for a date, zero-padded.
///
/// Used both for storage keys and as the stable identity when comparing a
/// cell against "today".
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a canonical `YYYY-MM-DD` key back into a date.
#[must_use]
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// First day of the month `date` falls in.
#[must_use]
pub fn month_start(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month.
    date.with_day(1).unwrap_or(date)
}

/// Number of days in the month `date` falls in.
#[must_use]
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = month_start(date);
    add_months(first, 1).pred_opt().map_or(31, |d| d.day())
}

/// Shift `date` by whole months, keeping the day clamped to the target month.
#[must_use]
pub fn add_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };
    shifted.unwrap_or(date)
}

/// The day after `date`.
#[must_use]
pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(date)
}
