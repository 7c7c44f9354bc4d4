// Date utility functions
// Month enumeration, month navigation, and canonical date keys

use chrono::{Datelike, NaiveDate};

/// Returns every date of the given month in ascending day order.
///
/// Builds up to 31 candidate dates and keeps the ones that resolve; there is
/// no month-length table, so variable month lengths and leap years fall out
/// of the date arithmetic.
pub fn days_in_month(year: i32, month: u32) -> Vec<NaiveDate> {
    (1..=31)
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .collect()
}

/// Moves `current` by `delta` months with calendar-correct year rollover.
///
/// The day-of-month is only an anchor for the displayed month; it is clamped
/// to the target month's length so the result is always a valid date.
pub fn change_month(current: NaiveDate, delta: i32) -> NaiveDate {
    let months = current.year() * 12 + current.month0() as i32 + delta;
    let year = months.div_euclid(12);
    let month = months.rem_euclid(12) as u32 + 1;
    let day = current.day().min(days_in_month(year, month).len() as u32);
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(current)
}

/// Canonical `YYYY-MM-DD` key for a calendar day.
///
/// `NaiveDate` carries no time-of-day or timezone, so two values denoting the
/// same day always produce the same key.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
