//! Shared calendar helpers for the two date value objects.

use chrono::{Datelike, NaiveDate};

/// Parse a `DD-MM-YYYY` string into a calendar-checked date.
///
/// chrono rejects numerically impossible dates ("31-02-2020"), so inputs
/// that merely look like dates fail closed here.
pub(crate) fn parse_dd_mm_yyyy(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%d-%m-%Y").ok()
}

/// Whole elapsed years between two dates, calendar-aware.
///
/// Subtracts one when the anniversary has not yet occurred in `to`'s year,
/// so the result never overshoots near birthdays. Negative when `from` is
/// after `to`.
pub(crate) fn whole_years_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years
}
