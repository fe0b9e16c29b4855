//! Day-index selection: maps a local calendar date onto a catalog row so that
//! everyone sees the same entry on the same day.
//!
//! The ordinal comes from calendar fields (year/month/day), never from
//! subtracting timestamps, so a daylight-saving shift between January 1 and
//! the given date cannot move the result by a day.

use chrono::{Datelike, Local, NaiveDate};

use crate::catalog::Catalog;
use crate::error::Result;

/// 1-based day within the date's year (January 1 = 1, December 31 = 365/366).
pub fn day_of_year<D: Datelike>(date: &D) -> u32 {
    date.ordinal()
}

/// Index of the daily entry for `date`: `day_of_year(date) % catalog.len()`.
pub fn daily_index<D: Datelike>(catalog: &Catalog<'_>, date: &D) -> Result<usize> {
    let len = catalog.require_entries()?;
    Ok(day_of_year(date) as usize % len)
}

/// Today's date in the host's local timezone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
