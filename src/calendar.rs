use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Deserialize;
use thiserror::Error;

/// Hard ceiling on an expanded grid. The longest legitimate grid (six months
/// plus week padding) stays well under this, so hitting it means the date
/// arithmetic is broken and the expansion aborts instead of looping.
pub const MAX_GRID_DAYS: usize = 370;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarMode {
    /// The anchor date's calendar month.
    Monthly,
    /// Six calendar months starting at the anchor month.
    HalfYear,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("calendar range {start} to {end} exceeds {MAX_GRID_DAYS} days")]
pub struct GridOverflow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Inclusive bounds of the calendar grid for `anchor`: the period's first day
/// pulled back to the Sunday on/before it, its last day pushed forward to the
/// Saturday on/after it, so the grid is a whole number of weeks.
pub fn grid_range(anchor: NaiveDate, mode: CalendarMode) -> (NaiveDate, NaiveDate) {
    let first = first_of_month(anchor);
    let last = match mode {
        CalendarMode::Monthly => end_of_month(first),
        CalendarMode::HalfYear => end_of_month(first + Months::new(5)),
    };
    (sunday_on_or_before(first), saturday_on_or_after(last))
}

/// Every date of the grid for `anchor`, in order.
pub fn grid_days(anchor: NaiveDate, mode: CalendarMode) -> Result<Vec<NaiveDate>, GridOverflow> {
    let (start, end) = grid_range(anchor, mode);
    days_between(start, end)
}

/// Inclusive date walk, capped at `MAX_GRID_DAYS`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>, GridOverflow> {
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        if days.len() >= MAX_GRID_DAYS {
            return Err(GridOverflow { start, end });
        }
        days.push(current);
        let Some(next) = current.succ_opt() else {
            break;
        };
        current = next;
    }
    Ok(days)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

fn end_of_month(first: NaiveDate) -> NaiveDate {
    first + Months::new(1) - Duration::days(1)
}

fn sunday_on_or_before(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

fn saturday_on_or_after(date: NaiveDate) -> NaiveDate {
    date + Duration::days(i64::from(6 - date.weekday().num_days_from_sunday()))
}
