//! Duty-time compliance engine (MRT/FDP)
//!
//! Pure, synchronous rule checking over a duty catalog and a sparse
//! day-to-duty assignment map for one displayed month. The engine never
//! mutates the map and re-evaluates the whole month on every call; it is
//! advisory only and raises no errors for missing or malformed per-day data.

pub mod rules;
pub mod suggest;
pub mod time;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::duty::{DutyCatalog, DutyTemplate};
use crate::models::roster::RosterMonth;

pub use rules::{validate_month, Violation};
pub use suggest::{day_in_violation, suggest_for_day, DaySuggestion, SuggestionKind};
pub use time::{
    duty_metrics, effective_end_minutes, effective_end_time, flight_duty_period, format_duration,
    minimum_rest_time, minutes_to_time, time_to_minutes, DutyMetrics,
};

/// One calendar day of the displayed month with its resolved assignment.
/// A dangling template reference resolves to `None` (unassigned).
#[derive(Debug, Clone, Copy)]
pub(crate) struct DayRecord<'a> {
    pub day: u32,
    pub duty: Option<&'a DutyTemplate>,
}

/// Number of days in a month, 0 for an invalid year/month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(next) => next.signed_duration_since(first).num_days() as u32,
        None => 0,
    }
}

/// Weekday of a calendar day, `None` for an invalid date
pub fn weekday(year: i32, month: u32, day: u32) -> Option<Weekday> {
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.weekday())
}

/// Resolve the month into an ordered run of day records
pub(crate) fn month_records<'a>(
    catalog: &'a DutyCatalog,
    roster: &'a RosterMonth,
) -> Vec<DayRecord<'a>> {
    (1..=days_in_month(roster.year, roster.month))
        .map(|day| DayRecord {
            day,
            duty: roster.assignments.get(&day).and_then(|id| catalog.get(id)),
        })
        .collect()
}
