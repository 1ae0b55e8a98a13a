//! Month validation rules: rolling 32-hour rest windows, Monday-week quotas,
//! pairwise adjacent-duty minimum rest.

use std::fmt;

use chrono::Weekday;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::duty::{DutyCatalog, DutyKind, DutyTemplate};
use crate::models::roster::RosterMonth;

use super::time::{
    effective_end_minutes, flight_duty_period, format_duration, minimum_rest_time, time_to_minutes,
    DAY_MINUTES,
};
use super::{month_records, weekday, DayRecord};

/// Qualifying continuous rest block for the rolling 7-day check (32 h)
pub const CONSECUTIVE_REST_MINUTES: i32 = 32 * 60;
/// Work-duty ceiling inside a Monday-aligned week
pub const MAX_WEEKLY_WORK_DUTIES: usize = 5;

/// A single rule violation. `Display` renders the exact advisory prose the
/// roster screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// A rolling 7-day window without a qualifying 32-hour rest block
    MissingConsecutiveRest { start_day: u32 },
    /// More than the allowed work duties in a Monday-aligned week
    TooManyWorkDuties { week: u32, start_day: u32, count: usize },
    MissingRecessDay { week: u32, start_day: u32 },
    TooManyRecessDays { week: u32, start_day: u32, count: usize },
    MissingRestDay { week: u32, start_day: u32 },
    TooManyRestDays { week: u32, start_day: u32, count: usize },
    /// Adjacent duties with less actual rest than the MRT table requires
    InsufficientRest {
        day: u32,
        actual_minutes: i32,
        required_minutes: i32,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingConsecutiveRest { start_day } => write!(
                f,
                "Days {}-{}: Missing required 32-hour consecutive rest period",
                start_day,
                start_day + 6
            ),
            Violation::TooManyWorkDuties { week, start_day, count } => write!(
                f,
                "Week {} ({}-{}): Too many work duties ({}/{} max)",
                week,
                start_day,
                start_day + 6,
                count,
                MAX_WEEKLY_WORK_DUTIES
            ),
            Violation::MissingRecessDay { week, start_day } => write!(
                f,
                "Week {} ({}-{}): Missing required recess day (例)",
                week,
                start_day,
                start_day + 6
            ),
            Violation::TooManyRecessDays { week, start_day, count } => write!(
                f,
                "Week {} ({}-{}): Too many recess days ({}, expected 1)",
                week,
                start_day,
                start_day + 6,
                count
            ),
            Violation::MissingRestDay { week, start_day } => write!(
                f,
                "Week {} ({}-{}): Missing required rest day (休)",
                week,
                start_day,
                start_day + 6
            ),
            Violation::TooManyRestDays { week, start_day, count } => write!(
                f,
                "Week {} ({}-{}): Too many rest days ({}, expected 1)",
                week,
                start_day,
                start_day + 6,
                count
            ),
            Violation::InsufficientRest { day, actual_minutes, required_minutes } => write!(
                f,
                "Day {}-{}: Insufficient rest time ({} < required {})",
                day,
                day + 1,
                format_duration(*actual_minutes),
                format_duration(*required_minutes)
            ),
        }
    }
}

/// Validate a full month, re-evaluating every rule from scratch
pub fn validate_month(catalog: &DutyCatalog, roster: &RosterMonth) -> Vec<Violation> {
    let records = month_records(catalog, roster);
    let mut violations = Vec::new();
    check_consecutive_rest(&records, &mut violations);
    check_weekly_quotas(&records, roster.year, roster.month, &mut violations);
    check_pairwise_rest(&records, &mut violations);
    violations
}

fn is_rest_day(duty: Option<&DutyTemplate>) -> bool {
    duty.map(DutyTemplate::is_rest).unwrap_or(false)
}

/// Every rolling 7-day window must contain a 32-hour continuous rest block
fn check_consecutive_rest(records: &[DayRecord], out: &mut Vec<Violation>) {
    if records.len() < 7 {
        return;
    }
    for start in 0..=records.len() - 7 {
        let window = &records[start..start + 7];
        if !window_has_consecutive_rest(window) {
            out.push(Violation::MissingConsecutiveRest {
                start_day: window[0].day,
            });
        }
    }
}

/// The fast paths guarantee >= 48h outright; only a window of back-to-back
/// timed duties needs the actual gap computation.
fn window_has_consecutive_rest(window: &[DayRecord]) -> bool {
    let adjacent = || window.windows(2).map(|pair| (pair[0].duty, pair[1].duty));

    // Two adjacent full rest days
    if adjacent().any(|(a, b)| is_rest_day(a) && is_rest_day(b)) {
        return true;
    }
    // A rest day next to an unassigned day
    if adjacent().any(|(a, b)| (is_rest_day(a) && b.is_none()) || (a.is_none() && is_rest_day(b))) {
        return true;
    }
    // Two adjacent unassigned days
    if adjacent().any(|(a, b)| a.is_none() && b.is_none()) {
        return true;
    }
    // Measure the elapsed rest between consecutive timed duties
    max_rest_gap(window) >= CONSECUTIVE_REST_MINUTES
}

/// Largest rest gap between chronologically consecutive timed duty entries
/// in the window, in original day order
fn max_rest_gap(window: &[DayRecord]) -> i32 {
    let timed: Vec<(usize, &DutyTemplate)> = window
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            record
                .duty
                .filter(|d| d.is_duty() && d.is_timed())
                .map(|d| (index, d))
        })
        .collect();

    let mut best = 0;
    for pair in timed.windows(2) {
        let (first_index, first) = pair[0];
        let (second_index, second) = pair[1];
        // Full calendar days between the two duties; 0 = directly adjacent
        let gap_days = (second_index - first_index - 1) as i32;
        let end = effective_end_minutes(first).unwrap_or(0);
        let start = time_to_minutes(second.start_time.as_deref().unwrap_or(""));
        let rest = if gap_days == 0 {
            if start < end {
                // second starts before first's effective end: midnight crossing
                DAY_MINUTES - end
            } else {
                start - end
            }
        } else {
            (DAY_MINUTES - end) + gap_days * DAY_MINUTES + start
        };
        best = best.max(rest);
    }
    best
}

/// Weekly counts for a Monday-aligned 7-day run
pub(crate) struct WeekCounts {
    pub recess: usize,
    pub rest: usize,
    pub work: usize,
}

pub(crate) fn week_counts(week: &[DayRecord]) -> WeekCounts {
    let mut counts = WeekCounts {
        recess: 0,
        rest: 0,
        work: 0,
    };
    for record in week {
        match record.duty.map(|d| d.kind) {
            Some(DutyKind::Recess) => counts.recess += 1,
            Some(DutyKind::RestDay) => counts.rest += 1,
            Some(_) => counts.work += 1,
            None => {}
        }
    }
    counts
}

/// Each Monday-aligned week lying entirely within the month must hold at
/// most 5 work duties and exactly one recess day and one rest day.
/// Partial weeks are skipped.
fn check_weekly_quotas(records: &[DayRecord], year: i32, month: u32, out: &mut Vec<Violation>) {
    let mut week = 0u32;
    for start in 0..records.len() {
        let start_day = records[start].day;
        if weekday(year, month, start_day) != Some(Weekday::Mon) {
            continue;
        }
        if start + 7 > records.len() {
            continue;
        }
        week += 1;
        let counts = week_counts(&records[start..start + 7]);

        if counts.work > MAX_WEEKLY_WORK_DUTIES {
            out.push(Violation::TooManyWorkDuties {
                week,
                start_day,
                count: counts.work,
            });
        }
        if counts.recess == 0 {
            out.push(Violation::MissingRecessDay { week, start_day });
        } else if counts.recess > 1 {
            out.push(Violation::TooManyRecessDays {
                week,
                start_day,
                count: counts.recess,
            });
        }
        if counts.rest == 0 {
            out.push(Violation::MissingRestDay { week, start_day });
        } else if counts.rest > 1 {
            out.push(Violation::TooManyRestDays {
                week,
                start_day,
                count: counts.rest,
            });
        }
    }
}

/// Every pair of adjacent days holding timed duties must leave at least the
/// MRT derived from the first duty's FDP between effective end and next start.
fn check_pairwise_rest(records: &[DayRecord], out: &mut Vec<Violation>) {
    for pair in records.windows(2) {
        let (Some(first), Some(second)) = (pair[0].duty, pair[1].duty) else {
            continue;
        };
        if !first.is_duty() || !second.is_duty() || !first.is_timed() || !second.is_timed() {
            continue;
        }
        let required = minimum_rest_time(flight_duty_period(first));
        let end = effective_end_minutes(first).unwrap_or(0);
        let mut actual = time_to_minutes(second.start_time.as_deref().unwrap_or("")) - end;
        if actual < 0 {
            actual += DAY_MINUTES;
        }
        if actual < required {
            out.push(Violation::InsufficientRest {
                day: pair[0].day,
                actual_minutes: actual,
                required_minutes: required,
            });
        }
    }
}
