//! Per-day advisory suggestions for the roster-planning screen

use chrono::Weekday;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::duty::{DutyCatalog, DutyKind};
use crate::models::roster::RosterMonth;

use super::rules::week_counts;
use super::time::{
    effective_end_minutes, flight_duty_period, format_duration, minimum_rest_time, minutes_to_time,
    time_to_minutes, DAY_MINUTES,
};
use super::{month_records, weekday};

/// Suggestion flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionKind {
    /// A duty type the week still requires
    Required,
    /// Earliest legal start after the previous day's duty
    RestTime,
}

/// Ephemeral advisory value for one day; never stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DaySuggestion {
    pub kind: SuggestionKind,
    /// A duty code for `required`, "earliest: HH:MM" for `rest-time`
    pub text: String,
    /// Formatted minimum rest backing a rest-time suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_rest: Option<String>,
}

impl DaySuggestion {
    fn required(code: String) -> Self {
        Self {
            kind: SuggestionKind::Required,
            text: code,
            required_rest: None,
        }
    }

    fn rest_time(earliest_minutes: i32, required_minutes: i32) -> Self {
        Self {
            kind: SuggestionKind::RestTime,
            text: format!("earliest: {}", minutes_to_time(earliest_minutes)),
            required_rest: Some(format_duration(required_minutes)),
        }
    }
}

/// A suggestion paired with its day, for whole-month listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DaySuggestionEntry {
    /// Day of month (1-based)
    pub day: u32,
    #[serde(flatten)]
    pub suggestion: DaySuggestion,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Unassigned,
    Assigned,
}

/// Advisory suggestion for an unassigned weekday, `None` when nothing applies
pub fn suggest_for_day(catalog: &DutyCatalog, roster: &RosterMonth, day: u32) -> Option<DaySuggestion> {
    advise(catalog, roster, day, Mode::Unassigned)
}

/// Highlight check for an assigned weekday, same rules as [`suggest_for_day`]
pub fn day_in_violation(
    catalog: &DutyCatalog,
    roster: &RosterMonth,
    day: u32,
) -> Option<DaySuggestion> {
    advise(catalog, roster, day, Mode::Assigned)
}

fn advise(
    catalog: &DutyCatalog,
    roster: &RosterMonth,
    day: u32,
    mode: Mode,
) -> Option<DaySuggestion> {
    let records = month_records(catalog, roster);
    let index = day.checked_sub(1)? as usize;
    let record = *records.get(index)?;

    match (mode, record.duty) {
        (Mode::Unassigned, Some(_)) | (Mode::Assigned, None) => return None,
        _ => {}
    }

    // Weekends are auto-populated externally and never need advice
    let wd = weekday(roster.year, roster.month, day)?;
    if matches!(wd, Weekday::Sat | Weekday::Sun) {
        return None;
    }

    // The day's Monday-aligned week, when a full 7-day run fits in the month
    let monday = day as i64 - i64::from(wd.num_days_from_monday());
    if monday >= 1 && monday + 6 <= records.len() as i64 {
        let start = (monday - 1) as usize;
        let counts = week_counts(&records[start..start + 7]);
        if counts.recess == 0 {
            return Some(DaySuggestion::required(kind_code(catalog, DutyKind::Recess, "例")));
        }
        if counts.rest == 0 {
            return Some(DaySuggestion::required(kind_code(catalog, DutyKind::RestDay, "休")));
        }
    }

    // Earliest legal start after the previous day's duty
    let prev = records.get(index.checked_sub(1)?)?.duty?;
    if !prev.is_duty() || !prev.is_timed() {
        return None;
    }
    let required = minimum_rest_time(flight_duty_period(prev));
    let end = effective_end_minutes(prev).unwrap_or(0);
    let earliest = (end + required) % DAY_MINUTES;

    match mode {
        Mode::Unassigned => Some(DaySuggestion::rest_time(earliest, required)),
        Mode::Assigned => {
            // Only a violation when the assigned duty starts too early
            let start = record.duty?.start_time.as_deref()?;
            (time_to_minutes(start) < earliest).then(|| DaySuggestion::rest_time(earliest, required))
        }
    }
}

/// Display code of the first catalog template of the given kind
fn kind_code(catalog: &DutyCatalog, kind: DutyKind, fallback: &str) -> String {
    catalog
        .values()
        .find(|d| d.kind == kind)
        .map(|d| d.code.clone())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::duty::DutyTemplate;

    fn template(id: &str, code: &str, kind: DutyKind, times: Option<(&str, &str)>) -> DutyTemplate {
        DutyTemplate {
            id: id.into(),
            code: code.into(),
            name: id.into(),
            kind,
            start_time: times.map(|(s, _)| s.into()),
            end_time: times.map(|(_, e)| e.into()),
        }
    }

    fn catalog() -> DutyCatalog {
        [
            template("recess", "例", DutyKind::Recess, None),
            template("rest", "休", DutyKind::RestDay, None),
            template("evening", "晚", DutyKind::Flight, Some(("12:45", "19:45"))),
            template("morning", "早", DutyKind::Flight, Some(("06:35", "13:40"))),
            template("office", "辦", DutyKind::Ground, Some(("09:00", "17:30"))),
        ]
        .into_iter()
        .map(|t| (t.id.clone(), t))
        .collect()
    }

    fn roster(assignments: &[(u32, &str)]) -> RosterMonth {
        RosterMonth {
            // June 2026 starts on a Monday
            year: 2026,
            month: 6,
            assignments: assignments
                .iter()
                .map(|(d, id)| (*d, id.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_suggests_recess_first() {
        let suggestion = suggest_for_day(&catalog(), &roster(&[]), 3).unwrap();
        assert_eq!(suggestion.kind, SuggestionKind::Required);
        assert_eq!(suggestion.text, "例");
    }

    #[test]
    fn test_suggests_rest_once_recess_covered() {
        let suggestion = suggest_for_day(&catalog(), &roster(&[(7, "recess")]), 3).unwrap();
        assert_eq!(suggestion.kind, SuggestionKind::Required);
        assert_eq!(suggestion.text, "休");
    }

    #[test]
    fn test_suggests_earliest_start_after_duty() {
        // Week 8-14 covered by recess/rest; previous day holds the evening
        // flight: effective end 20:15 + 11h MRT = earliest 07:15 next day
        let roster = roster(&[(13, "rest"), (14, "recess"), (9, "evening")]);
        let suggestion = suggest_for_day(&catalog(), &roster, 10).unwrap();
        assert_eq!(suggestion.kind, SuggestionKind::RestTime);
        assert_eq!(suggestion.text, "earliest: 07:15");
        assert_eq!(suggestion.required_rest.as_deref(), Some("11h 0m"));
    }

    #[test]
    fn test_no_suggestion_for_weekends() {
        // June 6, 2026 is a Saturday
        assert_eq!(suggest_for_day(&catalog(), &roster(&[]), 6), None);
        assert_eq!(suggest_for_day(&catalog(), &roster(&[]), 7), None);
    }

    #[test]
    fn test_no_suggestion_for_assigned_day() {
        assert_eq!(
            suggest_for_day(&catalog(), &roster(&[(3, "office")]), 3),
            None
        );
    }

    #[test]
    fn test_quiet_when_nothing_applies() {
        // Week covered, previous day unassigned
        let roster = roster(&[(13, "rest"), (14, "recess")]);
        assert_eq!(suggest_for_day(&catalog(), &roster, 10), None);
    }

    #[test]
    fn test_assigned_day_violation_on_early_start() {
        // Morning flight starts 06:35, before the 07:15 earliest start
        let roster = roster(&[(13, "rest"), (14, "recess"), (9, "evening"), (10, "morning")]);
        let status = day_in_violation(&catalog(), &roster, 10).unwrap();
        assert_eq!(status.kind, SuggestionKind::RestTime);
        assert_eq!(status.text, "earliest: 07:15");
    }

    #[test]
    fn test_assigned_day_ok_on_late_enough_start() {
        // Office starts 09:00, after the earliest legal 07:15
        let roster = roster(&[(13, "rest"), (14, "recess"), (9, "evening"), (10, "office")]);
        assert_eq!(day_in_violation(&catalog(), &roster, 10), None);
    }

    #[test]
    fn test_highlight_ignores_unassigned_days() {
        assert_eq!(day_in_violation(&catalog(), &roster(&[]), 3), None);
    }

    #[test]
    fn test_dangling_reference_treated_as_unassigned() {
        let roster = roster(&[(3, "deleted-custom-duty")]);
        // the stale reference resolves to no duty: still a suggestion target
        let suggestion = suggest_for_day(&catalog(), &roster, 3).unwrap();
        assert_eq!(suggestion.text, "例");
        assert_eq!(day_in_violation(&catalog(), &roster, 3), None);
    }
}
