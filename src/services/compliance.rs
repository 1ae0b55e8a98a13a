//! Roster compliance service

use std::collections::BTreeMap;

use chrono::Weekday;

use crate::compliance::{
    self, days_in_month, duty_metrics, weekday, DaySuggestion, DutyMetrics, Violation,
};
use crate::compliance::suggest::DaySuggestionEntry;
use crate::models::duty::{DutyCatalog, DutyTemplate};
use crate::models::roster::RosterMonth;

#[derive(Clone, Default)]
pub struct ComplianceService;

impl ComplianceService {
    pub fn new() -> Self {
        Self
    }

    /// Re-evaluate the whole month and return its violations
    pub fn validate_month(&self, catalog: &DutyCatalog, roster: &RosterMonth) -> Vec<Violation> {
        let violations = compliance::validate_month(catalog, roster);
        tracing::debug!(
            year = roster.year,
            month = roster.month,
            assignments = roster.assignments.len(),
            violations = violations.len(),
            "roster evaluated"
        );
        violations
    }

    /// Suggestions for every unassigned weekday of the month
    pub fn suggestions(&self, catalog: &DutyCatalog, roster: &RosterMonth) -> Vec<DaySuggestionEntry> {
        (1..=days_in_month(roster.year, roster.month))
            .filter_map(|day| {
                compliance::suggest_for_day(catalog, roster, day)
                    .map(|suggestion| DaySuggestionEntry { day, suggestion })
            })
            .collect()
    }

    /// Highlight status of one assigned day
    pub fn day_status(
        &self,
        catalog: &DutyCatalog,
        roster: &RosterMonth,
        day: u32,
    ) -> Option<DaySuggestion> {
        compliance::day_in_violation(catalog, roster, day)
    }

    /// Display metrics for a duty template
    pub fn duty_metrics(&self, duty: &DutyTemplate) -> DutyMetrics {
        duty_metrics(duty)
    }

    /// The weekend auto-population the roster screen applies before editing:
    /// Saturdays get the rest preset, Sundays the recess preset. Returned as
    /// a patch; the caller owns the assignment map.
    pub fn prefill_weekends(&self, year: i32, month: u32) -> BTreeMap<u32, String> {
        let mut assignments = BTreeMap::new();
        for day in 1..=days_in_month(year, month) {
            match weekday(year, month, day) {
                Some(Weekday::Sat) => {
                    assignments.insert(day, "rest".to_string());
                }
                Some(Weekday::Sun) => {
                    assignments.insert(day, "recess".to_string());
                }
                _ => {}
            }
        }
        assignments
    }
}
