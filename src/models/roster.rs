//! Roster models (displayed month, assignment map, request payloads)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::duty::DutyTemplate;

/// A displayed month with its sparse day-to-duty assignment map.
///
/// Keys are days of month (1-based); absence of a key means "unassigned".
/// Values reference `DutyTemplate` ids in the accompanying catalog; a
/// dangling reference is treated as unassigned.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct RosterMonth {
    /// Calendar year
    #[validate(range(min = 2000, max = 2100, message = "Year must be between 2000 and 2100"))]
    pub year: i32,
    /// Calendar month (1-12)
    #[validate(range(min = 1, max = 12, message = "Month must be between 1 and 12"))]
    pub month: u32,
    /// Day of month (1-based) -> duty template id
    #[serde(default)]
    pub assignments: BTreeMap<u32, String>,
}

/// Validate a month roster against the duty-time rules
#[derive(Debug, Deserialize, ToSchema)]
pub struct ValidateRosterRequest {
    /// Duty catalog in effect for this roster
    pub catalog: Vec<DutyTemplate>,
    pub roster: RosterMonth,
}

/// Derive advisory suggestions for every unassigned weekday of the month
#[derive(Debug, Deserialize, ToSchema)]
pub struct SuggestionsRequest {
    pub catalog: Vec<DutyTemplate>,
    pub roster: RosterMonth,
}

/// Check a single assigned day for highlight-worthy problems
#[derive(Debug, Deserialize, ToSchema)]
pub struct DayStatusRequest {
    pub catalog: Vec<DutyTemplate>,
    pub roster: RosterMonth,
    /// Day of month (1-based)
    pub day: u32,
}

/// Compute the weekend auto-population patch for a month
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct PrefillWeekendsRequest {
    #[validate(range(min = 2000, max = 2100, message = "Year must be between 2000 and 2100"))]
    pub year: i32,
    #[validate(range(min = 1, max = 12, message = "Month must be between 1 and 12"))]
    pub month: u32,
}
