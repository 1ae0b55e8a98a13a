//! Duty template model and catalog types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Duty classification.
///
/// The two rest kinds are the designated weekly types: `Recess` (例) is the
/// statutory full-rest day, `RestDay` (休) the weekly off day. Everything
/// else counts as worked time in the weekly quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DutyKind {
    /// Statutory weekly full-rest day (例)
    Recess,
    /// Weekly off day (休)
    RestDay,
    /// Ground duty (office, standby, training)
    Ground,
    /// Flight sector duty, subject to the post-flight buffer
    Flight,
}

impl DutyKind {
    /// Counts as a full rest day
    pub fn is_rest(self) -> bool {
        matches!(self, DutyKind::Recess | DutyKind::RestDay)
    }

    /// Counts as worked time, subject to rest-after requirements
    pub fn is_duty(self) -> bool {
        matches!(self, DutyKind::Ground | DutyKind::Flight)
    }

    /// Flight sector work
    pub fn is_flight(self) -> bool {
        matches!(self, DutyKind::Flight)
    }
}

/// A catalog entry describing a kind of assignable day-activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
pub struct DutyTemplate {
    /// Unique template key
    #[validate(length(min = 1, max = 64, message = "Template id must be 1-64 characters"))]
    pub id: String,
    /// Short display label (e.g. "例", "休", "早")
    #[validate(length(min = 1, max = 8, message = "Template code must be 1-8 characters"))]
    pub code: String,
    /// Full template name
    #[validate(length(min = 1, max = 128, message = "Template name must be 1-128 characters"))]
    pub name: String,
    pub kind: DutyKind,
    /// Duty start ("HH:MM", 24-hour clock), absent for non-timed duties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Duty end ("HH:MM"); numerically before `start_time` when the duty
    /// crosses midnight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

impl DutyTemplate {
    pub fn is_rest(&self) -> bool {
        self.kind.is_rest()
    }

    pub fn is_duty(&self) -> bool {
        self.kind.is_duty()
    }

    pub fn is_flight(&self) -> bool {
        self.kind.is_flight()
    }

    /// Both clock times are present
    pub fn is_timed(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_some()
    }
}

/// Duty templates keyed by id, preserving caller order
pub type DutyCatalog = IndexMap<String, DutyTemplate>;

/// Strict "HH:MM" shape check, applied at the API boundary only. The engine
/// itself degrades malformed times to 00:00.
pub fn is_clock_time(value: &str) -> bool {
    let Some((h, m)) = value.split_once(':') else {
        return false;
    };
    let (Ok(h), Ok(m)) = (h.parse::<u32>(), m.parse::<u32>()) else {
        return false;
    };
    h < 24 && m < 60
}
