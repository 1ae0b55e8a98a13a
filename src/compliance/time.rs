//! Clock-time arithmetic and per-duty metrics (FDP, MRT)

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::duty::DutyTemplate;

/// Minutes in a day
pub const DAY_MINUTES: i32 = 24 * 60;
/// Mandatory post-flight administrative buffer, added to a flight duty's end
pub const POST_FLIGHT_BUFFER_MINUTES: i32 = 30;

/// Parse "HH:MM" into minutes since midnight, in [0, 1439].
/// Empty or malformed input degrades to 0.
pub fn time_to_minutes(hhmm: &str) -> i32 {
    let Some((h, m)) = hhmm.split_once(':') else {
        return 0;
    };
    let (Ok(h), Ok(m)) = (h.trim().parse::<i32>(), m.trim().parse::<i32>()) else {
        return 0;
    };
    if !(0..24).contains(&h) || !(0..60).contains(&m) {
        return 0;
    }
    h * 60 + m
}

/// Render minutes since midnight as zero-padded "HH:MM".
/// Does not wrap past 24:00 itself; callers normalize.
pub fn minutes_to_time(minutes: i32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Render a duration as "{h}h {m}m"
pub fn format_duration(minutes: i32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

fn opt_minutes(time: Option<&str>) -> i32 {
    time.map(time_to_minutes).unwrap_or(0)
}

/// End of duty in minutes, including the post-flight buffer for flight
/// duties, wrapping past midnight. `None` when the duty has no end time.
pub fn effective_end_minutes(duty: &DutyTemplate) -> Option<i32> {
    let end = time_to_minutes(duty.end_time.as_deref()?);
    if duty.is_flight() {
        Some((end + POST_FLIGHT_BUFFER_MINUTES) % DAY_MINUTES)
    } else {
        Some(end)
    }
}

/// Effective end as "HH:MM" for display
pub fn effective_end_time(duty: &DutyTemplate) -> Option<String> {
    effective_end_minutes(duty).map(minutes_to_time)
}

/// Flight Duty Period in minutes. 0 for non-flight duties and duties with
/// no end time; a raw end before the raw start means the duty crosses
/// midnight and gets 24h added.
pub fn flight_duty_period(duty: &DutyTemplate) -> i32 {
    if !duty.is_flight() {
        return 0;
    }
    let Some(end) = duty.end_time.as_deref() else {
        return 0;
    };
    let start = opt_minutes(duty.start_time.as_deref());
    let mut fdp = time_to_minutes(end) - start;
    if fdp < 0 {
        fdp += DAY_MINUTES;
    }
    fdp
}

/// Required Minimum Rest Time after a duty, as a regulatory step function
/// of its Flight Duty Period. Boundaries are inclusive of the lower bucket.
pub fn minimum_rest_time(fdp_minutes: i32) -> i32 {
    if fdp_minutes <= 8 * 60 {
        11 * 60
    } else if fdp_minutes <= 12 * 60 {
        12 * 60
    } else if fdp_minutes <= 16 * 60 {
        20 * 60
    } else {
        24 * 60
    }
}

/// Derived display metrics for one duty template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DutyMetrics {
    /// Flight Duty Period in minutes
    pub fdp_minutes: i32,
    /// Required Minimum Rest Time in minutes
    pub minimum_rest_minutes: i32,
    /// Duty end including the post-flight buffer, "HH:MM"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_end_time: Option<String>,
}

pub fn duty_metrics(duty: &DutyTemplate) -> DutyMetrics {
    let fdp = flight_duty_period(duty);
    DutyMetrics {
        fdp_minutes: fdp,
        minimum_rest_minutes: minimum_rest_time(fdp),
        effective_end_time: effective_end_time(duty),
    }
}
