//! Roster compliance endpoints (validate, suggestions, day status)

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    compliance::suggest::DaySuggestionEntry,
    compliance::{days_in_month, DaySuggestion, Violation},
    error::{AppError, AppResult},
    models::duty::DutyTemplate,
    models::roster::{
        DayStatusRequest, PrefillWeekendsRequest, RosterMonth, SuggestionsRequest,
        ValidateRosterRequest,
    },
};

fn check_roster(
    state: &crate::AppState,
    catalog: &[DutyTemplate],
    roster: &RosterMonth,
) -> AppResult<()> {
    roster
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    state.services.catalog.check_templates(catalog)?;
    Ok(())
}

/// Month validation result: rendered advisory strings plus the structured form
#[derive(Serialize, ToSchema)]
pub struct ValidateRosterResponse {
    /// Human-readable violation messages, in rule order
    pub violations: Vec<String>,
    /// Structured violations for programmatic use
    pub details: Vec<Violation>,
}

/// Validate a month roster against the duty-time rules
#[utoipa::path(
    post,
    path = "/roster/validate",
    tag = "roster",
    request_body = ValidateRosterRequest,
    responses(
        (status = 200, description = "Validation result", body = ValidateRosterResponse),
        (status = 400, description = "Malformed payload", body = crate::error::ErrorResponse)
    )
)]
pub async fn validate_roster(
    State(state): State<crate::AppState>,
    Json(data): Json<ValidateRosterRequest>,
) -> AppResult<Json<ValidateRosterResponse>> {
    check_roster(&state, &data.catalog, &data.roster)?;
    let catalog = state.services.catalog.catalog_from(&data.catalog);
    let details = state.services.compliance.validate_month(&catalog, &data.roster);
    let violations = details.iter().map(ToString::to_string).collect();
    Ok(Json(ValidateRosterResponse { violations, details }))
}

#[derive(Serialize, ToSchema)]
pub struct SuggestionsResponse {
    /// One entry per unassigned weekday that has advice
    pub suggestions: Vec<DaySuggestionEntry>,
}

/// Advisory suggestions for the month's unassigned weekdays
#[utoipa::path(
    post,
    path = "/roster/suggestions",
    tag = "roster",
    request_body = SuggestionsRequest,
    responses(
        (status = 200, description = "Per-day suggestions", body = SuggestionsResponse),
        (status = 400, description = "Malformed payload", body = crate::error::ErrorResponse)
    )
)]
pub async fn roster_suggestions(
    State(state): State<crate::AppState>,
    Json(data): Json<SuggestionsRequest>,
) -> AppResult<Json<SuggestionsResponse>> {
    check_roster(&state, &data.catalog, &data.roster)?;
    let catalog = state.services.catalog.catalog_from(&data.catalog);
    let suggestions = state.services.compliance.suggestions(&catalog, &data.roster);
    Ok(Json(SuggestionsResponse { suggestions }))
}

#[derive(Serialize, ToSchema)]
pub struct DayStatusResponse {
    /// Day of month the status belongs to
    pub day: u32,
    /// Highlight advice, absent when the day is fine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DaySuggestion>,
}

/// Highlight check for a single assigned day
#[utoipa::path(
    post,
    path = "/roster/day-status",
    tag = "roster",
    request_body = DayStatusRequest,
    responses(
        (status = 200, description = "Day status", body = DayStatusResponse),
        (status = 400, description = "Malformed payload", body = crate::error::ErrorResponse)
    )
)]
pub async fn day_status(
    State(state): State<crate::AppState>,
    Json(data): Json<DayStatusRequest>,
) -> AppResult<Json<DayStatusResponse>> {
    check_roster(&state, &data.catalog, &data.roster)?;
    if data.day < 1 || data.day > days_in_month(data.roster.year, data.roster.month) {
        return Err(AppError::BadRequest(format!(
            "Day {} is outside {}-{:02}",
            data.day, data.roster.year, data.roster.month
        )));
    }
    let catalog = state.services.catalog.catalog_from(&data.catalog);
    let status = state
        .services
        .compliance
        .day_status(&catalog, &data.roster, data.day);
    Ok(Json(DayStatusResponse {
        day: data.day,
        status,
    }))
}

#[derive(Serialize, ToSchema)]
pub struct PrefillWeekendsResponse {
    /// Day of month -> duty template id to assign
    pub assignments: BTreeMap<u32, String>,
}

/// Weekend auto-population patch (Saturdays 休, Sundays 例)
#[utoipa::path(
    post,
    path = "/roster/prefill-weekends",
    tag = "roster",
    request_body = PrefillWeekendsRequest,
    responses(
        (status = 200, description = "Assignment patch", body = PrefillWeekendsResponse),
        (status = 400, description = "Malformed payload", body = crate::error::ErrorResponse)
    )
)]
pub async fn prefill_weekends(
    State(state): State<crate::AppState>,
    Json(data): Json<PrefillWeekendsRequest>,
) -> AppResult<Json<PrefillWeekendsResponse>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let assignments = state
        .services
        .compliance
        .prefill_weekends(data.year, data.month);
    Ok(Json(PrefillWeekendsResponse { assignments }))
}
