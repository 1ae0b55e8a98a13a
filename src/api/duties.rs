//! Duty catalog endpoints (presets, per-duty metrics)

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    compliance::DutyMetrics,
    error::AppResult,
    models::duty::DutyTemplate,
};

/// List the built-in duty presets
#[utoipa::path(
    get,
    path = "/duties/presets",
    tag = "duties",
    responses(
        (status = 200, description = "Built-in duty templates", body = Vec<DutyTemplate>)
    )
)]
pub async fn list_presets(State(state): State<crate::AppState>) -> Json<Vec<DutyTemplate>> {
    Json(state.services.catalog.presets())
}

/// Compute display metrics for duty templates
#[derive(Debug, Deserialize, ToSchema)]
pub struct DutyMetricsRequest {
    pub duties: Vec<DutyTemplate>,
}

/// Metrics for one duty template
#[derive(Serialize, ToSchema)]
pub struct DutyMetricsEntry {
    /// Template id the metrics belong to
    pub id: String,
    /// Template display code
    pub code: String,
    #[serde(flatten)]
    pub metrics: DutyMetrics,
}

#[derive(Serialize, ToSchema)]
pub struct DutyMetricsResponse {
    pub metrics: Vec<DutyMetricsEntry>,
}

/// Per-duty FDP, required MRT and buffered end time
#[utoipa::path(
    post,
    path = "/duties/metrics",
    tag = "duties",
    request_body = DutyMetricsRequest,
    responses(
        (status = 200, description = "Derived duty metrics", body = DutyMetricsResponse),
        (status = 400, description = "Malformed templates", body = crate::error::ErrorResponse)
    )
)]
pub async fn duty_metrics(
    State(state): State<crate::AppState>,
    Json(data): Json<DutyMetricsRequest>,
) -> AppResult<Json<DutyMetricsResponse>> {
    state.services.catalog.check_templates(&data.duties)?;
    let metrics = data
        .duties
        .iter()
        .map(|duty| DutyMetricsEntry {
            id: duty.id.clone(),
            code: duty.code.clone(),
            metrics: state.services.compliance.duty_metrics(duty),
        })
        .collect();
    Ok(Json(DutyMetricsResponse { metrics }))
}
