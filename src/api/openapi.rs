//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{duties, health, roster};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CrewRoster API",
        version = "1.1.0",
        description = "Cabin Crew Scheduling Compliance REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "CrewRoster Team", email = "dev@crewroster.app")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Duties
        duties::list_presets,
        duties::duty_metrics,
        // Roster
        roster::validate_roster,
        roster::roster_suggestions,
        roster::day_status,
        roster::prefill_weekends,
    ),
    components(
        schemas(
            // Duties
            crate::models::duty::DutyTemplate,
            crate::models::duty::DutyKind,
            crate::compliance::DutyMetrics,
            duties::DutyMetricsRequest,
            duties::DutyMetricsEntry,
            duties::DutyMetricsResponse,
            // Roster
            crate::models::roster::RosterMonth,
            crate::models::roster::ValidateRosterRequest,
            crate::models::roster::SuggestionsRequest,
            crate::models::roster::DayStatusRequest,
            crate::models::roster::PrefillWeekendsRequest,
            crate::compliance::Violation,
            crate::compliance::DaySuggestion,
            crate::compliance::SuggestionKind,
            crate::compliance::suggest::DaySuggestionEntry,
            roster::ValidateRosterResponse,
            roster::SuggestionsResponse,
            roster::DayStatusResponse,
            roster::PrefillWeekendsResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "duties", description = "Duty catalog and metrics"),
        (name = "roster", description = "Roster compliance checks and suggestions")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
