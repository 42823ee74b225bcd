//! Handler for the analytics overview.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use chrono::Utc;
use serde_json::json;
use validator::Validate;

use crate::api::dto::analytics::{AnalyticsOverviewResponse, AnalyticsQueryParams};
use crate::error::AppError;
use crate::state::AppState;

/// Compares listing growth in the last `days` against the window before it.
///
/// # Endpoint
///
/// `GET /api/analytics/overview`
///
/// # Query Parameters
///
/// - `days` (optional): Window length, 1-365 (default: `ANALYTICS_DEFAULT_DAYS`)
///
/// # Errors
///
/// Returns 400 if `days` is not a number or is out of range.
/// Returns 500 on database errors.
pub async fn analytics_overview_handler(
    State(state): State<AppState>,
    query: Result<Query<AnalyticsQueryParams>, QueryRejection>,
) -> Result<Json<AnalyticsOverviewResponse>, AppError> {
    let Query(params) = query.map_err(|rejection| {
        AppError::bad_request(
            "Invalid query parameters",
            json!({ "errors": rejection.body_text() }),
        )
    })?;

    params.validate().map_err(|e| {
        AppError::bad_request("Invalid query parameters", json!({ "errors": e.to_string() }))
    })?;

    let days = params.days.unwrap_or(state.analytics_default_days);

    let overview = state.analytics_service.overview(Utc::now(), days).await?;

    Ok(Json(overview.into()))
}
