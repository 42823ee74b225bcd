//! Handler for the duplicate listing report.

use axum::{Json, extract::State};

use crate::api::dto::duplicates::DuplicateReportResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Scans the directory for likely duplicate listings.
///
/// # Endpoint
///
/// `GET /api/data-quality/duplicates`
///
/// # Response
///
/// ```json
/// {
///   "summary": { "scanned": 4, "groups": 1, "duplicate_records": 2 },
///   "groups": [
///     {
///       "region_id": 1,
///       "region_name": "Harbour District",
///       "members": [
///         { "id": 1, "name": "Golden Spoon Restaurant", "created_at": "...", "is_verified": false, "view_count": 12 },
///         { "id": 2, "name": "Golden Spoon", "created_at": "...", "is_verified": true, "view_count": null }
///       ]
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 500 if listings cannot be loaded.
pub async fn duplicates_handler(
    State(state): State<AppState>,
) -> Result<Json<DuplicateReportResponse>, AppError> {
    let report = state.data_quality_service.find_duplicates().await?;

    Ok(Json(report.into()))
}
