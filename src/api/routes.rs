//! API route configuration.

use crate::api::handlers::{analytics_overview_handler, duplicates_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Report routes mounted under `/api`.
///
/// # Endpoints
///
/// - `GET /data-quality/duplicates` - Likely duplicate listings grouped by region
/// - `GET /analytics/overview`      - Period-over-period listing growth
pub fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/data-quality/duplicates", get(duplicates_handler))
        .route("/analytics/overview", get(analytics_overview_handler))
}
