//! Shared application state injected into request handlers.

use std::sync::Arc;

use crate::application::services::{AnalyticsService, DataQualityService};

/// Services and settings shared by all handlers.
///
/// Cloned per request by Axum; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub data_quality_service: Arc<DataQualityService>,
    pub analytics_service: Arc<AnalyticsService>,
    /// Window used by the analytics overview when the request gives none.
    pub analytics_default_days: u32,
}

impl AppState {
    pub fn new(
        data_quality_service: Arc<DataQualityService>,
        analytics_service: Arc<AnalyticsService>,
        analytics_default_days: u32,
    ) -> Self {
        Self {
            data_quality_service,
            analytics_service,
            analytics_default_days,
        }
    }
}
