//! Period-over-period listing analytics.

use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{AnalyticsOverview, DateRange, MetricDelta};
use crate::domain::repositories::BusinessRepository;
use crate::error::AppError;

/// Longest comparison window accepted, in days.
pub const MAX_PERIOD_DAYS: u32 = 365;

/// Service computing growth metrics for the admin dashboard.
///
/// Each metric is counted separately for the current window and the window
/// of equal length right before it; the delta is computed here, not in SQL.
pub struct AnalyticsService {
    repository: Arc<dyn BusinessRepository>,
}

impl AnalyticsService {
    /// Creates a new analytics service.
    pub fn new(repository: Arc<dyn BusinessRepository>) -> Self {
        Self { repository }
    }

    /// Builds the listing growth overview for the `period_days` ending at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `period_days` is outside `1..=365`.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn overview(
        &self,
        now: DateTime<Utc>,
        period_days: u32,
    ) -> Result<AnalyticsOverview, AppError> {
        if !(1..=MAX_PERIOD_DAYS).contains(&period_days) {
            return Err(AppError::bad_request(
                "Invalid analytics period",
                json!({"min": 1, "max": MAX_PERIOD_DAYS, "got": period_days}),
            ));
        }

        let current = DateRange::ending_at(now, period_days);
        let previous = current.preceding();

        let new_listings = self.delta(current, previous, false).await?;
        let new_verified_listings = self.delta(current, previous, true).await?;

        metrics::counter!("analytics_overview_requests_total").increment(1);

        Ok(AnalyticsOverview {
            period_days,
            current,
            previous,
            new_listings,
            new_verified_listings,
        })
    }

    async fn delta(
        &self,
        current: DateRange,
        previous: DateRange,
        verified_only: bool,
    ) -> Result<MetricDelta, AppError> {
        let current_count = self
            .repository
            .count_created_between(current, verified_only)
            .await?;
        let previous_count = self
            .repository
            .count_created_between(previous, verified_only)
            .await?;

        Ok(MetricDelta {
            current: current_count,
            previous: previous_count,
            change_percent: change_percent(current_count, previous_count),
        })
    }
}

/// Relative change from `previous` to `current`, in percent, to one decimal.
///
/// Growth from zero counts as 100%, and zero to zero as no change.
pub fn change_percent(current: i64, previous: i64) -> f64 {
    if previous == 0 {
        return if current > 0 { 100.0 } else { 0.0 };
    }

    let raw = (current - previous) as f64 / previous as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}
