//! DTOs for the analytics overview.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::entities::{AnalyticsOverview, DateRange, MetricDelta};

/// Query parameters of `GET /api/analytics/overview`.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct AnalyticsQueryParams {
    /// Window length in days (defaults to the configured value).
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 365))]
    pub days: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsOverviewResponse {
    pub period_days: u32,
    pub current: PeriodInfo,
    pub previous: PeriodInfo,
    pub metrics: OverviewMetrics,
}

#[derive(Debug, Serialize)]
pub struct PeriodInfo {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct OverviewMetrics {
    pub new_listings: MetricInfo,
    pub new_verified_listings: MetricInfo,
}

#[derive(Debug, Serialize)]
pub struct MetricInfo {
    pub current: i64,
    pub previous: i64,
    pub change_percent: f64,
}

impl From<DateRange> for PeriodInfo {
    fn from(r: DateRange) -> Self {
        Self {
            from: r.from,
            to: r.to,
        }
    }
}

impl From<MetricDelta> for MetricInfo {
    fn from(m: MetricDelta) -> Self {
        Self {
            current: m.current,
            previous: m.previous,
            change_percent: m.change_percent,
        }
    }
}

impl From<AnalyticsOverview> for AnalyticsOverviewResponse {
    fn from(o: AnalyticsOverview) -> Self {
        Self {
            period_days: o.period_days,
            current: o.current.into(),
            previous: o.previous.into(),
            metrics: OverviewMetrics {
                new_listings: o.new_listings.into(),
                new_verified_listings: o.new_verified_listings.into(),
            },
        }
    }
}
