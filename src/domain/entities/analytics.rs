//! Period-over-period analytics values.

use chrono::{DateTime, Duration, Utc};

/// Half-open UTC interval `[from, to)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl DateRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// The `days`-long window ending at `end`.
    pub fn ending_at(end: DateTime<Utc>, days: u32) -> Self {
        Self {
            from: end - Duration::days(i64::from(days)),
            to: end,
        }
    }

    /// The window of equal length immediately before this one.
    pub fn preceding(&self) -> Self {
        let length = self.to - self.from;
        Self {
            from: self.from - length,
            to: self.from,
        }
    }
}

/// A metric measured over the current and the preceding window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricDelta {
    pub current: i64,
    pub previous: i64,
    pub change_percent: f64,
}

/// Listing growth summary for the admin dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsOverview {
    pub period_days: u32,
    pub current: DateRange,
    pub previous: DateRange,
    pub new_listings: MetricDelta,
    pub new_verified_listings: MetricDelta,
}
