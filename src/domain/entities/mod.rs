//! Core domain entities representing the directory data model.
//!
//! Entities are plain data structures without persistence or HTTP concerns.
//!
//! # Entity Types
//!
//! - [`BusinessRecord`] - A business listing, read-only input to the reports
//! - [`DuplicateGroup`] / [`DuplicateReport`] - Output of the duplicate scan
//! - [`DateRange`], [`MetricDelta`], [`AnalyticsOverview`] - Analytics values

pub mod analytics;
pub mod business;
pub mod duplicate;

pub use analytics::{AnalyticsOverview, DateRange, MetricDelta};
pub use business::BusinessRecord;
pub use duplicate::{DuplicateGroup, DuplicateReport};
