//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod analytics;
pub mod duplicates;
pub mod fallback;
pub mod health;

pub use analytics::analytics_overview_handler;
pub use duplicates::duplicates_handler;
pub use fallback::fallback_handler;
pub use health::health_handler;
