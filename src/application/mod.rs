//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::data_quality_service::DataQualityService`] - Duplicate listing reports
//! - [`services::analytics_service::AnalyticsService`] - Period-over-period growth metrics

pub mod services;
