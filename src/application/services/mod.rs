//! Business logic services for the application layer.

pub mod analytics_service;
pub mod data_quality_service;

pub use analytics_service::AnalyticsService;
pub use data_quality_service::DataQualityService;
