//! Domain layer containing business entities and logic.
//!
//! Defines entities, repository interfaces, and the duplicate-detection pass,
//! independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`dedup`] - Name normalization, similarity and region grouping
//!
//! # Duplicate Scan Flow
//!
//! 1. [`crate::application::services::DataQualityService`] loads listings via
//!    [`repositories::BusinessRepository`]
//! 2. [`dedup::find_duplicate_groups`] buckets them by region and clusters
//!    similar names
//! 3. The report is returned to the API or CLI and discarded after rendering

pub mod dedup;
pub mod entities;
pub mod repositories;
