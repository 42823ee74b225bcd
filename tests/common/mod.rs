#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use directory_insights::application::services::{AnalyticsService, DataQualityService};
use directory_insights::domain::entities::{BusinessRecord, DateRange};
use directory_insights::domain::repositories::BusinessRepository;
use directory_insights::error::AppError;
use directory_insights::state::AppState;
use serde_json::json;
use std::sync::Arc;

/// Listings held in memory, filtered the same way the SQL queries filter.
pub struct InMemoryBusinessRepository {
    businesses: Vec<BusinessRecord>,
}

impl InMemoryBusinessRepository {
    pub fn new(businesses: Vec<BusinessRecord>) -> Self {
        Self { businesses }
    }
}

#[async_trait]
impl BusinessRepository for InMemoryBusinessRepository {
    async fn list_for_duplicate_scan(&self) -> Result<Vec<BusinessRecord>, AppError> {
        Ok(self.businesses.clone())
    }

    async fn count_created_between(
        &self,
        range: DateRange,
        verified_only: bool,
    ) -> Result<i64, AppError> {
        Ok(self
            .businesses
            .iter()
            .filter(|b| b.created_at >= range.from && b.created_at < range.to)
            .filter(|b| !verified_only || b.is_verified)
            .count() as i64)
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        Ok(self.businesses.len() as i64)
    }
}

/// Repository whose every call fails like an unreachable database.
pub struct UnavailableBusinessRepository;

#[async_trait]
impl BusinessRepository for UnavailableBusinessRepository {
    async fn list_for_duplicate_scan(&self) -> Result<Vec<BusinessRecord>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn count_created_between(
        &self,
        _range: DateRange,
        _verified_only: bool,
    ) -> Result<i64, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }
}

pub fn business(
    id: i64,
    name: &str,
    region: Option<(i64, &str)>,
    created_at: DateTime<Utc>,
    is_verified: bool,
) -> BusinessRecord {
    BusinessRecord::new(
        id,
        name.to_string(),
        region.map(|(id, _)| id),
        region.map(|(_, name)| name.to_string()),
        created_at,
        is_verified,
        Some(id * 10),
    )
}

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap()
}

/// The four-listing scenario: two matching names in R1, an unrelated one in
/// R1, and a same-named listing in R2.
pub fn golden_spoon_listings() -> Vec<BusinessRecord> {
    let t = fixed_time();
    vec![
        business(1, "Golden Spoon Restaurant", Some((1, "R1")), t, false),
        business(2, "Golden Spoon", Some((1, "R1")), t, true),
        business(3, "Blue Moon Cafe", Some((1, "R1")), t, false),
        business(4, "Golden Spoon Restaurant", Some((2, "R2")), t, false),
    ]
}

pub fn create_test_state(repository: Arc<dyn BusinessRepository>) -> AppState {
    AppState::new(
        Arc::new(DataQualityService::new(repository.clone())),
        Arc::new(AnalyticsService::new(repository)),
        30,
    )
}

pub fn in_memory_state(businesses: Vec<BusinessRecord>) -> AppState {
    create_test_state(Arc::new(InMemoryBusinessRepository::new(businesses)))
}

pub fn unavailable_state() -> AppState {
    create_test_state(Arc::new(UnavailableBusinessRepository))
}
