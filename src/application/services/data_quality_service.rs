//! Directory data-quality reports.

use std::sync::Arc;
use std::time::Instant;

use crate::domain::dedup::find_duplicate_groups;
use crate::domain::entities::DuplicateReport;
use crate::domain::repositories::BusinessRepository;
use crate::error::AppError;

/// Service producing data-quality reports over the business listings.
///
/// Every call reloads the full listing set and recomputes from scratch;
/// nothing is cached between calls.
pub struct DataQualityService {
    repository: Arc<dyn BusinessRepository>,
}

impl DataQualityService {
    /// Creates a new data-quality service.
    pub fn new(repository: Arc<dyn BusinessRepository>) -> Self {
        Self { repository }
    }

    /// Scans all listings for likely duplicates within each region.
    ///
    /// The scan itself cannot fail. If loading the listings fails, the error is
    /// returned and no scan runs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_duplicates(&self) -> Result<DuplicateReport, AppError> {
        let businesses = self.repository.list_for_duplicate_scan().await?;

        let started = Instant::now();
        let groups = find_duplicate_groups(&businesses);
        let report = DuplicateReport::new(businesses.len(), groups);

        metrics::counter!("data_quality_duplicate_scans_total").increment(1);
        metrics::histogram!("data_quality_duplicate_groups").record(report.groups.len() as f64);

        tracing::info!(
            scanned = report.scanned,
            groups = report.groups.len(),
            duplicate_records = report.duplicate_records,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Duplicate scan finished"
        );

        Ok(report)
    }

    /// Counts all listings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_businesses(&self) -> Result<i64, AppError> {
        self.repository.count_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BusinessRecord;
    use crate::domain::repositories::MockBusinessRepository;
    use chrono::Utc;
    use serde_json::json;

    fn business(id: i64, name: &str, region_id: i64) -> BusinessRecord {
        BusinessRecord::new(
            id,
            name.to_string(),
            Some(region_id),
            Some(format!("R{region_id}")),
            Utc::now(),
            false,
            None,
        )
    }

    #[tokio::test]
    async fn test_find_duplicates_success() {
        let mut mock_repo = MockBusinessRepository::new();

        let listings = vec![
            business(1, "Golden Spoon Restaurant", 1),
            business(2, "Golden Spoon", 1),
            business(3, "Blue Moon Cafe", 1),
            business(4, "Golden Spoon Restaurant", 2),
        ];

        mock_repo
            .expect_list_for_duplicate_scan()
            .times(1)
            .returning(move || Ok(listings.clone()));

        let service = DataQualityService::new(Arc::new(mock_repo));

        let result = service.find_duplicates().await;

        assert!(result.is_ok());
        let report = result.unwrap();
        assert_eq!(report.scanned, 4);
        assert_eq!(report.duplicate_records, 2);
        assert_eq!(report.groups.len(), 1);
        assert_eq!(report.groups[0].member_ids(), vec![1, 2]);
        assert_eq!(report.groups[0].region_name.as_deref(), Some("R1"));
    }

    #[tokio::test]
    async fn test_find_duplicates_empty_directory() {
        let mut mock_repo = MockBusinessRepository::new();

        mock_repo
            .expect_list_for_duplicate_scan()
            .times(1)
            .returning(|| Ok(vec![]));

        let service = DataQualityService::new(Arc::new(mock_repo));

        let report = service.find_duplicates().await.unwrap();

        assert_eq!(report.scanned, 0);
        assert!(report.groups.is_empty());
    }

    #[tokio::test]
    async fn test_find_duplicates_fetch_error() {
        let mut mock_repo = MockBusinessRepository::new();

        mock_repo
            .expect_list_for_duplicate_scan()
            .times(1)
            .returning(|| Err(AppError::internal("Database error", json!({}))));

        let service = DataQualityService::new(Arc::new(mock_repo));

        let result = service.find_duplicates().await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_count_businesses() {
        let mut mock_repo = MockBusinessRepository::new();

        mock_repo.expect_count_all().times(1).returning(|| Ok(42));

        let service = DataQualityService::new(Arc::new(mock_repo));

        assert_eq!(service.count_businesses().await.unwrap(), 42);
    }
}
