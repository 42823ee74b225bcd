//! Repository trait for business listings.

use crate::domain::entities::{BusinessRecord, DateRange};
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to the directory's business listings.
///
/// Services receive this as `Arc<dyn BusinessRepository>`, so reports can be
/// exercised against mocks or in-memory fixtures without a database.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBusinessRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// Loads every listing with its joined region name.
    ///
    /// Listings are ordered by creation time, then id, so that the duplicate
    /// scan sees a stable order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_duplicate_scan(&self) -> Result<Vec<BusinessRecord>, AppError>;

    /// Counts listings created inside `range`.
    ///
    /// # Arguments
    ///
    /// - `range` - half-open `[from, to)` creation window
    /// - `verified_only` - if true, counts only verified listings
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_created_between(
        &self,
        range: DateRange,
        verified_only: bool,
    ) -> Result<i64, AppError>;

    /// Counts all listings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_all(&self) -> Result<i64, AppError>;
}
