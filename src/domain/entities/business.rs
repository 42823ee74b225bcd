//! Domain entity representing a directory business listing.

use chrono::{DateTime, Utc};

/// A business listing as seen by the data-quality reports.
///
/// This is the typed boundary between the persistence layer and the
/// deduplication pass: rows are narrowed into this shape once, and the
/// reports only ever read from it.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessRecord {
    pub id: i64,
    pub name: String,
    /// Region grouping key. Listings without a region form their own bucket.
    pub region_id: Option<i64>,
    /// Display name of the joined region, when there is one.
    pub region_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_verified: bool,
    pub view_count: Option<i64>,
}

impl BusinessRecord {
    /// Creates a new BusinessRecord instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let business = BusinessRecord::new(
    ///     1,
    ///     "Golden Spoon".to_string(),
    ///     Some(7),
    ///     Some("Harbour District".to_string()),
    ///     Utc::now(),
    ///     true,
    ///     Some(120),
    /// );
    /// ```
    pub fn new(
        id: i64,
        name: String,
        region_id: Option<i64>,
        region_name: Option<String>,
        created_at: DateTime<Utc>,
        is_verified: bool,
        view_count: Option<i64>,
    ) -> Self {
        Self {
            id,
            name,
            region_id,
            region_name,
            created_at,
            is_verified,
            view_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_creation() {
        let now = Utc::now();
        let business = BusinessRecord::new(
            1,
            "Golden Spoon".to_string(),
            Some(7),
            Some("Harbour District".to_string()),
            now,
            true,
            Some(120),
        );

        assert_eq!(business.id, 1);
        assert_eq!(business.name, "Golden Spoon");
        assert_eq!(business.region_id, Some(7));
        assert_eq!(business.region_name.as_deref(), Some("Harbour District"));
        assert_eq!(business.created_at, now);
        assert!(business.is_verified);
        assert_eq!(business.view_count, Some(120));
    }

    #[test]
    fn test_business_without_region() {
        let business = BusinessRecord::new(
            2,
            "Nomad Tours".to_string(),
            None,
            None,
            Utc::now(),
            false,
            None,
        );

        assert!(business.region_id.is_none());
        assert!(business.region_name.is_none());
        assert!(business.view_count.is_none());
    }
}
