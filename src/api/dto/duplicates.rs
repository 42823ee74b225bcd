//! DTOs for the duplicate listing report.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{BusinessRecord, DuplicateGroup, DuplicateReport};

/// Response of `GET /api/data-quality/duplicates`.
#[derive(Debug, Serialize)]
pub struct DuplicateReportResponse {
    pub summary: DuplicateSummary,
    pub groups: Vec<DuplicateGroupItem>,
}

/// Aggregate numbers for the scan.
#[derive(Debug, Serialize)]
pub struct DuplicateSummary {
    pub scanned: usize,
    pub groups: usize,
    pub duplicate_records: usize,
}

/// One cluster of likely duplicates within a region.
#[derive(Debug, Serialize)]
pub struct DuplicateGroupItem {
    pub region_id: Option<i64>,
    pub region_name: Option<String>,
    pub members: Vec<BusinessItem>,
}

/// Listing fields shown next to each duplicate candidate.
#[derive(Debug, Serialize)]
pub struct BusinessItem {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub is_verified: bool,
    pub view_count: Option<i64>,
}

impl From<BusinessRecord> for BusinessItem {
    fn from(b: BusinessRecord) -> Self {
        Self {
            id: b.id,
            name: b.name,
            created_at: b.created_at,
            is_verified: b.is_verified,
            view_count: b.view_count,
        }
    }
}

impl From<DuplicateGroup> for DuplicateGroupItem {
    fn from(g: DuplicateGroup) -> Self {
        Self {
            region_id: g.region_id,
            region_name: g.region_name,
            members: g.members.into_iter().map(BusinessItem::from).collect(),
        }
    }
}

impl From<DuplicateReport> for DuplicateReportResponse {
    fn from(report: DuplicateReport) -> Self {
        Self {
            summary: DuplicateSummary {
                scanned: report.scanned,
                groups: report.groups.len(),
                duplicate_records: report.duplicate_records,
            },
            groups: report
                .groups
                .into_iter()
                .map(DuplicateGroupItem::from)
                .collect(),
        }
    }
}
