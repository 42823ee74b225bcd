//! Output types of the duplicate-listing scan.

use super::BusinessRecord;

/// A cluster of listings in one region that likely describe the same business.
///
/// Always holds at least two members, and every member shares `region_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateGroup {
    pub region_id: Option<i64>,
    pub region_name: Option<String>,
    pub members: Vec<BusinessRecord>,
}

impl DuplicateGroup {
    /// Ids of the grouped listings, in discovery order.
    pub fn member_ids(&self) -> Vec<i64> {
        self.members.iter().map(|m| m.id).collect()
    }
}

/// Result of a single duplicate scan over the whole directory.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateReport {
    /// Number of listings fed into the scan.
    pub scanned: usize,
    /// Total number of listings that ended up in some group.
    pub duplicate_records: usize,
    pub groups: Vec<DuplicateGroup>,
}

impl DuplicateReport {
    pub fn new(scanned: usize, groups: Vec<DuplicateGroup>) -> Self {
        let duplicate_records = groups.iter().map(|g| g.members.len()).sum();
        Self {
            scanned,
            duplicate_records,
            groups,
        }
    }
}
