//! Region-scoped clustering of similar listings.

use std::collections::HashMap;

use super::normalizer::normalize;
use super::similarity::are_similar;
use crate::domain::entities::{BusinessRecord, DuplicateGroup};

/// Groups listings that likely describe the same business.
///
/// # Algorithm
///
/// 1. Bucket listings by `region_id`, in order of first appearance. Listings
///    without a region share one bucket and are only compared with each other.
/// 2. Within a bucket, walk listings in input order. Each listing not yet
///    claimed by a group starts a candidate group and claims every later,
///    unclaimed listing whose normalized name [`are_similar`] to its own.
/// 3. Candidates with at least two members are emitted.
///
/// Claimed listings are never reconsidered, so groups do not overlap. The
/// clustering is not transitive: if A matches B and B matches C but A does
/// not match C, C stays out of A's group and may start its own.
///
/// Groups come back in bucket order, then discovery order. The input is not
/// modified; members are cloned into the result.
pub fn find_duplicate_groups(businesses: &[BusinessRecord]) -> Vec<DuplicateGroup> {
    let mut groups = Vec::new();

    for (region_id, bucket) in bucket_by_region(businesses) {
        let normalized: Vec<String> = bucket.iter().map(|b| normalize(&b.name)).collect();
        let mut processed = vec![false; bucket.len()];

        for i in 0..bucket.len() {
            if processed[i] {
                continue;
            }

            let mut members = vec![bucket[i].clone()];
            for j in (i + 1)..bucket.len() {
                if !processed[j] && are_similar(&normalized[i], &normalized[j]) {
                    members.push(bucket[j].clone());
                    processed[j] = true;
                }
            }
            processed[i] = true;

            if members.len() >= 2 {
                let region_name = members.iter().find_map(|m| m.region_name.clone());
                groups.push(DuplicateGroup {
                    region_id,
                    region_name,
                    members,
                });
            }
        }
    }

    groups
}

fn bucket_by_region(businesses: &[BusinessRecord]) -> Vec<(Option<i64>, Vec<&BusinessRecord>)> {
    let mut index: HashMap<Option<i64>, usize> = HashMap::new();
    let mut buckets: Vec<(Option<i64>, Vec<&BusinessRecord>)> = Vec::new();

    for business in businesses {
        let slot = *index.entry(business.region_id).or_insert_with(|| {
            buckets.push((business.region_id, Vec::new()));
            buckets.len() - 1
        });
        buckets[slot].1.push(business);
    }

    buckets
}
