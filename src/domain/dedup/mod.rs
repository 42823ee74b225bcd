//! Duplicate-listing detection.
//!
//! A single synchronous pass over listings already fetched from the database:
//!
//! 1. [`normalizer::normalize`] turns a free-text name into a comparison form
//! 2. [`similarity::are_similar`] decides whether two normalized names match
//! 3. [`grouper::find_duplicate_groups`] buckets listings by region and clusters
//!    matching names within each bucket
//!
//! Nothing here performs I/O or keeps state between calls.

pub mod grouper;
pub mod normalizer;
pub mod similarity;

pub use grouper::find_duplicate_groups;
pub use normalizer::normalize;
pub use similarity::{are_similar, levenshtein};
