//! Summary statistics for the archive header
//!
//! Stats are always computed from the full grouped dataset. The active filter
//! has no input here, so changing it never changes the displayed totals.

use serde::Serialize;

use crate::grouping::GroupedRecords;

/// Aggregate counts over grouped records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Total number of records
    pub total: usize,
    /// Number of distinct categories
    pub category_count: usize,
    /// Per-category counts in bucket order
    pub per_category: Vec<(String, usize)>,
}

impl Stats {
    /// Count for a category, or 0 if it has no bucket
    #[must_use]
    pub fn count_for(&self, category: &str) -> usize {
        self.per_category
            .iter()
            .find(|(name, _)| name == category)
            .map_or(0, |&(_, n)| n)
    }
}

/// Compute stats from grouped records
#[must_use]
pub fn compute_stats(grouped: &GroupedRecords) -> Stats {
    let per_category: Vec<(String, usize)> = grouped
        .buckets()
        .iter()
        .map(|b| (b.category.clone(), b.len()))
        .collect();
    Stats {
        total: per_category.iter().map(|(_, n)| n).sum(),
        category_count: per_category.len(),
        per_category,
    }
}
