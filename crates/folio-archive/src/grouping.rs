// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Grouping contribution records by category
//!
//! [`group`] makes a single pass over the records in source order. Bucket
//! order is the order in which categories first appear; record order inside
//! a bucket is source order. Nothing is sorted here.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::record::ContributionRecord;

/// Records sharing one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    /// Category name
    pub category: String,
    /// Records in source order
    pub records: Vec<ContributionRecord>,
}

impl Bucket {
    /// Number of records in the bucket
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the bucket holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Ordered mapping from category name to its records
#[derive(Debug, Clone, Default)]
pub struct GroupedRecords {
    buckets: Vec<Bucket>,
    index: HashMap<String, usize>,
}

impl PartialEq for GroupedRecords {
    fn eq(&self, other: &Self) -> bool {
        self.buckets == other.buckets
    }
}

impl Eq for GroupedRecords {}

impl GroupedRecords {
    /// Create an empty mapping
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its category's bucket, creating the bucket on first use
    pub fn push(&mut self, record: ContributionRecord) {
        let category = record.category();
        match self.index.get(category) {
            Some(&i) => self.buckets[i].records.push(record),
            None => {
                let category = category.to_string();
                self.index.insert(category.clone(), self.buckets.len());
                self.buckets.push(Bucket {
                    category,
                    records: vec![record],
                });
            }
        }
    }

    /// Insert a whole bucket, replacing any bucket with the same category
    pub(crate) fn insert_bucket(&mut self, bucket: Bucket) {
        match self.index.get(&bucket.category) {
            Some(&i) => self.buckets[i] = bucket,
            None => {
                self.index.insert(bucket.category.clone(), self.buckets.len());
                self.buckets.push(bucket);
            }
        }
    }

    /// Records for a category, if present
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[ContributionRecord]> {
        self.bucket(category).map(|b| b.records.as_slice())
    }

    /// Bucket for a category, if present
    #[must_use]
    pub fn bucket(&self, category: &str) -> Option<&Bucket> {
        self.index.get(category).map(|&i| &self.buckets[i])
    }

    /// Check whether a category has a bucket
    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.index.contains_key(category)
    }

    /// Bucket size for a category, or 0 if absent
    #[must_use]
    pub fn count_for(&self, category: &str) -> usize {
        self.bucket(category).map_or(0, Bucket::len)
    }

    /// Category names in first-appearance order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|b| b.category.as_str())
    }

    /// Buckets in first-appearance order
    #[must_use]
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Iterate `(category, records)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ContributionRecord])> {
        self.buckets
            .iter()
            .map(|b| (b.category.as_str(), b.records.as_slice()))
    }

    /// Number of buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Check if there are no buckets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of records across all buckets
    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }
}

impl FromIterator<ContributionRecord> for GroupedRecords {
    fn from_iter<I: IntoIterator<Item = ContributionRecord>>(iter: I) -> Self {
        let mut grouped = Self::new();
        for record in iter {
            grouped.push(record);
        }
        grouped
    }
}

impl Serialize for GroupedRecords {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for bucket in &self.buckets {
            map.serialize_entry(&bucket.category, &bucket.records)?;
        }
        map.end()
    }
}

/// Group records by category in a single pass
#[must_use]
pub fn group(records: &[ContributionRecord]) -> GroupedRecords {
    records.iter().cloned().collect()
}
