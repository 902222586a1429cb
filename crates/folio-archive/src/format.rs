// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit card formatting
//!
//! Pure helpers invoked once per record at render time. None of them fail:
//! malformed input degrades to a passthrough or empty string.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

/// Number of characters kept by [`short_hash`]
pub const SHORT_HASH_LEN: usize = 7;

/// Display format for card dates (`May 10, 2023`)
const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a content date into a calendar date
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive `date time` forms.
/// Returns `None` when nothing matches.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

/// Render a content date as `<Mon> <day>, <year>`
///
/// Unparseable input is returned unchanged.
#[must_use]
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        None => {
            debug!(raw, "unparseable date, passing through");
            raw.to_string()
        }
    }
}

/// Extract a short hash from a commit-reference URL
///
/// Takes the final `/`-separated segment and keeps its first
/// [`SHORT_HASH_LEN`] characters. The segment is not validated.
#[must_use]
pub fn short_hash(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    let segment = url.rsplit('/').next().unwrap_or("");
    segment.chars().take(SHORT_HASH_LEN).collect()
}

/// Section badge text, e.g. `1 commit` or `12 commits`
#[must_use]
pub fn commit_count_label(count: usize) -> String {
    if count == 1 {
        "1 commit".to_string()
    } else {
        format!("{count} commits")
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: short_hash never yields more than SHORT_HASH_LEN characters
        #[test]
        fn prop_short_hash_bounded(url in ".*") {
            prop_assert!(short_hash(&url).chars().count() <= SHORT_HASH_LEN);
        }

        /// Property: short_hash is a prefix of the final path segment
        #[test]
        fn prop_short_hash_prefix_of_last_segment(
            prefix in "[a-z:/.]{0,30}",
            segment in "[0-9a-f]{0,40}"
        ) {
            let url = format!("{prefix}/{segment}");
            let hash = short_hash(&url);
            prop_assert!(segment.starts_with(&hash));
        }

        /// Property: format_date never panics and valid dates round-trip
        #[test]
        fn prop_format_date_valid(y in 1970i32..2100, m in 1u32..=12, d in 1u32..=28) {
            let raw = format!("{y:04}-{m:02}-{d:02}");
            let label = format_date(&raw);
            let year_suffix = format!(", {}", y);
            let day_part = format!(" {},", d);
            prop_assert!(label.ends_with(&year_suffix));
            prop_assert!(label.contains(&day_part));
        }

        /// Property: arbitrary input never panics
        #[test]
        fn prop_format_date_total(raw in ".*") {
            let _ = format_date(&raw);
        }
    }
}
