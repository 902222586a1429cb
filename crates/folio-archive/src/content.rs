// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Content loading
//!
//! Records come from JSON content files. A path may be a single file holding
//! either one record or an array of records, or a directory whose `*.json`
//! files are read in file-name order. Loading preserves file order; callers
//! that want the archive's canonical order use [`sort_for_archive`].

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ArchiveError;
use crate::jobs::JobRecord;
use crate::record::ContributionRecord;

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

/// Parse records from a JSON string holding one record or an array
///
/// # Errors
///
/// Returns `serde_json::Error` if the text is not valid for `T`.
pub fn parse_content<T: DeserializeOwned>(json: &str) -> Result<Vec<T>, serde_json::Error> {
    serde_json::from_str::<OneOrMany<T>>(json).map(OneOrMany::into_vec)
}

/// Load records of any content type from a file or directory
///
/// # Errors
///
/// Returns `ArchiveError::ContentNotFound` if the path does not exist,
/// `ArchiveError::Io` if it cannot be read and `ArchiveError::Json` if a
/// file does not parse.
pub fn load_content<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>, ArchiveError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ArchiveError::ContentNotFound {
            path: path.to_path_buf(),
        });
    }

    if path.is_dir() {
        let mut items = Vec::new();
        for file in content_files(path)? {
            items.extend(load_file(&file)?);
        }
        debug!(path = %path.display(), count = items.len(), "loaded content directory");
        Ok(items)
    } else {
        let items = load_file(path)?;
        debug!(path = %path.display(), count = items.len(), "loaded content file");
        Ok(items)
    }
}

/// Load contribution records for the archive page
///
/// # Errors
///
/// See [`load_content`].
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<ContributionRecord>, ArchiveError> {
    load_content(path)
}

/// Load job-history records
///
/// # Errors
///
/// See [`load_content`].
pub fn load_jobs(path: impl AsRef<Path>) -> Result<Vec<JobRecord>, ArchiveError> {
    load_content(path)
}

fn content_files(dir: &Path) -> Result<Vec<PathBuf>, ArchiveError> {
    let io_err = |source| ArchiveError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        } else {
            debug!(path = %path.display(), "skipping non-content entry");
        }
    }
    files.sort();
    Ok(files)
}

fn load_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ArchiveError> {
    let text = fs::read_to_string(path).map_err(|source| ArchiveError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if text.trim().is_empty() {
        warn!(path = %path.display(), "empty content file");
        return Ok(Vec::new());
    }
    parse_content(&text).map_err(|source| ArchiveError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Newest first; unparseable dates sort after parseable ones
fn compare_dates_desc(a: &str, b: &str) -> Ordering {
    use crate::format::parse_date;
    match (parse_date(a), parse_date(b)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.cmp(a),
    }
}

/// Sort records the way the archive lists them: category ascending, then newest first
///
/// The sort is stable, so records with equal keys keep their loaded order.
pub fn sort_for_archive(records: &mut [ContributionRecord]) {
    records.sort_by(|a, b| {
        a.category()
            .cmp(b.category())
            .then_with(|| compare_dates_desc(&a.date, &b.date))
    });
}

/// Sort jobs newest first by their `date` key
pub fn sort_jobs(jobs: &mut [JobRecord]) {
    jobs.sort_by(|a, b| {
        compare_dates_desc(
            a.date.as_deref().unwrap_or(""),
            b.date.as_deref().unwrap_or(""),
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_parse_content_array() {
        let json = r#"[
            {"title": "A", "date": "2024-01-01", "component": "Kernel"},
            {"title": "B", "date": "2024-01-02"}
        ]"#;
        let records: Vec<ContributionRecord> = parse_content(json).expect("parse");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].category(), "Other");
    }

    #[test]
    fn test_parse_content_single() {
        let json = r#"{"title": "A", "date": "2024-01-01"}"#;
        let records: Vec<ContributionRecord> = parse_content(json).expect("parse");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_parse_content_invalid() {
        let result: Result<Vec<ContributionRecord>, _> = parse_content("{\"date\": 3}");
        assert!(result.is_err());
    }

    #[test]
    fn test_sort_for_archive() {
        let mut records = vec![
            ContributionRecord::new("old kernel", "2021-01-01").with_component("Linux kernel"),
            ContributionRecord::new("dt", "2022-01-01").with_component("Device tree"),
            ContributionRecord::new("new kernel", "2023-06-01").with_component("Linux kernel"),
            ContributionRecord::new("undated kernel", "soon").with_component("Linux kernel"),
        ];
        sort_for_archive(&mut records);
        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["dt", "new kernel", "old kernel", "undated kernel"]
        );
    }

    #[test]
    fn test_sort_jobs_newest_first() {
        let mut jobs = vec![
            JobRecord::new("Intern", "Acme").with_date("2018-06-01"),
            JobRecord::new("Engineer", "Xilinx").with_date("2021-03-01"),
            JobRecord::new("Undated", "Nowhere"),
        ];
        sort_jobs(&mut jobs);
        let titles: Vec<&str> = jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Engineer", "Intern", "Undated"]);
    }

    #[test]
    fn test_load_content_missing_path() {
        let result = load_records("/nonexistent/folio/content/12345");
        assert!(matches!(result, Err(ArchiveError::ContentNotFound { .. })));
    }
}
