//! Job-history timeline
//!
//! The timeline keeps at most one entry expanded. The first entry starts
//! expanded; selecting the expanded entry collapses it and selecting any other
//! entry expands that one instead.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::view::{duration_ms, stagger_delay};

/// Reveal delay increment between timeline entries
pub const JOB_STAGGER: Duration = Duration::from_millis(100);

/// One position in the job history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Role title
    pub title: String,
    /// Employer name
    pub company: String,
    /// Work location
    #[serde(default)]
    pub location: String,
    /// Display date range, e.g. `May 2021 - Present`
    #[serde(default)]
    pub range: String,
    /// Employer link
    #[serde(default)]
    pub url: String,
    /// Rendered description body
    #[serde(default)]
    pub html: String,
    /// Sort key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl JobRecord {
    /// Create a job with a title and company
    #[must_use]
    pub fn new(title: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            location: String::new(),
            range: String::new(),
            url: String::new(),
            html: String::new(),
            date: None,
        }
    }

    /// Set the sort date
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the display range
    #[must_use]
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = range.into();
        self
    }
}

/// A timeline entry ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobItem<'a> {
    /// Position in the timeline
    pub index: usize,
    /// The job
    pub job: &'a JobRecord,
    /// Whether the description is shown
    pub expanded: bool,
    /// Entrance reveal delay in milliseconds
    pub reveal_delay_ms: u64,
}

/// Job timeline with a single expanded entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobTimeline {
    jobs: Vec<JobRecord>,
    expanded: Option<usize>,
}

impl JobTimeline {
    /// Build a timeline with the first entry expanded
    #[must_use]
    pub fn new(jobs: Vec<JobRecord>) -> Self {
        let expanded = if jobs.is_empty() { None } else { Some(0) };
        Self { jobs, expanded }
    }

    /// Jobs in display order
    #[must_use]
    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    /// Index of the expanded entry
    #[must_use]
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Check whether the entry at `index` is expanded
    #[must_use]
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Select an entry: collapse it if expanded, otherwise expand it
    ///
    /// Out-of-range indices are ignored. Returns the new expanded index.
    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        if index >= self.jobs.len() {
            debug!(index, len = self.jobs.len(), "ignoring toggle outside timeline");
            return self.expanded;
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
        self.expanded
    }

    /// Entries with expansion state and reveal delays
    #[must_use]
    pub fn items(&self) -> Vec<JobItem<'_>> {
        self.jobs
            .iter()
            .enumerate()
            .map(|(index, job)| JobItem {
                index,
                job,
                expanded: self.is_expanded(index),
                reveal_delay_ms: duration_ms(stagger_delay(index, JOB_STAGGER)),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn timeline() -> JobTimeline {
        JobTimeline::new(vec![
            JobRecord::new("Senior Engineer", "AMD"),
            JobRecord::new("Engineer", "Xilinx"),
            JobRecord::new("Intern", "Acme"),
        ])
    }

    #[test]
    fn test_first_entry_expanded_by_default() {
        assert_eq!(timeline().expanded(), Some(0));
    }

    #[test]
    fn test_empty_timeline_has_nothing_expanded() {
        assert_eq!(JobTimeline::new(vec![]).expanded(), None);
    }

    #[test]
    fn test_toggle_expanded_collapses() {
        let mut t = timeline();
        assert_eq!(t.toggle(0), None);
        assert!(!t.is_expanded(0));
    }

    #[test]
    fn test_toggle_other_switches() {
        let mut t = timeline();
        assert_eq!(t.toggle(2), Some(2));
        assert!(t.is_expanded(2));
        assert!(!t.is_expanded(0));
    }

    #[test]
    fn test_toggle_out_of_range_ignored() {
        let mut t = timeline();
        assert_eq!(t.toggle(9), Some(0));
    }

    #[test]
    fn test_items_stagger() {
        let t = timeline();
        let delays: Vec<u64> = t.items().iter().map(|i| i.reveal_delay_ms).collect();
        assert_eq!(delays, vec![0, 100, 200]);
        assert!(t.items()[0].expanded);
    }

    #[test]
    fn test_job_record_deserialize_defaults() {
        let job: JobRecord =
            serde_json::from_str(r#"{"title": "Engineer", "company": "Xilinx"}"#).expect("job");
        assert_eq!(job.location, "");
        assert_eq!(job.date, None);
    }
}
