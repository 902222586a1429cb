// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! folio-archive: contribution archive and job timeline logic for folio
//!
//! This library crate groups, filters and summarizes open-source contribution
//! records for the archive page, formats commit cards, and models the
//! job-history timeline. Everything here is pure and synchronous.

#![warn(missing_docs)]

//! # Example
//!
//! ```
//! use folio_archive::{ContributionRecord, FilterSelection, FilterState, compute_stats, group};
//!
//! let records = vec![
//!     ContributionRecord::new("A", "2023-05-10").with_component("Kernel"),
//!     ContributionRecord::new("B", "2023-05-11").with_component("Driver"),
//!     ContributionRecord::new("C", "2023-05-12").with_component("Kernel"),
//! ];
//! let grouped = group(&records);
//! let stats = compute_stats(&grouped);
//! assert_eq!(stats.count_for("Kernel"), 2);
//!
//! let mut filter = FilterState::new();
//! filter.set_filter(FilterSelection::category("Driver"));
//! assert_eq!(filter.visible(&grouped).total(), 1);
//! ```

pub mod content;
pub mod error;
pub mod filter;
pub mod format;
pub mod grouping;
pub mod jobs;
pub mod page;
pub mod record;
pub mod stats;
pub mod view;

pub use content::{load_jobs, load_records, sort_for_archive, sort_jobs};
pub use error::ArchiveError;
pub use filter::{FilterSelection, FilterState};
pub use format::{format_date, short_hash};
pub use grouping::{Bucket, GroupedRecords, group};
pub use jobs::{JobRecord, JobTimeline};
pub use page::{ArchivePage, ArchiveView, Highlight};
pub use record::{ContributionRecord, DEFAULT_CATEGORY};
pub use stats::{Stats, compute_stats};
pub use view::{ViewMode, ViewModeState};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::ArchiveError;
    pub use crate::filter::{FilterSelection, FilterState};
    pub use crate::grouping::{GroupedRecords, group};
    pub use crate::page::ArchivePage;
    pub use crate::record::ContributionRecord;
    pub use crate::stats::{Stats, compute_stats};
    pub use crate::view::{ViewMode, ViewModeState};
}
