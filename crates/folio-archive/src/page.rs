// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Archive page container
//!
//! [`ArchivePage`] owns the loaded records and the derived state for one page
//! view: grouped records, stats, filter and view mode. Grouping and stats are
//! recomputed only when the records change; the filter and view mode only
//! affect [`ArchivePage::render`].
//!
//! # Example
//!
//! ```
//! use folio_archive::{ArchivePage, ContributionRecord, FilterSelection};
//!
//! let mut page = ArchivePage::new(vec![
//!     ContributionRecord::new("A", "2023-05-10").with_component("Kernel"),
//!     ContributionRecord::new("B", "2023-05-11").with_component("Driver"),
//! ]);
//! page.set_filter(FilterSelection::category("Driver"));
//! assert_eq!(page.visible().total(), 1);
//! assert_eq!(page.stats().total, 2);
//! ```

use serde::Serialize;
use tracing::debug;

use crate::filter::{FilterSelection, FilterState};
use crate::format::commit_count_label;
use crate::grouping::{GroupedRecords, group};
use crate::record::ContributionRecord;
use crate::stats::{Stats, compute_stats};
use crate::view::{ViewMode, ViewModeState, duration_ms};

/// A category whose count gets its own summary card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    /// Category name looked up in the grouped records
    pub category: String,
    /// Card label
    pub label: String,
}

impl Highlight {
    /// Create a highlight
    #[must_use]
    pub fn new(category: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            label: label.into(),
        }
    }
}

/// Highlights shown when none are configured
#[must_use]
pub fn default_highlights() -> Vec<Highlight> {
    vec![
        Highlight::new("Linux kernel", "Kernel Patches"),
        Highlight::new("Userspace driver", "Driver Commits"),
    ]
}

/// Summary card in the page header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    /// Caption
    pub label: String,
    /// Number shown
    pub value: usize,
}

/// Filter button with its count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterButton {
    /// Button text
    pub label: String,
    /// Selection applied when pressed
    pub selection: FilterSelection,
    /// Records behind the button
    pub count: usize,
    /// Whether this is the current selection
    pub active: bool,
}

/// One contribution card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitCard {
    /// Formatted date
    pub date: String,
    /// Contribution title
    pub title: String,
    /// Upstream link, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Short hash from the link
    pub hash: String,
    /// Reveal delay in milliseconds (timeline view only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reveal_delay_ms: Option<u64>,
}

impl CommitCard {
    fn from_record(record: &ContributionRecord, reveal_delay_ms: Option<u64>) -> Self {
        Self {
            date: record.date_label(),
            title: record.title.clone(),
            link: record.has_source().then(|| record.source_url.clone()),
            hash: record.short_hash(),
            reveal_delay_ms,
        }
    }
}

/// A category section with its cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveSection {
    /// Category name
    pub category: String,
    /// Badge text such as `3 commits`
    pub count_label: String,
    /// Section reveal delay in milliseconds
    pub reveal_delay_ms: u64,
    /// Cards in source order
    pub cards: Vec<CommitCard>,
}

/// Page body: either sections or the empty state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArchiveBody {
    /// At least one visible category
    Sections {
        /// Visible sections in bucket order
        sections: Vec<ArchiveSection>,
    },
    /// The filter matched nothing
    Empty {
        /// Heading
        title: String,
        /// Hint
        hint: String,
    },
}

/// Everything needed to draw the archive page once
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveView {
    /// Header cards
    pub stats: Vec<StatCard>,
    /// Filter bar, "All" first
    pub filters: Vec<FilterButton>,
    /// Layout
    pub view_mode: ViewMode,
    /// Sections or empty state
    pub body: ArchiveBody,
}

/// Page-level container for the archive
#[derive(Debug, Clone)]
pub struct ArchivePage {
    records: Vec<ContributionRecord>,
    grouped: GroupedRecords,
    stats: Stats,
    filter: FilterState,
    view: ViewModeState,
    highlights: Vec<Highlight>,
}

impl Default for ArchivePage {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ArchivePage {
    /// Build a page over `records`, grouping them immediately
    #[must_use]
    pub fn new(records: Vec<ContributionRecord>) -> Self {
        let grouped = group(&records);
        let stats = compute_stats(&grouped);
        debug!(
            records = stats.total,
            categories = stats.category_count,
            "archive page built"
        );
        Self {
            records,
            grouped,
            stats,
            filter: FilterState::new(),
            view: ViewModeState::new(),
            highlights: default_highlights(),
        }
    }

    /// Replace the highlighted categories
    #[must_use]
    pub fn with_highlights(mut self, highlights: Vec<Highlight>) -> Self {
        self.highlights = highlights;
        self
    }

    /// Replace the records, regrouping and recomputing stats
    ///
    /// The filter selection is kept; if it names a category that no longer
    /// exists the page shows its empty state.
    pub fn set_records(&mut self, records: Vec<ContributionRecord>) {
        self.grouped = group(&records);
        self.stats = compute_stats(&self.grouped);
        self.records = records;
        debug!(records = self.stats.total, "archive records replaced");
    }

    /// Change the category filter
    pub fn set_filter(&mut self, selection: FilterSelection) {
        self.filter.set_filter(selection);
    }

    /// Change the layout
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view.set_mode(mode);
    }

    /// Loaded records in source order
    #[must_use]
    pub fn records(&self) -> &[ContributionRecord] {
        &self.records
    }

    /// All records grouped by category
    #[must_use]
    pub fn grouped(&self) -> &GroupedRecords {
        &self.grouped
    }

    /// Stats over the full dataset
    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Current filter selection
    #[must_use]
    pub fn filter(&self) -> &FilterSelection {
        self.filter.selection()
    }

    /// Current layout
    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view.mode()
    }

    /// Grouped records visible under the current filter
    #[must_use]
    pub fn visible(&self) -> GroupedRecords {
        self.filter.visible(&self.grouped)
    }

    /// Header cards: totals followed by the highlighted categories
    #[must_use]
    pub fn stat_cards(&self) -> Vec<StatCard> {
        let mut cards = vec![
            StatCard {
                label: "Total Contributions".to_string(),
                value: self.stats.total,
            },
            StatCard {
                label: "Components".to_string(),
                value: self.stats.category_count,
            },
        ];
        cards.extend(self.highlights.iter().map(|h| StatCard {
            label: h.label.clone(),
            value: self.stats.count_for(&h.category),
        }));
        cards
    }

    /// Filter bar: "All" followed by one button per category
    #[must_use]
    pub fn filter_buttons(&self) -> Vec<FilterButton> {
        let all = FilterSelection::All;
        let mut buttons = vec![FilterButton {
            label: "All".to_string(),
            active: self.filter.is_active(&all),
            selection: all,
            count: self.stats.total,
        }];
        buttons.extend(self.grouped.buckets().iter().map(|bucket| {
            let selection = FilterSelection::category(bucket.category.as_str());
            FilterButton {
                label: bucket.category.clone(),
                active: self.filter.is_active(&selection),
                selection,
                count: bucket.len(),
            }
        }));
        buttons
    }

    /// Visible sections in bucket order
    #[must_use]
    pub fn sections(&self) -> Vec<ArchiveSection> {
        self.visible()
            .buckets()
            .iter()
            .enumerate()
            .map(|(section_index, bucket)| ArchiveSection {
                category: bucket.category.clone(),
                count_label: commit_count_label(bucket.len()),
                reveal_delay_ms: duration_ms(self.view.section_delay(section_index)),
                cards: bucket
                    .records
                    .iter()
                    .enumerate()
                    .map(|(i, record)| {
                        CommitCard::from_record(record, self.view.card_delay(i).map(duration_ms))
                    })
                    .collect(),
            })
            .collect()
    }

    /// Full render model for the current state
    #[must_use]
    pub fn render(&self) -> ArchiveView {
        let sections = self.sections();
        let body = if sections.is_empty() {
            ArchiveBody::Empty {
                title: "No contributions found".to_string(),
                hint: "Try selecting a different filter".to_string(),
            }
        } else {
            ArchiveBody::Sections { sections }
        };
        ArchiveView {
            stats: self.stat_cards(),
            filters: self.filter_buttons(),
            view_mode: self.view.mode(),
            body,
        }
    }
}
