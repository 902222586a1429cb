//! Category filter for the archive page

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grouping::GroupedRecords;

/// Active filter value
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterSelection {
    /// Show every category
    #[default]
    All,
    /// Show a single category by name
    Category(String),
}

impl FilterSelection {
    /// Select a single category
    #[must_use]
    pub fn category(name: impl Into<String>) -> Self {
        Self::Category(name.into())
    }
}

impl FromStr for FilterSelection {
    type Err = Infallible;

    /// `"all"` (any case) selects everything; anything else names a category
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Category(s.to_string()))
        }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Category(name) => f.write_str(name),
        }
    }
}

/// Tracks the selected filter and projects grouped records through it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    selection: FilterSelection,
}

impl FilterState {
    /// Create a filter showing all categories
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection (last write wins)
    pub fn set_filter(&mut self, selection: FilterSelection) {
        debug!(%selection, "filter changed");
        self.selection = selection;
    }

    /// Current selection
    #[must_use]
    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Check whether `selection` is the active one
    #[must_use]
    pub fn is_active(&self, selection: &FilterSelection) -> bool {
        &self.selection == selection
    }

    /// Visible subset of `grouped` under the current selection
    #[must_use]
    pub fn visible(&self, grouped: &GroupedRecords) -> GroupedRecords {
        visible(&self.selection, grouped)
    }
}

/// Project `grouped` through `selection` without modifying it
///
/// `All` yields the full mapping, a present category yields a single-entry
/// mapping, and an absent category yields an empty mapping.
#[must_use]
pub fn visible(selection: &FilterSelection, grouped: &GroupedRecords) -> GroupedRecords {
    match selection {
        FilterSelection::All => grouped.clone(),
        FilterSelection::Category(name) => {
            let mut out = GroupedRecords::new();
            if let Some(bucket) = grouped.bucket(name) {
                out.insert_bucket(bucket.clone());
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::group;
    use crate::record::ContributionRecord;
    use similar_asserts::assert_eq;

    fn sample() -> GroupedRecords {
        group(&[
            ContributionRecord::new("A", "2024-01-01").with_component("Kernel"),
            ContributionRecord::new("B", "2024-01-02").with_component("Driver"),
            ContributionRecord::new("C", "2024-01-03").with_component("Kernel"),
        ])
    }

    #[test]
    fn test_default_is_all() {
        let state = FilterState::new();
        assert_eq!(state.selection(), &FilterSelection::All);
        assert_eq!(state.visible(&sample()), sample());
    }

    #[test]
    fn test_category_filter_single_bucket() {
        let mut state = FilterState::new();
        state.set_filter(FilterSelection::category("Driver"));
        let visible = state.visible(&sample());
        assert_eq!(visible.categories().collect::<Vec<_>>(), vec!["Driver"]);
        assert_eq!(visible.total(), 1);
    }

    #[test]
    fn test_stale_filter_is_empty() {
        let mut state = FilterState::new();
        state.set_filter(FilterSelection::category("Device tree"));
        assert!(state.visible(&sample()).is_empty());
    }

    #[test]
    fn test_visible_does_not_mutate_input() {
        let grouped = sample();
        let before = grouped.clone();
        let mut state = FilterState::new();
        state.set_filter(FilterSelection::category("Kernel"));
        let _ = state.visible(&grouped);
        assert_eq!(grouped, before);
    }

    #[test]
    fn test_visible_is_idempotent() {
        let grouped = sample();
        let mut state = FilterState::new();
        state.set_filter(FilterSelection::category("Kernel"));
        assert_eq!(state.visible(&grouped), state.visible(&grouped));
    }

    #[test]
    fn test_last_write_wins() {
        let mut state = FilterState::new();
        state.set_filter(FilterSelection::category("Kernel"));
        state.set_filter(FilterSelection::All);
        assert!(state.is_active(&FilterSelection::All));
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!("all".parse::<FilterSelection>(), Ok(FilterSelection::All));
        assert_eq!("ALL".parse::<FilterSelection>(), Ok(FilterSelection::All));
        assert_eq!(
            "Linux kernel".parse::<FilterSelection>(),
            Ok(FilterSelection::category("Linux kernel"))
        );
    }

    #[test]
    fn test_display_selection() {
        assert_eq!(FilterSelection::All.to_string(), "all");
        assert_eq!(FilterSelection::category("PetaLinux").to_string(), "PetaLinux");
    }
}
