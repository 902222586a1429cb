//! Archive presentation mode and reveal staggering

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Delay increment between cards in timeline mode
pub const CARD_STAGGER: Duration = Duration::from_millis(50);

/// Delay increment between category sections
pub const SECTION_STAGGER: Duration = Duration::from_millis(100);

/// Layout used to render the visible records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Cards in a grid
    #[default]
    Grid,
    /// Cards on a vertical timeline with staggered reveals
    Timeline,
}

/// Unknown view mode name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown view mode: {0} (expected 'grid' or 'timeline')")]
pub struct ParseViewModeError(String);

impl FromStr for ViewMode {
    type Err = ParseViewModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "timeline" => Ok(Self::Timeline),
            _ => Err(ParseViewModeError(s.to_string())),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid => f.write_str("grid"),
            Self::Timeline => f.write_str("timeline"),
        }
    }
}

/// Reveal delay for the item at `index`: `index * increment`
#[must_use]
pub fn stagger_delay(index: usize, increment: Duration) -> Duration {
    increment.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

/// Whole milliseconds, saturating at `u64::MAX`
pub(crate) fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Current view mode; a pure display switch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewModeState {
    mode: ViewMode,
}

impl ViewModeState {
    /// Start in grid mode
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch layout
    pub fn set_mode(&mut self, mode: ViewMode) {
        debug!(%mode, "view mode changed");
        self.mode = mode;
    }

    /// Current layout
    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Per-card reveal delay; only the timeline staggers cards
    #[must_use]
    pub fn card_delay(&self, index: usize) -> Option<Duration> {
        match self.mode {
            ViewMode::Grid => None,
            ViewMode::Timeline => Some(stagger_delay(index, CARD_STAGGER)),
        }
    }

    /// Per-section reveal delay, used in both modes
    #[must_use]
    pub fn section_delay(&self, index: usize) -> Duration {
        stagger_delay(index, SECTION_STAGGER)
    }
}
