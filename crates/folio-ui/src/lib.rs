// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! folio-ui: presentation-side capabilities for folio
//!
//! This library crate holds the state that outlives a single page render:
//! the persisted light/dark theme, the hero typing animation, the reveal
//! animation capability and best-effort repository statistics.

#![warn(missing_docs)]

//! ## Capabilities
//!
//! Each platform dependency sits behind a small trait so that headless runs
//! and tests can swap it out:
//!
//! - [`PreferenceStorage`]: where the theme is remembered
//! - [`SystemPreferenceProbe`]: whether the platform prefers dark
//! - [`RevealAnimator`]: entrance animations
//! - [`RepoStatsSource`]: star and fork counts
//!
//! ```rust
//! use folio_ui::{MemoryStorage, ThemePreference, ThemeStore};
//!
//! let mut store = ThemeStore::init(Some(Box::new(MemoryStorage::new())), None);
//! assert_eq!(store.theme(), ThemePreference::Dark);
//! assert_eq!(store.toggle(), ThemePreference::Light);
//! ```

pub mod error;
pub mod repo_stats;
pub mod reveal;
pub mod storage;
pub mod theme;
pub mod typing;

pub use error::UiError;
pub use repo_stats::{
    FileStatsSource, RepoStats, RepoStatsSource, StaticStatsSource, fetch_repo_stats,
};
pub use reveal::{
    NoopRevealer, RecordingRevealer, RevealAnimator, RevealConfig, RevealRequest,
    reveal_staggered, select_revealer,
};
pub use storage::{FileStorage, MemoryStorage, PreferenceStorage, default_state_dir};
pub use theme::{FixedProbe, SystemPreferenceProbe, ThemePreference, ThemeSource, ThemeStore};
pub use typing::{TypingAnimation, TypingDriver, TypingHandle, TypingPhase, TypingTiming};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::UiError;
    pub use crate::reveal::{RevealAnimator, RevealConfig};
    pub use crate::storage::{FileStorage, PreferenceStorage};
    pub use crate::theme::{ThemePreference, ThemeStore};
    pub use crate::typing::{TypingAnimation, TypingDriver, TypingTiming};
}
