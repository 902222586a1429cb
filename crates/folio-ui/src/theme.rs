// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Theme preference store
//!
//! [`ThemeStore`] is an owned value handed to whichever view needs it. Views
//! that react to changes hold a [`watch::Receiver`] from
//! [`ThemeStore::subscribe`].
//!
//! Initial resolution order: stored preference, then the system probe, then
//! [`ThemePreference::Dark`]. A resolved value is written back to storage so
//! later sessions are stable. Without storage nothing is persisted, but
//! toggling still changes the in-memory theme.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::UiError;
use crate::storage::PreferenceStorage;

/// Storage key holding the theme name
pub const THEME_KEY: &str = "theme";

/// Light or dark color scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Dark scheme (fallback)
    #[default]
    Dark,
    /// Light scheme
    Light,
}

impl ThemePreference {
    /// Storage and attribute value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other theme
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Toggle button caption
    #[must_use]
    pub fn toggle_label(self) -> String {
        format!("Switch to {} mode", self.toggled())
    }

    fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(UiError::UnknownTheme {
                name: other.to_string(),
            }),
        }
    }
}

/// Asks the platform whether it prefers a dark scheme
pub trait SystemPreferenceProbe: Send + Sync {
    /// `Some(true)` for dark, `Some(false)` for light, `None` when unknown
    fn prefers_dark(&self) -> Option<bool>;
}

/// Probe with a preset answer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedProbe(pub Option<bool>);

impl SystemPreferenceProbe for FixedProbe {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// Where the initial theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// A previously stored preference
    Stored,
    /// The system preference probe
    System,
    /// Hardcoded fallback
    Default,
}

/// Owner of the current theme
pub struct ThemeStore {
    theme: ThemePreference,
    source: ThemeSource,
    storage: Option<Box<dyn PreferenceStorage>>,
    tx: watch::Sender<ThemePreference>,
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.theme)
            .field("source", &self.source)
            .field("persistent", &self.storage.is_some())
            .finish()
    }
}

impl ThemeStore {
    /// Store with no storage and no probe; always starts dark
    #[must_use]
    pub fn headless() -> Self {
        Self::init(None, None)
    }

    /// Resolve the initial theme from the available capabilities
    #[must_use]
    pub fn init(
        storage: Option<Box<dyn PreferenceStorage>>,
        probe: Option<&dyn SystemPreferenceProbe>,
    ) -> Self {
        let stored = storage.as_deref().and_then(|s| read_stored(s));
        let (theme, source) = match stored {
            Some(theme) => (theme, ThemeSource::Stored),
            None => match probe.and_then(|p| p.prefers_dark()) {
                Some(dark) => (ThemePreference::from_prefers_dark(dark), ThemeSource::System),
                None => (ThemePreference::default(), ThemeSource::Default),
            },
        };

        if source != ThemeSource::Stored {
            if let Some(storage) = storage.as_deref() {
                persist(storage, theme);
            }
        }

        debug!(%theme, ?source, persistent = storage.is_some(), "theme resolved");
        let (tx, _rx) = watch::channel(theme);
        Self {
            theme,
            source,
            storage,
            tx,
        }
    }

    /// Current theme
    #[must_use]
    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    /// Where the initial theme came from
    #[must_use]
    pub fn source(&self) -> ThemeSource {
        self.source
    }

    /// Whether changes are written to persistent storage
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }

    /// Flip the theme, persist it when possible and notify subscribers
    pub fn toggle(&mut self) -> ThemePreference {
        self.set(self.theme.toggled());
        self.theme
    }

    /// Set a specific theme (last write wins)
    pub fn set(&mut self, theme: ThemePreference) {
        self.theme = theme;
        if let Some(storage) = self.storage.as_deref() {
            persist(storage, theme);
        }
        self.tx.send_replace(theme);
        debug!(%theme, "theme changed");
    }

    /// Receiver that observes every theme change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ThemePreference> {
        self.tx.subscribe()
    }
}

fn read_stored(storage: &dyn PreferenceStorage) -> Option<ThemePreference> {
    match storage.get(THEME_KEY) {
        Ok(Some(value)) => match value.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                warn!(error = %e, "ignoring stored theme");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!(error = %e, "failed to read stored theme");
            None
        }
    }
}

fn persist(storage: &dyn PreferenceStorage, theme: ThemePreference) {
    if let Err(e) = storage.set(THEME_KEY, theme.as_str()) {
        warn!(error = %e, %theme, "failed to persist theme");
    }
}
