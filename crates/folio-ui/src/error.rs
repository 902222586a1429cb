//! Error types for folio-ui

use std::path::PathBuf;

use thiserror::Error;

/// Errors from UI capabilities (preference storage, statistics sources)
#[derive(Debug, Error)]
pub enum UiError {
    /// Error reading or writing a file
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error parsing or producing JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid theme name
    #[error("Unknown theme: {name} (expected 'dark' or 'light')")]
    UnknownTheme {
        /// The rejected value
        name: String,
    },

    /// Repository statistics could not be obtained
    #[error("Repository stats unavailable for {repo}: {reason}")]
    StatsUnavailable {
        /// Repository identifier, e.g. `owner/name`
        repo: String,
        /// Why the source gave up
        reason: String,
    },
}
