// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for folio-archive

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading content files
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Content path does not exist
    #[error("Content not found: {}", path.display())]
    ContentNotFound {
        /// The path that was looked up
        path: PathBuf,
    },

    /// Error reading a content file or directory
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File or directory being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Content file is not valid JSON for the expected record type
    #[error("Invalid content in {}: {source}", path.display())]
    Json {
        /// File being parsed
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
}
