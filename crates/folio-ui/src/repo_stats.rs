//! Repository star and fork counts
//!
//! The home page shows stars and forks for its own repository. Fetching is
//! best-effort: [`fetch_repo_stats`] returns `None` on any failure and the
//! caller simply omits the counts.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::UiError;

/// Upper bound on a single fetch
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(3);

/// Star and fork counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoStats {
    /// Stargazer count
    pub stars: u64,
    /// Fork count
    pub forks: u64,
}

#[derive(Deserialize)]
struct GithubRepo {
    stargazers_count: u64,
    forks_count: u64,
}

impl RepoStats {
    /// Parse a GitHub repository API response body
    ///
    /// # Errors
    ///
    /// Returns `UiError::Json` if either count is missing or not a number.
    pub fn from_github_json(body: &str) -> Result<Self, UiError> {
        let repo: GithubRepo = serde_json::from_str(body)?;
        Ok(Self {
            stars: repo.stargazers_count,
            forks: repo.forks_count,
        })
    }
}

/// Somewhere repository statistics can be read from
#[async_trait]
pub trait RepoStatsSource: Send + Sync {
    /// Fetch counts for `repo` (`owner/name`)
    ///
    /// # Errors
    ///
    /// Returns `UiError` when the source has no usable answer.
    async fn fetch(&self, repo: &str) -> Result<RepoStats, UiError>;
}

/// Reads cached GitHub API responses from a directory
///
/// `owner/name` maps to `<dir>/owner__name.json`.
#[derive(Debug, Clone)]
pub struct FileStatsSource {
    dir: PathBuf,
}

impl FileStatsSource {
    /// Read responses from `dir`
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Cache file for `repo`
    #[must_use]
    pub fn path_for(&self, repo: &str) -> PathBuf {
        self.dir.join(format!("{}.json", repo.replace('/', "__")))
    }

    /// Directory being read
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl RepoStatsSource for FileStatsSource {
    async fn fetch(&self, repo: &str) -> Result<RepoStats, UiError> {
        let path = self.path_for(repo);
        let body = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| UiError::Io { path, source })?;
        RepoStats::from_github_json(&body)
    }
}

/// Fixed answers, keyed by repository
#[derive(Debug, Clone, Default)]
pub struct StaticStatsSource {
    stats: HashMap<String, RepoStats>,
}

impl StaticStatsSource {
    /// Source with no answers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an answer for `repo`
    #[must_use]
    pub fn with(mut self, repo: impl Into<String>, stats: RepoStats) -> Self {
        self.stats.insert(repo.into(), stats);
        self
    }
}

#[async_trait]
impl RepoStatsSource for StaticStatsSource {
    async fn fetch(&self, repo: &str) -> Result<RepoStats, UiError> {
        self.stats
            .get(repo)
            .copied()
            .ok_or_else(|| UiError::StatsUnavailable {
                repo: repo.to_string(),
                reason: "no entry".to_string(),
            })
    }
}

/// Fetch counts for `repo`, or `None` if the source fails or takes too long
pub async fn fetch_repo_stats(source: &dyn RepoStatsSource, repo: &str) -> Option<RepoStats> {
    match tokio::time::timeout(FETCH_TIMEOUT, source.fetch(repo)).await {
        Ok(Ok(stats)) => {
            debug!(repo, stars = stats.stars, forks = stats.forks, "repository stats fetched");
            Some(stats)
        }
        Ok(Err(e)) => {
            warn!(repo, error = %e, "repository stats unavailable");
            None
        }
        Err(_) => {
            warn!(repo, timeout = ?FETCH_TIMEOUT, "repository stats timed out");
            None
        }
    }
}
