//! Configuration for the folio command line
//!
//! Content locations, the preference state directory, output format and
//! logging options.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio_archive::{FilterSelection, ViewMode};
use folio_ui::ThemePreference;

/// Default directory of archive record files
pub const DEFAULT_CONTENT_DIR: &str = "content/archive";

/// Default job history file
pub const DEFAULT_JOBS_FILE: &str = "content/jobs.json";

/// Hero greeting typed when `--text` is not given
pub const DEFAULT_HERO_TEXT: &str = "Hi, my name is";

/// Folio - portfolio site logic in the terminal
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "folio")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Subcommand to run (defaults to `archive`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Archive content: a JSON file or a directory of `*.json` files
    ///
    /// Defaults to ./content/archive.
    #[arg(short, long, env = "FOLIO_CONTENT")]
    pub content: Option<PathBuf>,

    /// Job history JSON file
    ///
    /// Defaults to ./content/jobs.json.
    #[arg(long, env = "FOLIO_JOBS")]
    pub jobs: Option<PathBuf>,

    /// Directory holding persisted preferences
    ///
    /// Defaults to ~/.config/folio (or platform equivalent).
    #[arg(long, env = "FOLIO_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    /// System color scheme to assume on first run (`dark` or `light`)
    ///
    /// Terminals have no reliable way to report this, so it is opt-in.
    #[arg(long, env = "FOLIO_SYSTEM_THEME")]
    pub system_theme: Option<ThemePreference>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so that stdout stays clean for
    /// `--json` output.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,

    /// Disable animations (typing and reveal)
    #[arg(long, default_value = "false")]
    pub no_motion: bool,

    /// Print JSON instead of text
    #[arg(long, default_value = "false")]
    pub json: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the contribution archive
    Archive {
        /// Category to show, or `all`
        #[arg(long, default_value = "all")]
        filter: FilterSelection,

        /// Layout: `grid` or `timeline`
        #[arg(long, default_value = "grid")]
        view: ViewMode,
    },

    /// Show archive totals and, optionally, repository stars and forks
    Stats {
        /// Repository to look up, as `owner/name`
        #[arg(long)]
        repo: Option<String>,

        /// Directory of cached GitHub API responses (`owner__name.json`)
        #[arg(long, requires = "repo")]
        repo_cache: Option<PathBuf>,
    },

    /// Show the job history timeline
    Jobs {
        /// Entry to expand instead of the first one
        #[arg(long)]
        expand: Option<usize>,
    },

    /// Show or toggle the persisted color theme
    Theme {
        /// Switch to the other theme before printing
        #[arg(long)]
        toggle: bool,
    },

    /// Play the hero banner typing animation
    Hero {
        /// Number of type/delete cycles to play
        #[arg(long, default_value_t = 1)]
        cycles: u64,

        /// Text to type
        #[arg(long)]
        text: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Archive {
            filter: FilterSelection::All,
            view: ViewMode::Grid,
        }
    }
}

impl Config {
    /// Subcommand to run, falling back to `archive`
    #[must_use]
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or_default()
    }

    /// Archive content path, using the default if not specified
    #[must_use]
    pub fn content_path(&self) -> PathBuf {
        self.content
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR))
    }

    /// Job history path, using the default if not specified
    #[must_use]
    pub fn jobs_path(&self) -> PathBuf {
        self.jobs
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_JOBS_FILE))
    }

    /// Preference directory, using a default if not specified
    ///
    /// Default location is platform-specific:
    /// - Linux: ~/.config/folio
    /// - macOS: ~/Library/Application Support/folio
    /// - Windows: %APPDATA%\folio
    ///
    /// Falls back to `~/.folio`, then `./.folio`.
    #[must_use]
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir.clone().unwrap_or_else(|| {
            folio_ui::default_state_dir()
                .or_else(|| dirs::home_dir().map(|home| home.join(".folio")))
                .unwrap_or_else(|| PathBuf::from(".folio"))
        })
    }

    /// Whether typing and reveal animations run
    #[must_use]
    pub fn motion_enabled(&self) -> bool {
        !self.no_motion
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The content path is specified but doesn't exist
    /// - The jobs path is specified but doesn't exist
    /// - The state directory exists but is not a directory
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref content) = self.content {
            if !content.exists() {
                return Err(ConfigError::ContentNotFound(content.clone()));
            }
        }

        if let Some(ref jobs) = self.jobs {
            if !jobs.exists() {
                return Err(ConfigError::JobsNotFound(jobs.clone()));
            }
            if jobs.is_dir() {
                return Err(ConfigError::JobsIsDirectory(jobs.clone()));
            }
        }

        let state_dir = self.state_dir();
        if state_dir.exists() && !state_dir.is_dir() {
            return Err(ConfigError::StateDirNotDirectory(state_dir));
        }

        if let Some(Command::Hero { cycles: 0, .. }) = self.command {
            return Err(ConfigError::InvalidArgument(
                "--cycles must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Content path not found
    #[error("Content path not found: {}", .0.display())]
    ContentNotFound(PathBuf),

    /// Jobs file not found
    #[error("Jobs file not found: {}", .0.display())]
    JobsNotFound(PathBuf),

    /// Jobs path is a directory
    #[error("Jobs path is a directory, expected a JSON file: {}", .0.display())]
    JobsIsDirectory(PathBuf),

    /// State path exists but is a file
    #[error("State path is not a directory: {}", .0.display())]
    StateDirNotDirectory(PathBuf),

    /// Argument outside its accepted range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
