//! Subcommand handlers
//!
//! Each handler loads what it needs, drives the library state and returns a
//! serializable report. Turning reports into text lives in
//! [`crate::render`]; nothing here writes to stdout.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use folio_archive::jobs::JOB_STAGGER;
use folio_archive::page::ArchiveBody;
use folio_archive::{
    ArchiveError, ArchivePage, ArchiveView, FilterSelection, JobRecord, JobTimeline, Stats,
    ViewMode, load_jobs, load_records, sort_jobs,
};
use folio_ui::{
    FileStatsSource, FileStorage, FixedProbe, RepoStats, RevealAnimator, RevealConfig, ThemeSource,
    ThemeStore, TypingAnimation, TypingDriver, TypingPhase, TypingTiming, fetch_repo_stats,
    reveal_staggered,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;

// ============================================================================
// Error Types
// ============================================================================

/// Command errors
#[derive(Debug, Error)]
pub enum CommandError {
    /// Content could not be loaded
    #[error("Failed to load content: {0}. Check --content and --jobs.")]
    Content(#[from] ArchiveError),

    /// JSON serialization error
    #[error("Failed to produce JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// ============================================================================
// Reports
// ============================================================================

/// Result of the `stats` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsReport {
    /// Archive totals
    pub archive: Stats,
    /// Repository being described, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    /// Stars and forks, when they could be fetched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_stats: Option<RepoStats>,
}

/// One rendered job entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobEntry {
    /// Position in the timeline
    pub index: usize,
    /// The job
    pub job: JobRecord,
    /// Whether the description is shown
    pub expanded: bool,
    /// Entrance reveal delay in milliseconds
    pub reveal_delay_ms: u64,
}

/// Result of the `jobs` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobsReport {
    /// Index of the expanded entry
    pub expanded: Option<usize>,
    /// Entries in display order
    pub entries: Vec<JobEntry>,
}

/// Result of the `theme` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeReport {
    /// Active theme name
    pub theme: String,
    /// Where the initial theme came from
    pub source: String,
    /// Whether the theme was toggled by this run
    pub toggled: bool,
    /// Caption for the toggle button
    pub toggle_label: String,
    /// Whether the preference is saved to disk
    pub persistent: bool,
}

/// One hero banner frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroFrame {
    /// Text shown
    pub displayed: String,
    /// Phase after the step
    pub phase: TypingPhase,
}

/// Result of the `hero` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroReport {
    /// Full greeting
    pub text: String,
    /// Whether the animation ran
    pub animated: bool,
    /// Frames in the order they were shown
    pub frames: Vec<HeroFrame>,
}

// ============================================================================
// Handlers
// ============================================================================

/// Load the archive and render it with the given filter and layout
///
/// # Errors
///
/// Returns `CommandError::Content` if the content path cannot be read.
pub fn archive(
    content: &Path,
    filter: FilterSelection,
    view: ViewMode,
    animator: &dyn RevealAnimator,
) -> Result<ArchiveView, CommandError> {
    let records = load_records(content)?;
    let mut page = ArchivePage::new(records);
    page.set_filter(filter);
    page.set_view_mode(view);
    let rendered = page.render();

    reveal_archive(&rendered, animator);
    info!(
        records = page.stats().total,
        visible = page.visible().total(),
        filter = %page.filter(),
        view = %page.view_mode(),
        "archive rendered"
    );
    Ok(rendered)
}

fn reveal_archive(view: &ArchiveView, animator: &dyn RevealAnimator) {
    animator.reveal("archive-header", &RevealConfig::default());
    if let ArchiveBody::Sections { sections } = &view.body {
        for section in sections {
            let delay = std::time::Duration::from_millis(section.reveal_delay_ms);
            animator.reveal(&section.category, &RevealConfig::with_delay(delay, 0.1));
        }
    }
}

/// Compute archive stats and optionally look up repository counts
///
/// Repository lookup failures are logged and leave `repo_stats` empty.
///
/// # Errors
///
/// Returns `CommandError::Content` if the content path cannot be read.
pub async fn stats(
    content: &Path,
    repo: Option<&str>,
    repo_cache: Option<&Path>,
) -> Result<StatsReport, CommandError> {
    let page = ArchivePage::new(load_records(content)?);
    let repo_stats = match (repo, repo_cache) {
        (Some(repo), Some(cache)) => fetch_repo_stats(&FileStatsSource::new(cache), repo).await,
        (Some(repo), None) => {
            debug!(repo, "no stats cache configured, skipping repository stats");
            None
        }
        _ => None,
    };
    Ok(StatsReport {
        archive: page.stats().clone(),
        repo: repo.map(str::to_string),
        repo_stats,
    })
}

/// Load the job history and expand the requested entry
///
/// # Errors
///
/// Returns `CommandError::Content` if the jobs file cannot be read and
/// `CommandError::InvalidInput` if `expand` is out of range.
pub fn jobs(
    path: &Path,
    expand: Option<usize>,
    animator: &dyn RevealAnimator,
) -> Result<JobsReport, CommandError> {
    let mut records = load_jobs(path)?;
    sort_jobs(&mut records);
    let mut timeline = JobTimeline::new(records);

    if let Some(index) = expand {
        if index >= timeline.jobs().len() {
            return Err(CommandError::InvalidInput(format!(
                "--expand {index} is out of range ({} jobs)",
                timeline.jobs().len()
            )));
        }
        if !timeline.is_expanded(index) {
            timeline.toggle(index);
        }
    }

    let entries: Vec<JobEntry> = timeline
        .items()
        .into_iter()
        .map(|item| JobEntry {
            index: item.index,
            job: item.job.clone(),
            expanded: item.expanded,
            reveal_delay_ms: item.reveal_delay_ms,
        })
        .collect();

    let targets: Vec<String> = entries.iter().map(|e| format!("job-{}", e.index)).collect();
    let targets: Vec<&str> = targets.iter().map(String::as_str).collect();
    reveal_staggered(animator, &targets, JOB_STAGGER, 0.25);

    info!(jobs = entries.len(), expanded = ?timeline.expanded(), "job timeline rendered");
    Ok(JobsReport {
        expanded: timeline.expanded(),
        entries,
    })
}

/// Resolve the persisted theme and optionally toggle it
#[must_use]
pub fn theme(config: &Config, toggle: bool) -> ThemeReport {
    let probe = FixedProbe(config.system_theme.map(|t| t == folio_ui::ThemePreference::Dark));
    let storage = FileStorage::in_dir(config.state_dir());
    let mut store = ThemeStore::init(Some(Box::new(storage)), Some(&probe));
    if toggle {
        store.toggle();
    }
    let theme = store.theme();
    ThemeReport {
        theme: theme.to_string(),
        source: source_name(store.source()).to_string(),
        toggled: toggle,
        toggle_label: theme.toggle_label(),
        persistent: store.is_persistent(),
    }
}

/// Play the hero typing animation for `cycles` full cycles
///
/// `on_frame` sees each frame as it is produced. With motion disabled the
/// full text is delivered once and no timer is started.
pub async fn hero<F>(text: &str, cycles: u64, motion_enabled: bool, mut on_frame: F) -> HeroReport
where
    F: FnMut(&str) + Send + 'static,
{
    if !motion_enabled {
        on_frame(text);
        return HeroReport {
            text: text.to_string(),
            animated: false,
            frames: vec![HeroFrame {
                displayed: text.to_string(),
                phase: TypingPhase::PausedAfterTyping,
            }],
        };
    }

    let frames = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&frames);
    TypingDriver::new(TypingAnimation::new(text, TypingTiming::hero()))
        .with_cycle_limit(cycles)
        .spawn(move |animation| {
            on_frame(animation.displayed());
            sink.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(HeroFrame {
                    displayed: animation.displayed().to_string(),
                    phase: animation.phase(),
                });
        })
        .join()
        .await;

    let frames = std::mem::take(&mut *frames.lock().unwrap_or_else(PoisonError::into_inner));
    debug!(frames = frames.len(), cycles, "hero animation finished");
    HeroReport {
        text: text.to_string(),
        animated: true,
        frames,
    }
}

fn source_name(source: ThemeSource) -> &'static str {
    match source {
        ThemeSource::Stored => "stored",
        ThemeSource::System => "system",
        ThemeSource::Default => "default",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_ui::{NoopRevealer, RecordingRevealer};
    use similar_asserts::assert_eq;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("folio-cmd-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    fn write_archive(dir: &Path) -> PathBuf {
        let path = dir.join("archive.json");
        fs::write(
            &path,
            r#"[
                {"title": "A", "date": "2023-05-10", "component": "Linux kernel",
                 "github": "https://github.com/torvalds/linux/commit/abcdef1234567"},
                {"title": "B", "date": "2023-06-01", "component": "Userspace driver"},
                {"title": "C", "date": "2023-07-04", "component": "Linux kernel"}
            ]"#,
        )
        .expect("write archive");
        path
    }

    #[test]
    fn test_archive_filters_and_reveals() {
        let dir = scratch_dir("archive");
        let content = write_archive(&dir);
        let animator = RecordingRevealer::new();

        let view = archive(
            &content,
            FilterSelection::category("Userspace driver"),
            ViewMode::Timeline,
            &animator,
        )
        .expect("archive");

        match &view.body {
            ArchiveBody::Sections { sections } => {
                assert_eq!(sections.len(), 1);
                assert_eq!(sections[0].count_label, "1 commit");
            }
            ArchiveBody::Empty { .. } => panic!("expected sections"),
        }
        let targets: Vec<String> = animator.requests().into_iter().map(|r| r.target).collect();
        assert_eq!(targets, vec!["archive-header".to_string(), "Userspace driver".to_string()]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_archive_missing_content() {
        let result = archive(
            Path::new("/nonexistent/folio/content"),
            FilterSelection::All,
            ViewMode::Grid,
            &NoopRevealer,
        );
        assert!(matches!(result, Err(CommandError::Content(_))));
    }

    #[tokio::test]
    async fn test_stats_without_repo() {
        let dir = scratch_dir("stats");
        let content = write_archive(&dir);
        let report = stats(&content, None, None).await.expect("stats");
        assert_eq!(report.archive.total, 3);
        assert_eq!(report.archive.category_count, 2);
        assert_eq!(report.repo_stats, None);
        let _ = fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_stats_missing_cache_entry_is_not_an_error() {
        let dir = scratch_dir("stats-cache");
        let content = write_archive(&dir);
        let report = stats(&content, Some("octo/folio"), Some(&dir))
            .await
            .expect("stats");
        assert_eq!(report.repo.as_deref(), Some("octo/folio"));
        assert_eq!(report.repo_stats, None);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_jobs_expand_out_of_range() {
        let dir = scratch_dir("jobs-range");
        let path = dir.join("jobs.json");
        fs::write(&path, r#"[{"title": "Engineer", "company": "Acme"}]"#).expect("write");
        let result = jobs(&path, Some(3), &NoopRevealer);
        assert!(matches!(result, Err(CommandError::InvalidInput(_))));
        let _ = fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_hero_without_motion_is_static() {
        let report = hero("Hi, my name is", 3, false, |_| {}).await;
        assert!(!report.animated);
        assert_eq!(report.frames.len(), 1);
        assert_eq!(report.frames[0].displayed, "Hi, my name is");
    }

    #[tokio::test(start_paused = true)]
    async fn test_hero_one_cycle() {
        let seen = Arc::new(Mutex::new(0usize));
        let counter = Arc::clone(&seen);
        let report = hero("hey", 1, true, move |_| *counter.lock().expect("lock") += 1).await;

        let shown: Vec<&str> = report.frames.iter().map(|f| f.displayed.as_str()).collect();
        assert_eq!(shown, vec!["", "h", "he", "hey", "hey", "he", "h", ""]);
        assert_eq!(report.frames.last().map(|f| f.phase), Some(TypingPhase::PausedAfterDeleting));
        assert_eq!(*seen.lock().expect("lock"), report.frames.len());
    }

    #[test]
    fn test_theme_first_run_uses_system_theme() {
        let dir = scratch_dir("theme");
        let config = Config {
            state_dir: Some(dir.clone()),
            system_theme: Some(folio_ui::ThemePreference::Light),
            ..Default::default()
        };
        let first = theme(&config, false);
        assert_eq!(first.theme, "light");
        assert_eq!(first.source, "system");

        let second = theme(&config, true);
        assert_eq!(second.theme, "dark");
        assert_eq!(second.source, "stored");
        assert_eq!(second.toggle_label, "Switch to light mode");
        let _ = fs::remove_dir_all(&dir);
    }
}
