//! Plain-text and JSON output
//!
//! Every renderer takes a report produced by [`crate::commands`] and returns
//! the full text to print. No color codes are emitted; the theme only affects
//! what the `theme` command reports.

use folio_archive::page::{ArchiveBody, ArchiveSection, CommitCard};
use folio_archive::{ArchiveView, ViewMode};
use serde::Serialize;

use crate::commands::{CommandError, JobsReport, StatsReport, ThemeReport};

/// Cursor drawn after the typed hero text
pub const CURSOR: char = '_';

/// Pretty-printed JSON for any report
///
/// # Errors
///
/// Returns `CommandError::Json` if the value cannot be serialized.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, CommandError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Archive page as text
#[must_use]
pub fn archive_text(view: &ArchiveView) -> String {
    let mut lines = Vec::new();

    let stats: Vec<String> = view
        .stats
        .iter()
        .map(|card| format!("{}: {}", card.label, card.value))
        .collect();
    lines.push(stats.join(" | "));

    let filters: Vec<String> = view
        .filters
        .iter()
        .map(|button| {
            if button.active {
                format!("[{} ({})]", button.label, button.count)
            } else {
                format!("{} ({})", button.label, button.count)
            }
        })
        .collect();
    lines.push(format!("Filter: {}", filters.join("  ")));
    lines.push(format!("View: {}", view.view_mode));

    match &view.body {
        ArchiveBody::Sections { sections } => {
            for section in sections {
                lines.push(String::new());
                lines.extend(section_lines(section, view.view_mode));
            }
        }
        ArchiveBody::Empty { title, hint } => {
            lines.push(String::new());
            lines.push(title.clone());
            lines.push(hint.clone());
        }
    }

    lines.join("\n")
}

fn section_lines(section: &ArchiveSection, mode: ViewMode) -> Vec<String> {
    let mut lines = vec![format!("## {} ({})", section.category, section.count_label)];
    lines.extend(section.cards.iter().map(|card| card_line(card, mode)));
    lines
}

fn card_line(card: &CommitCard, mode: ViewMode) -> String {
    let hash = if card.hash.is_empty() {
        String::new()
    } else {
        format!("  [{}]", card.hash)
    };
    match mode {
        ViewMode::Grid => format!("  * {} ({}){}", card.title, card.date, hash),
        ViewMode::Timeline => format!("  {} | {}{}", card.date, card.title, hash),
    }
}

/// Stats report as text
#[must_use]
pub fn stats_text(report: &StatsReport) -> String {
    let mut lines = vec![
        format!("Total contributions: {}", report.archive.total),
        format!("Components: {}", report.archive.category_count),
    ];
    lines.extend(
        report
            .archive
            .per_category
            .iter()
            .map(|(category, count)| format!("  {category}: {count}")),
    );
    match (&report.repo, &report.repo_stats) {
        (Some(repo), Some(stats)) => {
            lines.push(format!("{repo}: {} stars, {} forks", stats.stars, stats.forks));
        }
        (Some(repo), None) => lines.push(format!("{repo}: stats unavailable")),
        _ => {}
    }
    lines.join("\n")
}

/// Job timeline as text; only the expanded entry shows its description
#[must_use]
pub fn jobs_text(report: &JobsReport) -> String {
    if report.entries.is_empty() {
        return "No jobs to show".to_string();
    }
    let mut lines = Vec::new();
    for entry in &report.entries {
        let marker = if entry.expanded { "v" } else { ">" };
        let job = &entry.job;
        let mut heading = format!("{marker} {} @ {}", job.title, job.company);
        if !job.range.is_empty() {
            heading.push_str(&format!(" ({})", job.range));
        }
        lines.push(heading);
        if entry.expanded {
            if !job.location.is_empty() {
                lines.push(format!("    {}", job.location));
            }
            if !job.url.is_empty() {
                lines.push(format!("    {}", job.url));
            }
            lines.extend(
                job.html
                    .lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(|l| format!("    {l}")),
            );
        }
    }
    lines.join("\n")
}

/// Theme report as text
#[must_use]
pub fn theme_text(report: &ThemeReport) -> String {
    let mut text = format!("Theme: {} ({})", report.theme, report.source);
    if !report.persistent {
        text.push_str(" [not saved]");
    }
    text.push('\n');
    text.push_str(&report.toggle_label);
    text
}

/// One hero banner frame: the typed prefix followed by the cursor
#[must_use]
pub fn hero_frame(displayed: &str) -> String {
    format!("{displayed}{CURSOR}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::JobEntry;
    use folio_archive::{ArchivePage, ContributionRecord, FilterSelection, JobRecord, Stats};
    use folio_ui::RepoStats;
    use similar_asserts::assert_eq;

    fn page() -> ArchivePage {
        ArchivePage::new(vec![
            ContributionRecord::new("A", "2023-05-10")
                .with_component("Linux kernel")
                .with_source_url("https://github.com/torvalds/linux/commit/abcdef1234567"),
            ContributionRecord::new("B", "2023-06-01").with_component("Userspace driver"),
        ])
    }

    #[test]
    fn test_archive_grid_text() {
        let text = archive_text(&page().render());
        let expected = "\
Total Contributions: 2 | Components: 2 | Kernel Patches: 1 | Driver Commits: 1
Filter: [All (2)]  Linux kernel (1)  Userspace driver (1)
View: grid

## Linux kernel (1 commit)
  * A (May 10, 2023)  [abcdef1]

## Userspace driver (1 commit)
  * B (Jun 1, 2023)";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_archive_timeline_text() {
        let mut page = page();
        page.set_view_mode(ViewMode::Timeline);
        page.set_filter(FilterSelection::category("Linux kernel"));
        let text = archive_text(&page.render());
        assert!(text.contains("View: timeline"));
        assert!(text.contains("  May 10, 2023 | A  [abcdef1]"));
        assert!(!text.contains("Userspace driver (1 commit)"));
    }

    #[test]
    fn test_archive_empty_state_text() {
        let mut page = page();
        page.set_filter(FilterSelection::category("Firmware"));
        let text = archive_text(&page.render());
        assert!(text.ends_with("No contributions found\nTry selecting a different filter"));
    }

    #[test]
    fn test_stats_text_with_repo() {
        let report = StatsReport {
            archive: Stats {
                total: 3,
                category_count: 1,
                per_category: vec![("Kernel".to_string(), 3)],
            },
            repo: Some("octo/folio".to_string()),
            repo_stats: Some(RepoStats { stars: 9, forks: 2 }),
        };
        assert_eq!(
            stats_text(&report),
            "Total contributions: 3\nComponents: 1\n  Kernel: 3\nocto/folio: 9 stars, 2 forks"
        );
    }

    #[test]
    fn test_jobs_text_only_expanded_shows_body() {
        let mut first = JobRecord::new("Engineer", "Acme").with_range("2021 - Present");
        first.html = "<ul>\n<li>Wrote drivers</li>\n</ul>".to_string();
        let mut second = JobRecord::new("Intern", "Initech");
        second.html = "<p>Hidden</p>".to_string();
        let report = JobsReport {
            expanded: Some(0),
            entries: vec![
                JobEntry {
                    index: 0,
                    job: first,
                    expanded: true,
                    reveal_delay_ms: 0,
                },
                JobEntry {
                    index: 1,
                    job: second,
                    expanded: false,
                    reveal_delay_ms: 100,
                },
            ],
        };
        let text = jobs_text(&report);
        assert!(text.starts_with("v Engineer @ Acme (2021 - Present)"));
        assert!(text.contains("    <li>Wrote drivers</li>"));
        assert!(text.contains("> Intern @ Initech"));
        assert!(!text.contains("Hidden"));
    }

    #[test]
    fn test_theme_text() {
        let report = ThemeReport {
            theme: "dark".to_string(),
            source: "default".to_string(),
            toggled: false,
            toggle_label: "Switch to light mode".to_string(),
            persistent: true,
        };
        assert_eq!(theme_text(&report), "Theme: dark (default)\nSwitch to light mode");
    }

    #[test]
    fn test_hero_frame() {
        assert_eq!(hero_frame(""), "_");
        assert_eq!(hero_frame("Hi"), "Hi_");
    }
}
