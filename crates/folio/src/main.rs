//! folio: portfolio site logic in the terminal
//!
//! Renders the contribution archive, job timeline, theme preference and hero
//! banner from the same state code a browser front end would drive.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use folio::commands;
use folio::config::{Command, Config, DEFAULT_HERO_TEXT};
use folio::render;
use folio_ui::{RevealAnimator, select_revealer};
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout carries the rendered output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    config.validate().context("invalid configuration")?;
    let command = config.resolved_command();
    debug!(?command, "running");

    let animator = select_revealer(config.motion_enabled());
    let output = match command {
        Command::Archive { filter, view } => {
            let rendered =
                commands::archive(&config.content_path(), filter, view, animator.as_ref())?;
            if config.json {
                render::to_json(&rendered)?
            } else {
                render::archive_text(&rendered)
            }
        }
        Command::Stats { repo, repo_cache } => {
            let report =
                commands::stats(&config.content_path(), repo.as_deref(), repo_cache.as_deref())
                    .await?;
            if config.json {
                render::to_json(&report)?
            } else {
                render::stats_text(&report)
            }
        }
        Command::Jobs { expand } => {
            let report = commands::jobs(&config.jobs_path(), expand, animator.as_ref())?;
            if config.json {
                render::to_json(&report)?
            } else {
                render::jobs_text(&report)
            }
        }
        Command::Theme { toggle } => {
            let report = commands::theme(&config, toggle);
            if config.json {
                render::to_json(&report)?
            } else {
                render::theme_text(&report)
            }
        }
        Command::Hero { cycles, text } => {
            let text = text.unwrap_or_else(|| DEFAULT_HERO_TEXT.to_string());
            let live = !config.json;
            let report = commands::hero(&text, cycles, config.motion_enabled(), move |frame| {
                if live {
                    let mut stdout = std::io::stdout().lock();
                    let _ = write!(stdout, "\r\x1b[2K{}", render::hero_frame(frame));
                    let _ = stdout.flush();
                }
            })
            .await;
            if config.json {
                render::to_json(&report)?
            } else {
                render::hero_frame(&text)
            }
        }
    };

    animator.destroy();
    if matches!(config.command, Some(Command::Hero { .. })) && !config.json {
        print!("\r\x1b[2K");
    }
    println!("{output}");
    Ok(())
}
