// SPDX-License-Identifier: GPL-3.0-or-later

//! Command handler for the gitget CLI.

use std::time::Duration;

use anyhow::{Context, Result};
use gitget_core::{Delivery, Mode, Outcome, RequestContext, TokenFile, load_config};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::cli::{Cli, OutputContext};

/// Creates a styled spinner (only if interactive).
fn maybe_spinner(ctx: &OutputContext, message: &str) -> Option<ProgressBar> {
    if ctx.is_interactive() {
        let s = ProgressBar::new_spinner();
        s.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("Invalid spinner template"),
        );
        s.set_message(message.to_string());
        s.enable_steady_tick(Duration::from_millis(100));
        Some(s)
    } else {
        None
    }
}

/// Runs the pipeline for the parsed command line.
///
/// Return mode prints the JSON document to stdout. A failed fetch is
/// turned into an error so the process exits non-zero.
pub async fn run(cli: Cli, ctx: &OutputContext) -> Result<()> {
    // Validate the mode before touching the token file or the network
    let mode = Mode::parse(&cli.mode, cli.output)?;

    let mut config = load_config().context("Failed to load configuration")?;
    debug!("Configuration loaded successfully");

    if let Some(sort) = cli.sort {
        config.github.sort = sort.into();
        debug!("Overriding sort key to: {}", config.github.sort);
    }

    let username = cli.username;
    let request = RequestContext::builder()
        .username(username.clone())
        .sort(config.github.sort)
        .mode(mode)
        .build();
    let tokens = TokenFile::new(cli.token_file);

    let spinner = maybe_spinner(ctx, &format!("Fetching repositories for {username}..."));
    let report = gitget_core::run(&request, &tokens, &config.github).await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }
    let report = report?;

    if let Outcome::Failed { status, reason } = &report.outcome {
        let status = status.map_or_else(String::new, |code| format!(" (HTTP {code})"));
        anyhow::bail!("Failed to fetch repositories for {username}{status}: {reason}");
    }

    match report.delivery {
        Delivery::Returned(json) => println!("{json}"),
        Delivery::Written { path, count } => {
            info!(path = %path.display(), count, "Output written");
        }
        Delivery::Skipped => {
            warn!("{username} has no repositories, no file written");
        }
    }

    Ok(())
}
