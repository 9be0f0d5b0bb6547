// SPDX-License-Identifier: GPL-3.0-or-later

//! The gitget pipeline: credential, fetch, project, deliver.
//!
//! Every run carries its own [`RequestContext`] and [`TokenProvider`], so
//! runs for different accounts can proceed concurrently in one process.

use std::path::PathBuf;

use bon::Builder;
use tracing::{debug, info, instrument, warn};

use crate::auth::{TokenFile, TokenProvider};
use crate::config::{GitHubConfig, load_config};
use crate::error::GitGetError;
use crate::github::auth::create_client;
use crate::github::repos::{FetchOutcome, SortKey, fetch_repositories, is_valid_login};
use crate::project::project;
use crate::sink::{Delivery, Mode, Payload, deliver};

/// Per-run request parameters.
#[derive(Debug, Clone, Builder)]
pub struct RequestContext {
    /// Account whose repositories are listed.
    pub username: String,
    /// Recency metric for ordering.
    #[builder(default)]
    pub sort: SortKey,
    /// Where the result goes.
    pub mode: Mode,
}

/// Summary of what the fetch produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Repositories were fetched and projected.
    Repositories {
        /// Number of repositories.
        count: usize,
    },
    /// The account has no repositories.
    Empty,
    /// The fetch failed.
    Failed {
        /// HTTP status, when GitHub answered.
        status: Option<u16>,
        /// Human-readable cause.
        reason: String,
    },
}

impl Outcome {
    /// Returns true if the fetch failed.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }
}

/// Result of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// What the fetch produced.
    pub outcome: Outcome,
    /// What the sink did with it.
    pub delivery: Delivery,
}

/// Runs the pipeline for one account.
///
/// A failed fetch is not an error: it is reported in
/// [`RunReport::outcome`] and nothing is written.
///
/// # Errors
///
/// Returns an error if the username is empty or not a valid GitHub login,
/// the GitHub client cannot be built, or the output cannot be serialized or
/// written. Username checks run before the token is read.
#[instrument(skip(tokens, config), fields(username = %ctx.username, sort = %ctx.sort))]
pub async fn run(
    ctx: &RequestContext,
    tokens: &dyn TokenProvider,
    config: &GitHubConfig,
) -> crate::Result<RunReport> {
    let username = ctx.username.trim();
    if username.is_empty() {
        return Err(GitGetError::EmptyUsername);
    }
    if !is_valid_login(username) {
        return Err(GitGetError::InvalidUsername {
            username: username.to_string(),
        });
    }

    let token = tokens.github_token().await;
    let client = create_client(config, token.as_ref())?;

    let projected = match fetch_repositories(&client, username, ctx.sort).await {
        FetchOutcome::Repositories(raw) => Ok(project(&raw, ctx.sort)),
        FetchOutcome::Empty => Ok(None),
        FetchOutcome::Failed { status, reason } => Err(Outcome::Failed { status, reason }),
    };

    let (outcome, delivery) = match projected {
        Ok(Some(repos)) => {
            let delivery = deliver(&ctx.mode, Payload::Repositories(&repos)).await?;
            (Outcome::Repositories { count: repos.len() }, delivery)
        }
        Ok(None) => (Outcome::Empty, deliver(&ctx.mode, Payload::Empty).await?),
        Err(failed) => {
            warn!(outcome = ?failed, "Fetch failed, nothing delivered");
            (failed, deliver(&ctx.mode, Payload::Failed).await?)
        }
    };

    info!(outcome = ?outcome, "Pipeline finished");
    Ok(RunReport { outcome, delivery })
}

/// Runs the pipeline from plain arguments.
///
/// `mode` is `"write"` or `"return"`; `output_path` is required for write
/// mode. The mode is validated before the token file is read or any request
/// is sent. Configuration is loaded with [`load_config`].
///
/// # Errors
///
/// Returns [`GitGetError::InvalidMode`] or [`GitGetError::MissingOutputPath`]
/// for a bad mode, plus everything [`run`] can return.
pub async fn run_with_args(
    username: &str,
    token_path: Option<PathBuf>,
    mode: &str,
    output_path: Option<PathBuf>,
) -> crate::Result<RunReport> {
    let mode = Mode::parse(mode, output_path)?;
    let config = load_config()?;
    debug!("Configuration loaded");

    let ctx = RequestContext::builder()
        .username(username.to_string())
        .sort(config.github.sort)
        .mode(mode)
        .build();

    run(&ctx, &TokenFile::new(token_path), &config.github).await
}
