// SPDX-License-Identifier: GPL-3.0-or-later

//! Token file loading and GitHub client construction.
//!
//! A token file holds a personal access token on its first line. Reading it
//! is best effort: any failure is logged and the run falls back to
//! unauthenticated requests, which GitHub serves under a lower rate limit.

use std::path::Path;

use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error, info, instrument, warn};

use crate::config::GitHubConfig;
use crate::error::GitGetError;

/// Reads a GitHub token from `path`.
///
/// Returns `None` (and logs why) if the file cannot be read or holds only
/// whitespace. The token itself is never logged.
#[instrument]
pub async fn read_token_file(path: &Path) -> Option<SecretString> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => {
            let token = contents.trim();
            if token.is_empty() {
                warn!(path = %path.display(), "Token file is empty, continuing unauthenticated");
                None
            } else {
                debug!("Read GitHub token from file");
                Some(SecretString::from(token.to_string()))
            }
        }
        Err(e) => {
            error!(
                path = %path.display(),
                error = %e,
                "Failed to read token file, continuing unauthenticated"
            );
            None
        }
    }
}

/// Creates an Octocrab client for the configured endpoint.
///
/// Uses the personal token when one is given, anonymous access otherwise.
/// Requests carry octocrab's own `User-Agent`, which GitHub requires.
///
/// # Errors
///
/// Returns an error if the base URL is invalid or the client cannot be built.
#[instrument(skip(token), fields(base_url = %config.base_url, authenticated = token.is_some()))]
pub fn create_client(
    config: &GitHubConfig,
    token: Option<&SecretString>,
) -> Result<Octocrab, GitGetError> {
    let mut builder = Octocrab::builder().base_uri(config.base_url.as_str())?;

    if let Some(token) = token {
        builder = builder.personal_token(token.expose_secret().to_string());
        info!("Creating authenticated GitHub client");
    } else {
        info!("Creating unauthenticated GitHub client");
    }

    let client = builder.build()?;
    debug!("Created GitHub client");
    Ok(client)
}
