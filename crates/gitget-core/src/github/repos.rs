// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository listing for a single account.
//!
//! Issues one `GET /users/{username}/repos` request, newest first. No
//! pagination loop is run, so the result holds at most one page (30
//! repositories with GitHub's default page size).

use std::fmt;
use std::str::FromStr;

use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Recency metric used to order the listing (always descending).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most recently pushed first.
    #[default]
    Pushed,
    /// Most recently updated first.
    Updated,
}

impl SortKey {
    /// Query-string value for this sort key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Pushed => "pushed",
            SortKey::Updated => "updated",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pushed" => Ok(SortKey::Pushed),
            "updated" => Ok(SortKey::Updated),
            other => Err(format!(
                "unknown sort key: {other} (expected `pushed` or `updated`)"
            )),
        }
    }
}

/// Owner object embedded in a repository record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawOwner {
    /// Account login.
    pub login: Option<String>,
}

/// The subset of GitHub's repository representation that gitget reads.
///
/// Every field is optional so that a record missing one of them still
/// decodes; the projector decides what to do with the gaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRepository {
    /// Repository name.
    pub name: Option<String>,
    /// Last push timestamp (`YYYY-MM-DDTHH:MM:SSZ`).
    pub pushed_at: Option<String>,
    /// Last update timestamp (`YYYY-MM-DDTHH:MM:SSZ`).
    pub updated_at: Option<String>,
    /// Repository owner.
    pub owner: Option<RawOwner>,
    /// Free-form description; `null` when unset.
    pub description: Option<String>,
    /// Browser URL of the repository.
    pub html_url: Option<String>,
}

impl RawRepository {
    /// Timestamp that matches the given sort key.
    #[must_use]
    pub fn timestamp(&self, sort: SortKey) -> Option<&str> {
        match sort {
            SortKey::Pushed => self.pushed_at.as_deref(),
            SortKey::Updated => self.updated_at.as_deref(),
        }
    }

    /// Login of the repository owner.
    #[must_use]
    pub fn owner_login(&self) -> Option<&str> {
        self.owner.as_ref().and_then(|o| o.login.as_deref())
    }
}

/// Result of the repository listing request.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The account has at least one repository.
    Repositories(Vec<RawRepository>),
    /// The request succeeded but returned no repositories.
    Empty,
    /// The request failed (non-success status, network or decode error).
    Failed {
        /// HTTP status returned by GitHub, if the request got that far.
        status: Option<u16>,
        /// Human-readable cause.
        reason: String,
    },
}

/// Longest login GitHub accepts.
const MAX_LOGIN_LEN: usize = 39;

/// Returns true if `login` is a well-formed GitHub account name.
///
/// Logins are ASCII letters, digits and `-`, up to 39 characters, and never
/// start with `-`. Anything else could change the request path or query.
#[must_use]
pub fn is_valid_login(login: &str) -> bool {
    !login.is_empty()
        && login.len() <= MAX_LOGIN_LEN
        && !login.starts_with('-')
        && login.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// Query parameters for the listing request.
#[derive(Debug, Serialize)]
struct ListParams {
    #[serde(rename = "type")]
    kind: &'static str,
    sort: SortKey,
    direction: &'static str,
}

/// Lists `username`'s repositories, most recent first by `sort`.
///
/// Never returns an error: failures are folded into
/// [`FetchOutcome::Failed`] and logged. A `username` that is not a valid
/// login fails without sending a request.
#[instrument(skip(client))]
pub async fn fetch_repositories(client: &Octocrab, username: &str, sort: SortKey) -> FetchOutcome {
    if !is_valid_login(username) {
        warn!("Refusing to request repositories for an invalid login");
        return FetchOutcome::Failed {
            status: None,
            reason: format!("invalid username: {username:?}"),
        };
    }

    let route = format!("/users/{username}/repos");
    let params = ListParams {
        kind: "owner",
        sort,
        direction: "desc",
    };

    debug!(route = %route, "Listing repositories");

    match client
        .get::<Vec<RawRepository>, _, _>(&route, Some(&params))
        .await
    {
        Ok(repos) if repos.is_empty() => {
            debug!("Account has no repositories");
            FetchOutcome::Empty
        }
        Ok(repos) => {
            debug!(count = repos.len(), "Fetched repositories");
            FetchOutcome::Repositories(repos)
        }
        Err(e) => {
            let status = status_code(&e);
            warn!(status = ?status, error = %e, "Repository listing failed");
            FetchOutcome::Failed {
                status,
                reason: e.to_string(),
            }
        }
    }
}

/// Extracts the HTTP status from an octocrab error, when GitHub answered.
fn status_code(err: &octocrab::Error) -> Option<u16> {
    match err {
        octocrab::Error::GitHub { source, .. } => Some(source.status_code.as_u16()),
        _ => None,
    }
}
