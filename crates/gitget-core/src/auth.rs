// SPDX-License-Identifier: GPL-3.0-or-later

//! Token provider abstraction for credential resolution.
//!
//! The pipeline asks a [`TokenProvider`] for the GitHub token instead of
//! reading a global, so each run carries its own credential scope.

use std::path::PathBuf;

use async_trait::async_trait;
use secrecy::SecretString;

use crate::github::auth::read_token_file;

/// Provides the GitHub credential for a pipeline run.
///
/// Implementations return `None` when no credential is available; the
/// request is then sent unauthenticated.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Retrieves the GitHub API token.
    async fn github_token(&self) -> Option<SecretString>;
}

/// Reads the GitHub token from a file on every request.
///
/// With no path configured, requests are sent without authentication.
#[derive(Debug, Clone, Default)]
pub struct TokenFile {
    path: Option<PathBuf>,
}

impl TokenFile {
    /// Creates a provider backed by the given token file.
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Path of the token file, if one is configured.
    #[must_use]
    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }
}

#[async_trait]
impl TokenProvider for TokenFile {
    async fn github_token(&self) -> Option<SecretString> {
        match &self.path {
            Some(path) => read_token_file(path).await,
            None => None,
        }
    }
}
