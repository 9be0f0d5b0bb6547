// SPDX-License-Identifier: GPL-3.0-or-later

//! Error types for gitget.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during gitget operations.
///
/// A failed repository fetch is not an error: it is reported as
/// [`crate::Outcome::Failed`] so that callers can tell it apart from an
/// account with no repositories.
#[derive(Error, Debug)]
pub enum GitGetError {
    /// The requested mode is neither `write` nor `return`.
    #[error("invalid mode: {mode} (expected `write` or `return`)")]
    InvalidMode {
        /// The rejected mode string.
        mode: String,
    },

    /// Write mode was requested without a destination path.
    #[error("write mode requires an output file path")]
    MissingOutputPath,

    /// The account name was empty.
    #[error("username must not be empty")]
    EmptyUsername,

    /// The account name is not a valid GitHub login.
    #[error("invalid username: {username:?} (only letters, digits and `-` are allowed)")]
    InvalidUsername {
        /// The rejected account name.
        username: String,
    },

    /// GitHub client construction error from octocrab.
    #[error("GitHub API error: {message}")]
    GitHub {
        /// Error message.
        message: String,
    },

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// Filesystem error while writing output.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path that was being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("Failed to serialize repositories: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<octocrab::Error> for GitGetError {
    fn from(err: octocrab::Error) -> Self {
        GitGetError::GitHub {
            message: err.to_string(),
        }
    }
}

impl From<config::ConfigError> for GitGetError {
    fn from(err: config::ConfigError) -> Self {
        GitGetError::Config {
            message: err.to_string(),
        }
    }
}
