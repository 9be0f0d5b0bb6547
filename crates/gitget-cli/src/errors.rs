// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `GitGetError` and adds command-line hints.
//! The library keeps the structured error; presentation lives here.

use anyhow::Error;
use gitget_core::error::GitGetError;

/// Formats an error for CLI display with helpful hints.
///
/// If the error is not a `GitGetError`, returns the error chain.
pub fn format_error(error: &Error) -> String {
    let Some(err) = error.downcast_ref::<GitGetError>() else {
        return format!("{error:#}");
    };

    match err {
        GitGetError::InvalidMode { .. } => {
            format!("{err}\n\nTip: Use `--mode return`, or `--mode write --output <PATH>`.")
        }
        GitGetError::MissingOutputPath => {
            format!("{err}\n\nTip: Pass `--output <PATH>` together with `--mode write`.")
        }
        GitGetError::InvalidUsername { .. } => {
            format!("{err}\n\nTip: Pass the account login as shown in its GitHub profile URL.")
        }
        GitGetError::Config { .. } => {
            format!(
                "{err}\n\nTip: Check your config file at {}",
                gitget_core::config_file_path().display()
            )
        }
        GitGetError::GitHub { .. } => {
            format!("{err}\n\nTip: Check `github.base_url` in your configuration.")
        }
        GitGetError::Io { .. } => {
            format!("{err}\n\nTip: Make sure the output directory exists and is writable.")
        }
        GitGetError::EmptyUsername | GitGetError::Serialization(_) => err.to_string(),
    }
}
