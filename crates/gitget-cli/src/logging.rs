// SPDX-License-Identifier: GPL-3.0-or-later

//! Logging initialization for the gitget CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging to stderr,
//! so stdout carries only the JSON result. Log level can be controlled via
//! the `RUST_LOG` environment variable.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings and errors from gitget, errors from dependencies
//! gitget octocat
//!
//! # Debug output for troubleshooting
//! RUST_LOG=gitget=debug gitget octocat
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter directives for the given verbosity flags.
fn default_filter(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "gitget=error,octocrab=error"
    } else if verbose {
        "gitget=debug,octocrab=warn"
    } else {
        "gitget=warn,octocrab=error"
    }
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG` takes precedence over the `-q` / `-v` flags.
pub fn init_logging(quiet: bool, verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter(quiet, verbose)))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_parse() {
        for (quiet, verbose) in [(false, false), (true, false), (false, true)] {
            assert!(EnvFilter::try_new(default_filter(quiet, verbose)).is_ok());
        }
    }

    #[test]
    fn test_quiet_wins_over_verbose() {
        assert!(default_filter(true, true).starts_with("gitget=error"));
    }
}
