// SPDX-License-Identifier: GPL-3.0-or-later

//! Command-line interface definition for gitget.
//!
//! Uses clap's derive API for declarative CLI parsing.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use gitget_core::SortKey;

/// Recency metric accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    /// Most recently pushed first
    Pushed,
    /// Most recently updated first
    Updated,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Pushed => SortKey::Pushed,
            SortArg::Updated => SortKey::Updated,
        }
    }
}

/// Global output configuration passed to commands.
#[derive(Clone)]
pub struct OutputContext {
    /// Suppress non-essential output (spinners)
    pub quiet: bool,
    /// Whether stderr is a terminal (TTY)
    pub is_tty: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(quiet: bool) -> Self {
        Self {
            quiet,
            is_tty: std::io::stderr().is_terminal(),
        }
    }

    /// Returns true if interactive elements (spinners) should be shown.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && !self.quiet
    }
}

/// gitget - list a GitHub account's repositories as JSON.
///
/// Fetches the account's repositories, newest first, keeps name, timestamp,
/// owner, description and URL, and either prints the JSON or writes it to a
/// file.
#[derive(Parser)]
#[command(name = "gitget")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// GitHub account whose repositories are listed
    pub username: String,

    /// File containing a GitHub token (raises the API rate limit)
    #[arg(long, short = 't', env = "GITGET_TOKEN_FILE", value_name = "PATH")]
    pub token_file: Option<PathBuf>,

    /// What to do with the result: `write` to a file or `return` it on stdout
    #[arg(long, short = 'm', default_value = "return", value_name = "MODE")]
    pub mode: String,

    /// Destination file for write mode
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Recency metric used for ordering (overrides the config file)
    #[arg(long, short = 's', value_enum)]
    pub sort: Option<SortArg>,

    /// Only log errors
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose output (debug-level logging)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
