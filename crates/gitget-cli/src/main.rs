// SPDX-License-Identifier: GPL-3.0-or-later

//! gitget - list a GitHub account's repositories as JSON.
//!
//! A CLI front end for `gitget-core`: fetches an account's repositories,
//! newest first, and prints or writes the reduced JSON list.

mod cli;
mod commands;
mod errors;
mod logging;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::{Cli, OutputContext};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.quiet, cli.verbose);

    let output_ctx = OutputContext::from_cli(cli.quiet);

    match commands::run(cli, &output_ctx).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            ExitCode::FAILURE
        }
    }
}
