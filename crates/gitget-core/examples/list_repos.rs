// SPDX-License-Identifier: GPL-3.0-or-later

//! List an account's repositories using the pipeline API.
//!
//! Run with: `cargo run --example list_repos -p gitget-core -- <username> [token-file]`

use gitget_core::{Delivery, Outcome, ProjectedRepository, run_with_args};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let username = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("usage: list_repos <username> [token-file]"))?;
    let token_path = args.next().map(Into::into);

    let report = run_with_args(&username, token_path, "return", None).await?;

    match (report.outcome, report.delivery) {
        (Outcome::Failed { status, reason }, _) => {
            anyhow::bail!("fetch failed (status {status:?}): {reason}");
        }
        (_, Delivery::Returned(json)) => {
            let repos: Vec<ProjectedRepository> = serde_json::from_str(&json)?;
            println!("Found {} repositories for {username}:", repos.len());
            for repo in &repos {
                println!("  - {} ({}) {}", repo.name, repo.updated, repo.description);
            }
        }
        (_, other) => println!("Nothing returned: {other:?}"),
    }

    Ok(())
}
