// SPDX-License-Identifier: GPL-3.0-or-later

#![warn(missing_docs)]

//! # gitget Core
//!
//! Core library for gitget: list a GitHub account's repositories, reduce each
//! record to five fields and write the result as JSON or hand it back as a
//! string.
//!
//! The pipeline runs four stages in order:
//! - credential loading from a token file ([`github::auth`])
//! - a single repository listing request ([`github::repos`])
//! - projection to [`ProjectedRepository`] ([`project`])
//! - delivery to a file or the caller ([`sink`])
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gitget_core::{Delivery, Mode, RequestContext, SortKey, TokenFile, load_config, run};
//! use anyhow::Result;
//!
//! # async fn example() -> Result<()> {
//! let config = load_config()?;
//!
//! let ctx = RequestContext::builder()
//!     .username("octocat".to_string())
//!     .sort(SortKey::Pushed)
//!     .mode(Mode::Return)
//!     .build();
//!
//! let tokens = TokenFile::new(Some("token.txt".into()));
//! let report = run(&ctx, &tokens, &config.github).await?;
//!
//! if let Delivery::Returned(json) = report.delivery {
//!     println!("{json}");
//! }
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Authentication
// ============================================================================

pub use auth::{TokenFile, TokenProvider};

// ============================================================================
// Error Handling
// ============================================================================

pub use error::GitGetError;

/// Convenience Result type for gitget operations.
///
/// This is equivalent to `std::result::Result<T, GitGetError>`.
pub type Result<T> = std::result::Result<T, GitGetError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{AppConfig, GitHubConfig, config_dir, config_file_path, load_config};

// ============================================================================
// GitHub Integration
// ============================================================================

pub use github::repos::{FetchOutcome, RawRepository, SortKey};

// ============================================================================
// Projection and Delivery
// ============================================================================

pub use project::{DEFAULT_DESCRIPTION, ProjectedRepository, format_timestamp};
pub use sink::{Delivery, Mode};

// ============================================================================
// Pipeline
// ============================================================================

pub use pipeline::{Outcome, RequestContext, RunReport, run, run_with_args};

// ============================================================================
// Modules
// ============================================================================

pub mod auth;
pub mod config;
pub mod error;
pub mod github;
pub mod pipeline;
pub mod project;
pub mod sink;
