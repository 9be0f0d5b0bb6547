// SPDX-License-Identifier: GPL-3.0-or-later

//! Output stage: write the projected list to a file or return it.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::error::GitGetError;
use crate::project::ProjectedRepository;

/// Where the projected repositories go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Serialize to JSON and overwrite the file at `path`.
    Write {
        /// Destination file.
        path: PathBuf,
    },
    /// Serialize to JSON and hand the string back to the caller.
    Return,
}

impl Mode {
    /// Builds a mode from its name and an optional output path.
    ///
    /// `"write"` needs a non-empty path; `"return"` ignores it.
    ///
    /// # Errors
    ///
    /// Returns [`GitGetError::InvalidMode`] for any other name and
    /// [`GitGetError::MissingOutputPath`] for write mode without a path.
    pub fn parse(mode: &str, output: Option<PathBuf>) -> Result<Self, GitGetError> {
        match mode {
            "write" => match output {
                Some(path) if !path.as_os_str().is_empty() => Ok(Mode::Write { path }),
                _ => Err(GitGetError::MissingOutputPath),
            },
            "return" => Ok(Mode::Return),
            other => Err(GitGetError::InvalidMode {
                mode: other.to_string(),
            }),
        }
    }
}

/// What the sink did with the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The JSON document was written to `path`.
    Written {
        /// Destination file.
        path: PathBuf,
        /// Number of repositories written.
        count: usize,
    },
    /// The JSON document, for return mode.
    Returned(String),
    /// Nothing to deliver: write mode with no repositories, or a failed fetch.
    Skipped,
}

/// Serializes repositories as a compact JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(repos: &[ProjectedRepository]) -> Result<String, GitGetError> {
    Ok(serde_json::to_string(repos)?)
}

/// What the pipeline has to hand to the sink.
#[derive(Debug, Clone, Copy)]
pub enum Payload<'a> {
    /// Projected repositories, in provider order.
    Repositories(&'a [ProjectedRepository]),
    /// The account has no repositories.
    Empty,
    /// The fetch failed; there is no data.
    Failed,
}

/// Delivers the payload according to `mode`.
///
/// Write mode only touches the filesystem when there are repositories.
/// Return mode yields `"[]"` for an empty account and
/// [`Delivery::Skipped`] for a failed fetch, so a failure never looks like
/// data.
///
/// # Errors
///
/// Returns an error if serialization or the file write fails.
#[instrument(skip(payload))]
pub async fn deliver(mode: &Mode, payload: Payload<'_>) -> Result<Delivery, GitGetError> {
    match (mode, payload) {
        (Mode::Write { path }, Payload::Repositories(repos)) => {
            let json = to_json(repos)?;
            tokio::fs::write(path, json)
                .await
                .map_err(|source| GitGetError::Io {
                    path: path.clone(),
                    source,
                })?;
            info!(path = %path.display(), count = repos.len(), "Wrote repositories");
            Ok(Delivery::Written {
                path: path.clone(),
                count: repos.len(),
            })
        }
        (Mode::Write { path }, Payload::Empty | Payload::Failed) => {
            debug!(path = %path.display(), "Nothing to write, leaving output untouched");
            Ok(Delivery::Skipped)
        }
        (Mode::Return, Payload::Repositories(repos)) => Ok(Delivery::Returned(to_json(repos)?)),
        (Mode::Return, Payload::Empty) => Ok(Delivery::Returned("[]".to_string())),
        (Mode::Return, Payload::Failed) => Ok(Delivery::Skipped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ProjectedRepository> {
        vec![ProjectedRepository {
            name: "Hello-World".to_string(),
            updated: "2011-01-26 19:06:43".to_string(),
            owner: "octocat".to_string(),
            description: "No description.".to_string(),
            url: "https://github.com/octocat/Hello-World".to_string(),
        }]
    }

    #[test]
    fn test_parse_write_with_path() {
        let mode = Mode::parse("write", Some(PathBuf::from("out.json"))).unwrap();
        assert_eq!(
            mode,
            Mode::Write {
                path: PathBuf::from("out.json")
            }
        );
    }

    #[test]
    fn test_parse_write_without_path() {
        assert!(matches!(
            Mode::parse("write", None),
            Err(GitGetError::MissingOutputPath)
        ));
        assert!(matches!(
            Mode::parse("write", Some(PathBuf::new())),
            Err(GitGetError::MissingOutputPath)
        ));
    }

    #[test]
    fn test_parse_return_ignores_path() {
        let mode = Mode::parse("return", Some(PathBuf::from("ignored.json"))).unwrap();
        assert_eq!(mode, Mode::Return);
    }

    #[test]
    fn test_parse_invalid_mode() {
        let err = Mode::parse("delete", None).unwrap_err();
        match err {
            GitGetError::InvalidMode { mode } => assert_eq!(mode, "delete"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_to_json_layout() {
        let json = to_json(&sample()).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"Hello-World","updated":"2011-01-26 19:06:43","owner":"octocat","description":"No description.","url":"https://github.com/octocat/Hello-World"}]"#
        );
    }

    #[tokio::test]
    async fn test_deliver_write_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repos.json");
        std::fs::write(&path, "stale contents that are longer than the new output").unwrap();

        let repos = sample();
        let mode = Mode::Write { path: path.clone() };
        let delivery = deliver(&mode, Payload::Repositories(&repos)).await.unwrap();

        assert_eq!(delivery, Delivery::Written { path: path.clone(), count: 1 });
        assert_eq!(std::fs::read_to_string(&path).unwrap(), to_json(&repos).unwrap());
    }

    #[tokio::test]
    async fn test_deliver_write_nothing_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repos.json");

        let mode = Mode::Write { path: path.clone() };
        let delivery = deliver(&mode, Payload::Empty).await.unwrap();

        assert_eq!(delivery, Delivery::Skipped);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_deliver_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("repos.json");

        let mode = Mode::Write { path };
        let err = deliver(&mode, Payload::Repositories(&sample())).await.unwrap_err();
        assert!(matches!(err, GitGetError::Io { .. }));
    }

    #[tokio::test]
    async fn test_deliver_return_empty_and_failed() {
        assert_eq!(
            deliver(&Mode::Return, Payload::Empty).await.unwrap(),
            Delivery::Returned("[]".to_string())
        );
        assert_eq!(
            deliver(&Mode::Return, Payload::Failed).await.unwrap(),
            Delivery::Skipped
        );
    }
}
