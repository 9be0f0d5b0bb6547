// SPDX-License-Identifier: GPL-3.0-or-later

//! Projection of raw repository records to the five-field output schema.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::github::repos::{RawRepository, SortKey};

/// Placeholder used when a repository has no description.
pub const DEFAULT_DESCRIPTION: &str = "No description.";

/// A repository reduced to the fields gitget publishes.
///
/// Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedRepository {
    /// Repository name.
    pub name: String,
    /// Timestamp as `YYYY-MM-DD HH:MM:SS` (UTC, relabeled, not converted).
    pub updated: String,
    /// Owner login.
    pub owner: String,
    /// Description, never empty.
    pub description: String,
    /// Browser URL.
    pub url: String,
}

/// Rewrites an ISO 8601 UTC timestamp to `YYYY-MM-DD HH:MM:SS`.
///
/// Pure string rewrite: the first `T` becomes a space and one trailing `Z`
/// is dropped. No parsing and no timezone conversion.
///
/// # Examples
///
/// ```
/// use gitget_core::format_timestamp;
///
/// assert_eq!(format_timestamp("2022-05-01T12:30:00Z"), "2022-05-01 12:30:00");
/// ```
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    let trimmed = raw.strip_suffix('Z').unwrap_or(raw);
    trimmed.replacen('T', " ", 1)
}

/// Projects raw records to [`ProjectedRepository`] values, keeping order.
///
/// Returns `None` for an empty input. Records missing a field are kept with
/// an empty string in that field and a warning is logged.
#[must_use]
pub fn project(raw: &[RawRepository], sort: SortKey) -> Option<Vec<ProjectedRepository>> {
    if raw.is_empty() {
        return None;
    }

    Some(raw.iter().map(|repo| project_one(repo, sort)).collect())
}

fn project_one(repo: &RawRepository, sort: SortKey) -> ProjectedRepository {
    let name = required(repo.name.as_deref(), "name", repo);
    let updated = required(repo.timestamp(sort), timestamp_field(sort), repo);
    let owner = required(repo.owner_login(), "owner.login", repo);
    let url = required(repo.html_url.as_deref(), "html_url", repo);

    let description = match repo.description.as_deref() {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => DEFAULT_DESCRIPTION.to_string(),
    };

    ProjectedRepository {
        name: name.to_string(),
        updated: format_timestamp(updated),
        owner: owner.to_string(),
        description,
        url: url.to_string(),
    }
}

fn timestamp_field(sort: SortKey) -> &'static str {
    match sort {
        SortKey::Pushed => "pushed_at",
        SortKey::Updated => "updated_at",
    }
}

fn required<'a>(value: Option<&'a str>, field: &str, repo: &RawRepository) -> &'a str {
    value.unwrap_or_else(|| {
        warn!(
            field,
            repo = repo.name.as_deref().unwrap_or("<unnamed>"),
            "Repository record is missing a field"
        );
        ""
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::repos::RawOwner;

    fn raw(name: &str, description: Option<&str>) -> RawRepository {
        RawRepository {
            name: Some(name.to_string()),
            pushed_at: Some("2022-05-01T12:30:00Z".to_string()),
            updated_at: Some("2022-06-02T08:00:00Z".to_string()),
            owner: Some(RawOwner {
                login: Some("octocat".to_string()),
            }),
            description: description.map(str::to_string),
            html_url: Some(format!("https://github.com/octocat/{name}")),
        }
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2022-05-01T12:30:00Z"), "2022-05-01 12:30:00");
    }

    #[test]
    fn test_format_timestamp_without_zone_suffix() {
        assert_eq!(format_timestamp("2022-05-01T12:30:00"), "2022-05-01 12:30:00");
    }

    #[test]
    fn test_format_timestamp_only_first_separator() {
        assert_eq!(format_timestamp("2022-05-01T12T30Z"), "2022-05-01 12T30");
    }

    #[test]
    fn test_project_empty_returns_none() {
        assert!(project(&[], SortKey::Pushed).is_none());
    }

    #[test]
    fn test_project_preserves_length_and_order() {
        let input = vec![raw("zeta", Some("z")), raw("alpha", Some("a")), raw("mid", None)];
        let out = project(&input, SortKey::Pushed).unwrap();

        assert_eq!(out.len(), 3);
        let names: Vec<_> = out.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_project_fields() {
        let out = project(&[raw("Hello-World", Some("My first repo"))], SortKey::Pushed).unwrap();
        assert_eq!(
            out[0],
            ProjectedRepository {
                name: "Hello-World".to_string(),
                updated: "2022-05-01 12:30:00".to_string(),
                owner: "octocat".to_string(),
                description: "My first repo".to_string(),
                url: "https://github.com/octocat/Hello-World".to_string(),
            }
        );
    }

    #[test]
    fn test_project_uses_updated_at_for_updated_sort() {
        let out = project(&[raw("repo", None)], SortKey::Updated).unwrap();
        assert_eq!(out[0].updated, "2022-06-02 08:00:00");
    }

    #[test]
    fn test_null_description_gets_placeholder() {
        let out = project(&[raw("repo", None)], SortKey::Pushed).unwrap();
        assert_eq!(out[0].description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_empty_description_gets_placeholder() {
        let out = project(&[raw("repo", Some(""))], SortKey::Pushed).unwrap();
        assert_eq!(out[0].description, "No description.");
    }

    #[test]
    fn test_missing_fields_do_not_fail() {
        let bare = RawRepository {
            name: Some("bare".to_string()),
            ..RawRepository::default()
        };
        let out = project(&[bare], SortKey::Pushed).unwrap();

        assert_eq!(out[0].name, "bare");
        assert_eq!(out[0].updated, "");
        assert_eq!(out[0].owner, "");
        assert_eq!(out[0].url, "");
        assert_eq!(out[0].description, DEFAULT_DESCRIPTION);
    }
}
