//! Wire models for the GitHub REST API
//!
//! These structs mirror the JSON payloads returned by api.github.com.
//! Responses carry many more fields than we read; serde skips the rest.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repository record as returned by the list endpoints
/// (`/users/{account}/repos`, `/orgs/{org}/repos`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name
    pub name: String,

    /// Repository description
    pub description: Option<String>,

    /// Whether the repository is private
    pub private: bool,

    /// Timestamp of the last push
    pub pushed_at: DateTime<Utc>,

    /// Unique "owner/name" key, used for deduplication
    pub full_name: String,

    /// Repository owner
    pub owner: RepoOwner,
}

/// Repository owner (user or organization)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoOwner {
    /// Owner login name
    pub login: String,

    /// Owner type ("User" or "Organization")
    #[serde(rename = "type")]
    pub kind: String,
}

/// Full repository record as returned by `/repos/{owner}/{repo}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryDetails {
    /// Repository name
    pub name: String,

    /// Repository description
    pub description: Option<String>,

    /// Whether the repository is private
    pub private: bool,

    /// Timestamp of the last push
    pub pushed_at: DateTime<Utc>,

    /// Unique "owner/name" key
    pub full_name: String,

    /// Primary language
    pub language: Option<String>,

    /// Star count
    pub stargazers_count: u32,

    /// Fork count
    pub forks_count: u32,

    /// Open issue count
    pub open_issues_count: u32,

    /// Web URL of the repository
    pub html_url: String,

    /// Homepage URL, if set
    pub homepage: Option<String>,

    /// Repository topics
    #[serde(default)]
    pub topics: Vec<String>,

    /// Default branch name
    pub default_branch: String,

    /// Repository owner
    pub owner: RepoOwner,
}

/// Organization record as returned by `/users/{account}/orgs`.
///
/// Only the login is needed; it drives the per-organization repo fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// Organization login name
    pub login: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_deserializes_github_payload() {
        let json = r#"{
            "name": "folio",
            "full_name": "maxime/folio",
            "description": null,
            "private": false,
            "pushed_at": "2025-06-01T12:00:00Z",
            "owner": { "login": "maxime", "type": "User" },
            "stargazers_count": 12,
            "some_unknown_field": true
        }"#;

        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.full_name, "maxime/folio");
        assert_eq!(repo.description, None);
        assert!(!repo.private);
        assert_eq!(repo.owner.login, "maxime");
        assert_eq!(repo.owner.kind, "User");
    }

    #[test]
    fn test_repository_details_defaults_topics() {
        let json = r#"{
            "name": "folio",
            "full_name": "maxime/folio",
            "description": "Portfolio companion",
            "private": false,
            "pushed_at": "2025-06-01T12:00:00Z",
            "language": "Rust",
            "stargazers_count": 12,
            "forks_count": 3,
            "open_issues_count": 1,
            "html_url": "https://github.com/maxime/folio",
            "homepage": null,
            "default_branch": "main",
            "owner": { "login": "maxime", "type": "User" }
        }"#;

        let details: RepositoryDetails = serde_json::from_str(json).unwrap();
        assert!(details.topics.is_empty());
        assert_eq!(details.language.as_deref(), Some("Rust"));
        assert_eq!(details.default_branch, "main");
    }

    #[test]
    fn test_owner_kind_roundtrips_as_type() {
        let owner = RepoOwner {
            login: "acme".to_string(),
            kind: "Organization".to_string(),
        };

        let json = serde_json::to_string(&owner).unwrap();
        assert!(json.contains("\"type\":\"Organization\""));

        let back: RepoOwner = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind, "Organization");
    }
}
