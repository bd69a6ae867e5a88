//! Project aggregation
//!
//! Builds the portfolio's "projects" view from the GitHub upstream: the
//! configured account's repositories plus those of every organization the
//! account belongs to, merged, deduplicated and sorted by last push.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use futures::future;
use log::{debug, warn};
use serde::Serialize;

use crate::client::models::{Repository, RepositoryDetails};
use crate::client::GitHubApi;
use crate::error::Result;

/// Repository visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    fn from_private(private: bool) -> Self {
        if private {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

/// Kind of the owning account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerKind {
    User,
    Organization,
}

impl OwnerKind {
    fn from_api(kind: &str) -> Self {
        if kind.eq_ignore_ascii_case("organization") {
            OwnerKind::Organization
        } else {
            OwnerKind::User
        }
    }
}

impl fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnerKind::User => write!(f, "user"),
            OwnerKind::Organization => write!(f, "organization"),
        }
    }
}

/// One project in the aggregated list view.
///
/// Identity is `full_name`; the list never contains two entries with the
/// same value.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub name: String,
    pub description: Option<String>,
    pub visibility: Visibility,
    pub last_activity_at: DateTime<Utc>,
    pub full_name: String,
    pub owner: String,
    pub owner_kind: OwnerKind,
}

impl From<Repository> for ProjectSummary {
    fn from(repo: Repository) -> Self {
        Self {
            name: repo.name,
            description: repo.description,
            visibility: Visibility::from_private(repo.private),
            last_activity_at: repo.pushed_at,
            full_name: repo.full_name,
            owner_kind: OwnerKind::from_api(&repo.owner.kind),
            owner: repo.owner.login,
        }
    }
}

/// One project's full detail view, fetched on demand per `(owner, repo)`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub name: String,
    pub description: Option<String>,
    pub visibility: Visibility,
    pub last_activity_at: DateTime<Utc>,
    pub full_name: String,
    pub owner: String,
    pub owner_kind: OwnerKind,
    pub language: Option<String>,
    pub star_count: u32,
    pub fork_count: u32,
    pub open_issue_count: u32,
    pub web_url: String,
    pub homepage_url: Option<String>,
    pub topics: Vec<String>,
    pub default_branch: String,
    pub readme: Option<String>,
}

impl ProjectDetail {
    fn from_api(details: RepositoryDetails, readme: Option<String>) -> Self {
        Self {
            name: details.name,
            description: details.description,
            visibility: Visibility::from_private(details.private),
            last_activity_at: details.pushed_at,
            full_name: details.full_name,
            owner_kind: OwnerKind::from_api(&details.owner.kind),
            owner: details.owner.login,
            language: details.language,
            star_count: details.stargazers_count,
            fork_count: details.forks_count,
            open_issue_count: details.open_issues_count,
            web_url: details.html_url,
            homepage_url: details.homepage,
            topics: details.topics,
            default_branch: details.default_branch,
            readme,
        }
    }
}

/// List the aggregated projects for an account.
///
/// The account's own repository listing is fatal on failure. The org
/// listing and each per-org repository fetch are best-effort: a failed
/// one contributes nothing and the others are unaffected. Per-org
/// fetches run concurrently and are joined before merging.
pub async fn list_projects<C: GitHubApi + ?Sized>(
    client: &C,
    account: &str,
) -> Result<Vec<ProjectSummary>> {
    let mut all_repos = client.list_user_repos(account).await?;
    debug!("Fetched {} repositories for {}", all_repos.len(), account);

    let orgs = match client.list_user_orgs(account).await {
        Ok(orgs) => orgs,
        Err(e) => {
            warn!("Failed to list organizations for {}: {}", account, e);
            Vec::new()
        }
    };

    let org_fetches = orgs
        .iter()
        .map(|org| async move { (org.login.as_str(), client.list_org_repos(&org.login).await) });

    for (login, result) in future::join_all(org_fetches).await {
        match result {
            Ok(mut repos) => {
                debug!("Fetched {} repositories for org {}", repos.len(), login);
                all_repos.append(&mut repos);
            }
            Err(e) => warn!("Skipping organization {}: {}", login, e),
        }
    }

    let mut unique = dedup_by_full_name(all_repos);
    // Stable sort: equal timestamps keep fetch order
    unique.sort_by(|a, b| b.pushed_at.cmp(&a.pushed_at));

    Ok(unique.into_iter().map(ProjectSummary::from).collect())
}

/// Fetch one project's detail, including its readme.
///
/// An upstream 404 for the repository surfaces as `ApiError::NotFound`.
/// The readme sub-fetch is best-effort: any failure, a missing readme
/// included, yields `readme: None`.
pub async fn get_project_detail<C: GitHubApi + ?Sized>(
    client: &C,
    owner: &str,
    repo: &str,
) -> Result<ProjectDetail> {
    let details = client.get_repo(owner, repo).await?;

    let readme = match client.get_readme(owner, repo).await {
        Ok(body) => Some(body),
        Err(e) => {
            debug!("No readme for {}/{}: {}", owner, repo, e);
            None
        }
    };

    Ok(ProjectDetail::from_api(details, readme))
}

/// Drop duplicate `full_name` entries, keeping the first occurrence.
///
/// The account's own repositories are concatenated ahead of org
/// repositories, so they take precedence when a repo appears in both.
fn dedup_by_full_name(repos: Vec<Repository>) -> Vec<Repository> {
    let mut seen = HashSet::new();
    repos
        .into_iter()
        .filter(|repo| seen.insert(repo.full_name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::{Organization, RepoOwner};
    use crate::client::MockGitHubClient;
    use crate::error::{ApiError, Error};
    use chrono::TimeZone;

    fn repo(full_name: &str, pushed_days_ago: i64) -> Repository {
        let (owner, name) = full_name.split_once('/').unwrap();
        Repository {
            name: name.to_string(),
            description: Some(format!("{} description", name)),
            private: false,
            pushed_at: Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0).unwrap()
                - chrono::Duration::days(pushed_days_ago),
            full_name: full_name.to_string(),
            owner: RepoOwner {
                login: owner.to_string(),
                kind: "User".to_string(),
            },
        }
    }

    fn org_repo(full_name: &str, pushed_days_ago: i64) -> Repository {
        let mut r = repo(full_name, pushed_days_ago);
        r.owner.kind = "Organization".to_string();
        r
    }

    fn details(full_name: &str) -> RepositoryDetails {
        let (owner, name) = full_name.split_once('/').unwrap();
        RepositoryDetails {
            name: name.to_string(),
            description: Some("A project".to_string()),
            private: false,
            pushed_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
            full_name: full_name.to_string(),
            language: Some("Rust".to_string()),
            stargazers_count: 42,
            forks_count: 7,
            open_issues_count: 3,
            html_url: format!("https://github.com/{}", full_name),
            homepage: None,
            topics: vec!["cli".to_string()],
            default_branch: "main".to_string(),
            owner: RepoOwner {
                login: owner.to_string(),
                kind: "User".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_list_merges_user_and_org_repos() {
        let client = MockGitHubClient::new()
            .with_user_repos("maxime", vec![repo("maxime/site", 1)])
            .with_orgs("maxime", vec![Organization { login: "acme".to_string() }])
            .with_org_repos("acme", vec![org_repo("acme/widgets", 2)]);

        let projects = list_projects(&client, "maxime").await.unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].full_name, "maxime/site");
        assert_eq!(projects[1].full_name, "acme/widgets");
        assert_eq!(projects[1].owner_kind, OwnerKind::Organization);
    }

    #[tokio::test]
    async fn test_list_deduplicates_by_full_name() {
        // The same repo shows up both as a personal repo and via the org
        let client = MockGitHubClient::new()
            .with_user_repos("maxime", vec![repo("acme/shared", 1)])
            .with_orgs("maxime", vec![Organization { login: "acme".to_string() }])
            .with_org_repos("acme", vec![org_repo("acme/shared", 1)]);

        let projects = list_projects(&client, "maxime").await.unwrap();

        assert_eq!(projects.len(), 1);
        // Primary-account record wins: it was concatenated first
        assert_eq!(projects[0].owner_kind, OwnerKind::User);
    }

    #[tokio::test]
    async fn test_list_sorts_by_last_activity_descending() {
        let client = MockGitHubClient::new()
            .with_user_repos(
                "maxime",
                vec![
                    repo("maxime/old", 30),
                    repo("maxime/new", 0),
                    repo("maxime/middle", 10),
                ],
            )
            .with_orgs("maxime", vec![]);

        let projects = list_projects(&client, "maxime").await.unwrap();

        let names: Vec<&str> = projects.iter().map(|p| p.full_name.as_str()).collect();
        assert_eq!(names, vec!["maxime/new", "maxime/middle", "maxime/old"]);
    }

    #[tokio::test]
    async fn test_list_equal_activity_preserves_fetch_order() {
        // The sort is stable: repositories pushed at the same instant
        // keep their fetch order, user repos before org repos.
        let client = MockGitHubClient::new()
            .with_user_repos(
                "maxime",
                vec![repo("maxime/site", 5), repo("maxime/folio", 5)],
            )
            .with_orgs("maxime", vec![Organization { login: "acme".to_string() }])
            .with_org_repos("acme", vec![org_repo("acme/widgets", 5)]);

        let projects = list_projects(&client, "maxime").await.unwrap();

        let names: Vec<&str> = projects.iter().map(|p| p.full_name.as_str()).collect();
        assert_eq!(names, vec!["maxime/site", "maxime/folio", "acme/widgets"]);
    }

    #[tokio::test]
    async fn test_list_survives_one_failing_org() {
        let client = MockGitHubClient::new()
            .with_user_repos("maxime", vec![repo("maxime/site", 1)])
            .with_orgs(
                "maxime",
                vec![
                    Organization { login: "broken".to_string() },
                    Organization { login: "acme".to_string() },
                ],
            )
            .with_failing_org("broken")
            .with_org_repos(
                "acme",
                vec![org_repo("acme/widgets", 2), org_repo("acme/gadgets", 3)],
            );

        let projects = list_projects(&client, "maxime").await.unwrap();

        assert_eq!(projects.len(), 3);
        assert!(projects.iter().all(|p| !p.full_name.starts_with("broken/")));
    }

    #[tokio::test]
    async fn test_list_survives_failed_org_listing() {
        let client = MockGitHubClient::new()
            .with_user_repos("maxime", vec![repo("maxime/site", 1)])
            .with_failing_org_listing("maxime");

        let projects = list_projects(&client, "maxime").await.unwrap();

        assert_eq!(projects.len(), 1);
    }

    #[tokio::test]
    async fn test_list_fails_when_primary_fetch_fails() {
        // No user repos configured: the mock returns a server error
        let client = MockGitHubClient::new();

        let result = list_projects(&client, "maxime").await;

        match result {
            Err(Error::Api(ApiError::Upstream { status: 500, .. })) => (),
            other => panic!("Expected upstream failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_detail_includes_readme() {
        let client = MockGitHubClient::new()
            .with_repo_details(details("maxime/folio"))
            .with_readme("maxime/folio", "# Folio\n");

        let detail = get_project_detail(&client, "maxime", "folio").await.unwrap();

        assert_eq!(detail.readme.as_deref(), Some("# Folio\n"));
        assert_eq!(detail.star_count, 42);
        assert_eq!(detail.default_branch, "main");
    }

    #[tokio::test]
    async fn test_detail_missing_readme_is_none() {
        let client = MockGitHubClient::new().with_repo_details(details("maxime/folio"));

        let detail = get_project_detail(&client, "maxime", "folio").await.unwrap();

        assert_eq!(detail.readme, None);
        // Everything else is still populated
        assert_eq!(detail.full_name, "maxime/folio");
        assert_eq!(detail.language.as_deref(), Some("Rust"));
    }

    #[tokio::test]
    async fn test_detail_missing_repo_is_not_found() {
        let client = MockGitHubClient::new();

        let result = get_project_detail(&client, "owner", "missing-repo").await;

        match result {
            Err(Error::Api(ApiError::NotFound(_))) => (),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let repos = vec![
            repo("a/one", 1),
            repo("a/two", 2),
            repo("a/one", 5),
            repo("b/three", 3),
            repo("a/two", 9),
        ];

        let unique = dedup_by_full_name(repos);

        let names: Vec<&str> = unique.iter().map(|r| r.full_name.as_str()).collect();
        assert_eq!(names, vec!["a/one", "a/two", "b/three"]);
        // First occurrence retained: a/one pushed 1 day ago, not 5
        assert_eq!(
            unique[0].pushed_at,
            Utc.with_ymd_and_hms(2025, 6, 29, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_summary_projection() {
        let mut r = repo("maxime/site", 1);
        r.private = true;
        let summary = ProjectSummary::from(r);

        assert_eq!(summary.visibility, Visibility::Private);
        assert_eq!(summary.owner, "maxime");
        assert_eq!(summary.owner_kind, OwnerKind::User);
    }
}
