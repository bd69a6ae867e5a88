//! GitHub API client

use async_trait::async_trait;

use crate::error::Result;

pub mod github;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use github::GitHubClient;
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockGitHubClient;
pub use models::{Organization, RepoOwner, Repository, RepositoryDetails};

/// GitHub API operations used by the project aggregator.
///
/// The aggregator depends on this trait rather than the concrete client,
/// so tests can inject a mock upstream.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// List an account's repositories (single page, most recently pushed first)
    async fn list_user_repos(&self, account: &str) -> Result<Vec<Repository>>;

    /// List the organizations an account belongs to
    async fn list_user_orgs(&self, account: &str) -> Result<Vec<Organization>>;

    /// List an organization's repositories (single page, most recently pushed first)
    async fn list_org_repos(&self, org: &str) -> Result<Vec<Repository>>;

    /// Fetch a single repository's full record
    async fn get_repo(&self, owner: &str, repo: &str) -> Result<RepositoryDetails>;

    /// Fetch a repository's readme as raw text
    async fn get_readme(&self, owner: &str, repo: &str) -> Result<String>;
}
