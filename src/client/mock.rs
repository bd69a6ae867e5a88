//! Mock GitHub API client for testing
//!
//! Provides a canned-response implementation of [`GitHubApi`] for unit
//! testing the aggregator without making real API calls.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use super::models::{Organization, Repository, RepositoryDetails};
use super::GitHubApi;
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure canned responses via builder methods, then hand to the
/// aggregator. Endpoints with no configured response fail the way the
/// real upstream would (not found, or a server error for org listings).
#[derive(Default)]
pub struct MockGitHubClient {
    user_repos: HashMap<String, Vec<Repository>>,
    orgs: HashMap<String, Vec<Organization>>,
    org_repos: HashMap<String, Vec<Repository>>,
    /// Org logins whose repo listing returns a 500
    failing_orgs: HashSet<String>,
    /// Accounts whose org listing returns a 500
    failing_org_listings: HashSet<String>,
    details: HashMap<String, RepositoryDetails>,
    readmes: HashMap<String, String>,
}

impl MockGitHubClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_repos(mut self, account: &str, repos: Vec<Repository>) -> Self {
        self.user_repos.insert(account.to_string(), repos);
        self
    }

    pub fn with_orgs(mut self, account: &str, orgs: Vec<Organization>) -> Self {
        self.orgs.insert(account.to_string(), orgs);
        self
    }

    pub fn with_org_repos(mut self, org: &str, repos: Vec<Repository>) -> Self {
        self.org_repos.insert(org.to_string(), repos);
        self
    }

    /// Make one organization's repo listing fail with a server error
    pub fn with_failing_org(mut self, org: &str) -> Self {
        self.failing_orgs.insert(org.to_string());
        self
    }

    /// Make the org listing itself fail with a server error
    pub fn with_failing_org_listing(mut self, account: &str) -> Self {
        self.failing_org_listings.insert(account.to_string());
        self
    }

    pub fn with_repo_details(mut self, details: RepositoryDetails) -> Self {
        self.details.insert(details.full_name.clone(), details);
        self
    }

    pub fn with_readme(mut self, full_name: &str, body: &str) -> Self {
        self.readmes.insert(full_name.to_string(), body.to_string());
        self
    }

    fn server_error(what: &str) -> crate::error::Error {
        ApiError::Upstream {
            status: 500,
            message: format!("mock failure: {}", what),
        }
        .into()
    }
}

#[async_trait]
impl GitHubApi for MockGitHubClient {
    async fn list_user_repos(&self, account: &str) -> Result<Vec<Repository>> {
        self.user_repos
            .get(account)
            .cloned()
            .ok_or_else(|| Self::server_error(account))
    }

    async fn list_user_orgs(&self, account: &str) -> Result<Vec<Organization>> {
        if self.failing_org_listings.contains(account) {
            return Err(Self::server_error(account));
        }
        Ok(self.orgs.get(account).cloned().unwrap_or_default())
    }

    async fn list_org_repos(&self, org: &str) -> Result<Vec<Repository>> {
        if self.failing_orgs.contains(org) {
            return Err(Self::server_error(org));
        }
        self.org_repos
            .get(org)
            .cloned()
            .ok_or_else(|| Self::server_error(org))
    }

    async fn get_repo(&self, owner: &str, repo: &str) -> Result<RepositoryDetails> {
        let key = format!("{}/{}", owner, repo);
        self.details
            .get(&key)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("repos/{}", key)).into())
    }

    async fn get_readme(&self, owner: &str, repo: &str) -> Result<String> {
        let key = format!("{}/{}", owner, repo);
        self.readmes
            .get(&key)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("repos/{}/readme", key)).into())
    }
}
