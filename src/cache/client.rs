//! Cached wrapper for the GitHub API client
//!
//! Provides transparent read-through caching of API responses using
//! SQLite storage. Only successful responses are cached; failures always
//! hit the upstream again.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::{Serialize, de::DeserializeOwned};

use crate::cache::{CacheStorage, CacheTtl, cache_key};
use crate::client::models::{Organization, Repository, RepositoryDetails};
use crate::client::GitHubApi;
use crate::error::Result;

/// Cached wrapper for any `GitHubApi` implementation.
///
/// Cache can be disabled via the `enabled` flag (for `--no-cache`).
/// The storage handle is behind a Mutex for thread-safety.
pub struct CachedGitHubClient<C: GitHubApi> {
    inner: Arc<C>,
    cache: Option<Mutex<CacheStorage>>,
}

impl<C: GitHubApi> CachedGitHubClient<C> {
    /// Create a new cached client wrapper.
    ///
    /// A cache that fails to open degrades to pass-through rather than
    /// failing the command.
    pub fn new(inner: C, enabled: bool) -> Self {
        let cache = if enabled {
            CacheStorage::open().ok().map(|storage| {
                // Startup housekeeping, errors ignored
                let _ = storage.purge_expired();
                Mutex::new(storage)
            })
        } else {
            None
        };
        Self {
            inner: Arc::new(inner),
            cache,
        }
    }

    #[cfg(test)]
    fn with_storage(inner: C, storage: CacheStorage) -> Self {
        Self {
            inner: Arc::new(inner),
            cache: Some(Mutex::new(storage)),
        }
    }

    /// Try to get cached data
    fn get_cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let cache = self.cache.as_ref()?;
        let guard = cache.lock().ok()?;
        guard
            .get(key)
            .ok()
            .flatten()
            .and_then(|data| serde_json::from_slice(&data).ok())
    }

    /// Store data in cache
    fn set_cached<T: Serialize>(&self, key: &str, data: &T, endpoint: &str, ttl: Duration) {
        if let Some(ref cache) = self.cache
            && let Ok(guard) = cache.lock()
            && let Ok(json) = serde_json::to_vec(data)
        {
            let _ = guard.put(key, &json, endpoint, ttl);
        }
    }
}

#[async_trait]
impl<C: GitHubApi> GitHubApi for CachedGitHubClient<C> {
    async fn list_user_repos(&self, account: &str) -> Result<Vec<Repository>> {
        let key = cache_key("list_user_repos", &[("account", account)]);
        if let Some(cached) = self.get_cached::<Vec<Repository>>(&key) {
            debug!("Cache hit: repositories for {}", account);
            return Ok(cached);
        }

        let repos = self.inner.list_user_repos(account).await?;
        self.set_cached(&key, &repos, "list_user_repos", CacheTtl::REPOS);
        Ok(repos)
    }

    async fn list_user_orgs(&self, account: &str) -> Result<Vec<Organization>> {
        let key = cache_key("list_user_orgs", &[("account", account)]);
        if let Some(cached) = self.get_cached::<Vec<Organization>>(&key) {
            debug!("Cache hit: organizations for {}", account);
            return Ok(cached);
        }

        let orgs = self.inner.list_user_orgs(account).await?;
        self.set_cached(&key, &orgs, "list_user_orgs", CacheTtl::ORGS);
        Ok(orgs)
    }

    async fn list_org_repos(&self, org: &str) -> Result<Vec<Repository>> {
        let key = cache_key("list_org_repos", &[("org", org)]);
        if let Some(cached) = self.get_cached::<Vec<Repository>>(&key) {
            debug!("Cache hit: repositories for org {}", org);
            return Ok(cached);
        }

        let repos = self.inner.list_org_repos(org).await?;
        self.set_cached(&key, &repos, "list_org_repos", CacheTtl::REPOS);
        Ok(repos)
    }

    async fn get_repo(&self, owner: &str, repo: &str) -> Result<RepositoryDetails> {
        let key = cache_key("get_repo", &[("owner", owner), ("repo", repo)]);
        if let Some(cached) = self.get_cached::<RepositoryDetails>(&key) {
            debug!("Cache hit: {}/{}", owner, repo);
            return Ok(cached);
        }

        let details = self.inner.get_repo(owner, repo).await?;
        self.set_cached(&key, &details, "get_repo", CacheTtl::DETAIL);
        Ok(details)
    }

    async fn get_readme(&self, owner: &str, repo: &str) -> Result<String> {
        let key = cache_key("get_readme", &[("owner", owner), ("repo", repo)]);
        if let Some(cached) = self.get_cached::<String>(&key) {
            debug!("Cache hit: readme for {}/{}", owner, repo);
            return Ok(cached);
        }

        let readme = self.inner.get_readme(owner, repo).await?;
        self.set_cached(&key, &readme, "get_readme", CacheTtl::README);
        Ok(readme)
    }
}
