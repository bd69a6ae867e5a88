//! Local cache for GitHub API responses
//!
//! SQLite-backed response cache with a 1-hour TTL on every entry.
//! Correctness never depends on the cache: a cold or disabled cache
//! produces identical output.

pub mod client;
pub mod key;
pub mod storage;

use std::time::Duration;

/// Cache TTL configuration per endpoint
pub struct CacheTtl;

impl CacheTtl {
    /// Repository listings (user and org)
    pub const REPOS: Duration = Duration::from_secs(60 * 60); // 1 hr

    /// Organization membership
    pub const ORGS: Duration = Duration::from_secs(60 * 60); // 1 hr

    /// Single repository detail
    pub const DETAIL: Duration = Duration::from_secs(60 * 60); // 1 hr

    /// Readme bodies
    pub const README: Duration = Duration::from_secs(60 * 60); // 1 hr
}

// Re-export main types
pub use client::CachedGitHubClient;
pub use key::cache_key;
pub use storage::CacheStorage;
