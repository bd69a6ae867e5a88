//! Command execution context
//!
//! Provides a unified context for command execution, eliminating
//! boilerplate for config loading, account resolution, and client
//! initialization.

use std::sync::Arc;

use crate::cache::CachedGitHubClient;
use crate::cli::args::GlobalOptions;
use crate::cli::OutputFormat;
use crate::client::GitHubClient;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Context for command execution containing config, client, and runtime
/// options.
pub struct CommandContext {
    /// Loaded configuration (with account override applied)
    pub config: Config,
    /// API client with caching (Arc-wrapped for concurrent fetches)
    pub client: Arc<CachedGitHubClient<GitHubClient>>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Loads config from the given path (or the default location),
    /// applies the account override, and builds the cached API client.
    /// A missing config file is treated as empty defaults so the
    /// `--account` override works before `folio init` has run.
    ///
    /// # Errors
    /// Returns an error if the config exists but cannot be parsed.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = match Config::load_at(opts.config_ref()) {
            Ok(config) => config,
            Err(Error::Config(ConfigError::NotFound)) => Config::default(),
            Err(e) => return Err(e),
        };

        if let Some(account) = opts.account_ref() {
            config.account = Some(account.to_string());
        }

        let raw_client = GitHubClient::new(opts.api_host_ref())?;
        let client = Arc::new(CachedGitHubClient::new(raw_client, !opts.no_cache));

        Ok(Self {
            config,
            client,
            format: opts.format,
        })
    }

    /// Get the GitHub account, returning an error if not configured.
    pub fn require_account(&self) -> Result<&str> {
        self.config
            .account
            .as_deref()
            .ok_or_else(|| ConfigError::MissingAccount.into())
    }
}
