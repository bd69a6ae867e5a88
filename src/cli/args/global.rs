//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// Consolidates the global flags from the CLI into a single unit so
/// handler signatures stay small. Precedence for most options is:
/// CLI flag > environment variable > config file > default.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// GitHub account override (bypasses config file)
    pub account: Option<String>,

    /// Custom config file path (defaults to ~/.folio/config.yaml)
    pub config: Option<String>,

    /// Bypass cache and fetch fresh data from the API
    pub no_cache: bool,

    /// Custom API host for development/testing
    pub api_host: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            account: cli.account.clone(),
            config: cli.config.clone(),
            no_cache: cli.no_cache,
            api_host: cli.api_host.clone(),
        }
    }

    /// Get account override as `Option<&str>`.
    pub fn account_ref(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API host override as `Option<&str>`.
    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }
}
