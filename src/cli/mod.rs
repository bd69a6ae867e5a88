//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod cache;
pub mod context;
pub mod init;
pub mod locale;
pub mod project;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// Folio CLI - companion for a GitHub-backed portfolio site
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "FOLIO_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override the configured GitHub account
    #[arg(long, global = true, env = "FOLIO_ACCOUNT", hide_env = true)]
    pub account: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "FOLIO_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the GitHub API host (development/testing)
    #[arg(long, global = true, env = "FOLIO_API_HOST", hide_env = true, hide = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "FOLIO_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Bypass cache, fetch fresh data from the API
    #[arg(long, global = true, env = "FOLIO_NO_CACHE", hide_env = true)]
    pub no_cache: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize Folio configuration
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// List and inspect portfolio projects
    #[command(subcommand)]
    Project(ProjectCommands),

    /// Manage the display locale
    #[command(subcommand)]
    Locale(LocaleCommands),

    /// Manage local response cache
    #[command(subcommand)]
    Cache(CacheCommands),
}

/// Project commands
#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List the aggregated projects (user + organizations)
    List,

    /// Show one project's detail
    Show {
        /// Repository owner
        owner: String,

        /// Repository name
        repo: String,

        /// Print the readme after the detail block
        #[arg(long)]
        readme: bool,
    },
}

/// Locale commands
#[derive(Subcommand, Debug)]
pub enum LocaleCommands {
    /// Resolve and print the active locale
    Get {
        /// Accept-Language header to negotiate against
        /// (falls back to FOLIO_ACCEPT_LANGUAGE)
        #[arg(long)]
        accept_language: Option<String>,
    },

    /// Persist a locale preference
    Set {
        /// Locale tag (one of the supported set)
        tag: String,
    },

    /// List supported locales
    List,
}

/// Cache commands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show cache status/statistics
    Status,

    /// Remove all cached responses
    Clear,
}
