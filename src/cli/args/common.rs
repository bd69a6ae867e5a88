//! Shared CLI argument types

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-oriented detail rendering
    Pretty,
    /// Aligned table, the default for listings
    #[default]
    Table,
    /// JSON envelope for scripted consumers
    Json,
}
