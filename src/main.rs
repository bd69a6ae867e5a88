//! Folio CLI - companion for a GitHub-backed portfolio site

use clap::Parser;
use log::LevelFilter;

mod cache;
mod cli;
mod client;
mod config;
mod error;
mod locale;
mod models;
mod output;
mod projects;

use cli::{CacheCommands, Cli, Commands, GlobalOptions, LocaleCommands, ProjectCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Project(project_cmd) => match project_cmd {
            ProjectCommands::List => cli::project::list(&opts).await,
            ProjectCommands::Show {
                owner,
                repo,
                readme,
            } => cli::project::show(&opts, &owner, &repo, readme).await,
        },
        Commands::Locale(locale_cmd) => match locale_cmd {
            LocaleCommands::Get { accept_language } => {
                cli::locale::get(&opts, accept_language.as_deref())
            }
            LocaleCommands::Set { tag } => cli::locale::set(&opts, &tag),
            LocaleCommands::List => cli::locale::list(&opts),
        },
        Commands::Cache(cache_cmd) => match cache_cmd {
            CacheCommands::Status => cli::cache::status(opts.format),
            CacheCommands::Clear => cli::cache::clear(opts.format),
        },
    }
}

/// Route crate logs to stderr. `--debug` turns on debug-level detail
/// without drowning output in dependency chatter.
fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_module(env!("CARGO_PKG_NAME"), level)
        .init();
}
