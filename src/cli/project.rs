//! Project commands

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::models::{ProjectDetailDisplay, ProjectRow};
use crate::models::display::common::format_as_iso_datetime;
use crate::output::{Formattable, format_json};
use crate::projects::{self, ProjectDetail};

/// Run the project list command
///
/// Aggregates the configured account's repositories with those of every
/// organization the account belongs to.
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let account = ctx.require_account()?;

    debug!("Aggregating projects for {}", account);

    let summaries = projects::list_projects(ctx.client.as_ref(), account).await?;

    debug!("Aggregated {} projects", summaries.len());

    let rows: Vec<ProjectRow> = summaries.into_iter().map(ProjectRow::from).collect();
    rows.print(ctx.format)?;

    Ok(())
}

/// Run the project show command
pub async fn show(opts: &GlobalOptions, owner: &str, repo: &str, with_readme: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    debug!("Fetching project detail for {}/{}", owner, repo);

    let detail = projects::get_project_detail(ctx.client.as_ref(), owner, repo).await?;

    match ctx.format {
        OutputFormat::Json => {
            let display = ProjectDetailDisplay::from(detail);
            println!("{}", format_json(&display)?);
        }
        _ => print_detail(&detail, with_readme),
    }

    Ok(())
}

fn print_detail(detail: &ProjectDetail, with_readme: bool) {
    println!(
        "{} {}",
        detail.full_name.bold(),
        format!("({})", detail.visibility).dimmed()
    );
    if let Some(description) = &detail.description {
        println!("{}", description);
    }
    println!();

    if let Some(language) = &detail.language {
        println!("Language:       {}", language);
    }
    println!("Stars:          {}", detail.star_count);
    println!("Forks:          {}", detail.fork_count);
    println!("Open issues:    {}", detail.open_issue_count);
    println!("Default branch: {}", detail.default_branch);
    println!(
        "Last push:      {}",
        format_as_iso_datetime(&detail.last_activity_at)
    );
    println!("URL:            {}", detail.web_url.cyan());
    if let Some(homepage) = &detail.homepage_url {
        println!("Homepage:       {}", homepage.cyan());
    }
    if !detail.topics.is_empty() {
        println!("Topics:         {}", detail.topics.join(", "));
    }

    if with_readme {
        println!();
        match &detail.readme {
            Some(readme) => {
                println!("{}", "── README ──".dimmed());
                println!("{}", readme);
            }
            None => println!("{}", "No readme available.".dimmed()),
        }
    }
}
