//! Init command implementation

use colored::Colorize;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::client::{GitHubApi, GitHubClient};
use crate::config::Config;
use crate::error::Result;
use crate::locale::{LOCALE_PREFERENCE_KEY, Locales, PreferenceStore};

/// Run the init command
///
/// Interactive setup: prompts for the GitHub account whose projects are
/// aggregated and, optionally, a locale preference. The account is
/// verified against the API before saving.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to Folio!".bold().green());
    println!("Let's set up your portfolio configuration.\n");

    let account: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("GitHub account to aggregate projects for")
        .interact_text()?;
    let account = account.trim().to_string();

    // Verify the account exists by listing its repositories
    println!("\n{}", "Checking the account...".cyan());
    let client = GitHubClient::new(opts.api_host_ref())?;
    let repos = client.list_user_repos(&account).await?;
    println!(
        "{} Found {} repositories for {}",
        "✓".green(),
        repos.len(),
        account.bold()
    );

    let locales = Locales::default();
    let mut config = Config::load_at(opts.config_ref()).unwrap_or_default();
    config.account = Some(account.clone());

    let pick_locale = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Set a locale preference now?")
        .default(false)
        .interact()?;

    if pick_locale {
        let supported = locales.supported().to_vec();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select your display locale")
            .items(&supported)
            .default(0)
            .interact_opt()?;

        if let Some(idx) = selection {
            config.set(LOCALE_PREFERENCE_KEY, &supported[idx])?;
        }
    }

    config.save_at(opts.config_ref())?;

    println!("\n{} Configuration saved.", "✓".green());
    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "folio status".cyan());
    println!("  {} - List your projects", "folio project list".cyan());

    Ok(())
}
