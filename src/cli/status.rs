//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::locale::{LOCALE_PREFERENCE_KEY, Locales, PreferenceStore};

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Folio Configuration Status".bold());

    let config_result = Config::load_at(opts.config_ref());

    match config_result {
        Ok(config) => {
            if let Some(path) = opts.config_ref() {
                println!("Config file: {}", path.cyan());
            } else if let Ok(path) = Config::default_path() {
                println!("Config file: {}", path.display().to_string().cyan());
            }
            println!();

            // Account
            let account = opts.account_ref().or(config.account.as_deref());
            match account {
                Some(account) => println!("{} Account: {}", "✓".green(), account.bold()),
                None => {
                    println!("{} No GitHub account configured", "✗".red());
                    println!("  → Run 'folio init' to configure");
                }
            }

            // Locale
            let locales = Locales::default();
            let stored = config.get(LOCALE_PREFERENCE_KEY);
            match &stored {
                Some(tag) if locales.is_supported(tag) => {
                    println!("{} Locale preference: {}", "✓".green(), tag.bold());
                }
                Some(tag) => {
                    println!(
                        "{} Locale preference '{}' is not supported (using {})",
                        "⚠".yellow(),
                        tag,
                        locales.default_locale()
                    );
                }
                None => {
                    println!(
                        "{} No locale preference (negotiated, default {})",
                        "○".dimmed(),
                        locales.default_locale()
                    );
                }
            }
        }
        Err(_) => {
            println!("{} No configuration found", "✗".red());
            println!("  → Run 'folio init' to get started");
        }
    }

    Ok(())
}
