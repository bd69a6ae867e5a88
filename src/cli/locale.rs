//! Locale commands

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};
use crate::locale::{LOCALE_PREFERENCE_KEY, Locales, PreferenceStore};

/// Header fallback when `--accept-language` is not given.
const ACCEPT_LANGUAGE_ENV: &str = "FOLIO_ACCEPT_LANGUAGE";

/// Load the config, treating a missing file as empty defaults.
///
/// Locale resolution must work before `folio init` has ever run.
fn load_config_or_default(path: Option<&str>) -> Result<Config> {
    match Config::load_at(path) {
        Ok(config) => Ok(config),
        Err(Error::Config(ConfigError::NotFound)) => Ok(Config::default()),
        Err(e) => Err(e),
    }
}

/// Run the locale get command
pub fn get(opts: &GlobalOptions, accept_language: Option<&str>) -> Result<()> {
    let config = load_config_or_default(opts.config_ref())?;
    let locales = Locales::default();

    let header = match accept_language {
        Some(h) => Some(h.to_string()),
        None => std::env::var(ACCEPT_LANGUAGE_ENV).ok(),
    };

    let stored = config.get(LOCALE_PREFERENCE_KEY);
    debug!(
        "Resolving locale (stored: {:?}, header: {:?})",
        stored, header
    );

    let resolved = locales.resolve(stored.as_deref(), header.as_deref());
    println!("{}", resolved);

    Ok(())
}

/// Run the locale set command
pub fn set(opts: &GlobalOptions, tag: &str) -> Result<()> {
    let locales = Locales::default();
    let tag = tag.trim().to_lowercase();

    if !locales.is_supported(&tag) {
        return Err(ConfigError::UnsupportedLocale(format!(
            "{} (supported: {})",
            tag,
            locales.supported().join(", ")
        ))
        .into());
    }

    let mut config = load_config_or_default(opts.config_ref())?;
    config.set(LOCALE_PREFERENCE_KEY, &tag)?;
    config.save_at(opts.config_ref())?;

    println!("{} Locale preference set to '{}'", "✓".green(), tag.bold());

    Ok(())
}

/// Run the locale list command
pub fn list(opts: &GlobalOptions) -> Result<()> {
    let config = load_config_or_default(opts.config_ref())?;
    let locales = Locales::default();

    let stored = config.get(LOCALE_PREFERENCE_KEY);
    let active = locales.resolve(stored.as_deref(), None);

    for tag in locales.supported() {
        let mut notes = Vec::new();
        if tag == locales.default_locale() {
            notes.push("default");
        }
        if tag == active {
            notes.push("active");
        }

        if notes.is_empty() {
            println!("  {}", tag);
        } else {
            println!("  {} {}", tag, format!("({})", notes.join(", ")).dimmed());
        }
    }

    Ok(())
}
