//! Locale resolution
//!
//! Resolves the single active display locale from a stored preference and
//! an HTTP-style `Accept-Language` header. The supported set and default
//! are an explicit immutable value passed in at construction, so the
//! resolution logic stays independently testable.

use std::cmp::Ordering;

use crate::error::{ConfigError, Result};

/// Key under which the locale preference is persisted.
pub const LOCALE_PREFERENCE_KEY: &str = "locale";

/// Simple key-value capability for persisting the locale preference.
///
/// Keeps the resolver storage-agnostic; the config layer implements this.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// One parsed `Accept-Language` segment.
///
/// Ephemeral; constructed and discarded within a single resolution call.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguagePreference {
    /// Language tag, trimmed and lower-cased
    pub tag: String,
    /// Quality weight in [0, 1]; 1.0 when unspecified or malformed
    pub quality: f32,
}

/// The fixed supported-locale set with its designated default.
#[derive(Debug, Clone)]
pub struct Locales {
    supported: Vec<String>,
    default_locale: String,
}

impl Default for Locales {
    fn default() -> Self {
        // Built-in set, cannot fail validation
        Self::new(
            vec!["fr".to_string(), "en".to_string()],
            "fr".to_string(),
        )
        .expect("built-in locale set is valid")
    }
}

impl Locales {
    /// Create a locale set. The default must be a member of the supported set.
    pub fn new(supported: Vec<String>, default_locale: String) -> Result<Self> {
        if !supported.contains(&default_locale) {
            return Err(ConfigError::Invalid(format!(
                "Default locale '{}' is not in the supported set",
                default_locale
            ))
            .into());
        }
        Ok(Self {
            supported,
            default_locale,
        })
    }

    /// The ordered supported set
    pub fn supported(&self) -> &[String] {
        &self.supported
    }

    /// The configured default locale
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Whether a tag is a member of the supported set
    pub fn is_supported(&self, tag: &str) -> bool {
        self.supported.iter().any(|l| l == tag)
    }

    /// Resolve the active locale.
    ///
    /// A stored preference that is a member of the supported set wins over
    /// header negotiation. Otherwise the parsed header preferences are
    /// walked in quality order, matching exactly first and then on the
    /// primary subtag. Always returns a member of the supported set.
    pub fn resolve(&self, stored: Option<&str>, header: Option<&str>) -> &str {
        if let Some(tag) = stored
            && let Some(member) = self.supported.iter().find(|l| *l == tag)
        {
            return member;
        }

        let preferred = header.map(parse_accept_language).unwrap_or_default();

        for pref in &preferred {
            if let Some(exact) = self.supported.iter().find(|l| **l == pref.tag) {
                return exact;
            }

            let base = pref.tag.split('-').next().unwrap_or("");
            if let Some(base_match) = self.supported.iter().find(|l| **l == base) {
                return base_match;
            }
        }

        &self.default_locale
    }
}

/// Parse an `Accept-Language` header into preferences sorted by quality.
///
/// Segments are split on `,`, with parameters split on `;`. A `q`
/// parameter that does not parse as a number in [0, 1] is ignored (the
/// tag keeps the default quality, it is not rejected). Empty tags are
/// discarded. The sort is stable: equal-quality tags keep header order,
/// which determines tie-break behavior.
pub fn parse_accept_language(header: &str) -> Vec<LanguagePreference> {
    let mut prefs: Vec<LanguagePreference> = header
        .split(',')
        .filter_map(|segment| {
            let mut parts = segment.trim().split(';');
            let tag = parts.next().unwrap_or("").trim().to_lowercase();
            if tag.is_empty() {
                return None;
            }

            let mut quality = 1.0f32;
            for param in parts {
                let mut kv = param.trim().split('=');
                let key = kv.next().unwrap_or("").trim().to_lowercase();
                let value = kv.next().unwrap_or("").trim();
                if key == "q"
                    && let Ok(parsed) = value.parse::<f32>()
                    && (0.0..=1.0).contains(&parsed)
                {
                    quality = parsed;
                }
            }

            Some(LanguagePreference { tag, quality })
        })
        .collect();

    // Vec::sort_by is stable, preserving header order for equal qualities
    prefs.sort_by(|a, b| {
        b.quality
            .partial_cmp(&a.quality)
            .unwrap_or(Ordering::Equal)
    });

    prefs
}
