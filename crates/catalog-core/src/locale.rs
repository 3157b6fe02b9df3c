//! Supported locales.

use serde::{Deserialize, Serialize};

/// Closed set of locales the lexical source knows about.
///
/// Unrecognized locale strings are not an error: [`Locale::resolve`] falls
/// back to [`Locale::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
    De,
}

impl Locale {
    /// Locale used when a requested one is not supported.
    pub const DEFAULT: Locale = Locale::En;

    /// All supported locales.
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Fr, Locale::De];

    /// Parse a locale code, returning `None` for unsupported values.
    ///
    /// Accepts bare language codes (`fr`) as well as region-qualified forms
    /// (`fr_FR`, `fr-CA`), case-insensitively.
    pub fn parse(code: &str) -> Option<Locale> {
        let language = code
            .trim()
            .split(['_', '-'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "en" => Some(Locale::En),
            "fr" => Some(Locale::Fr),
            "de" => Some(Locale::De),
            _ => None,
        }
    }

    /// Resolve a locale code, falling back to [`Locale::DEFAULT`].
    pub fn resolve(code: &str) -> Locale {
        match Self::parse(code) {
            Some(locale) => locale,
            None => {
                tracing::debug!(
                    "Unsupported locale '{}', falling back to '{}'",
                    code,
                    Self::DEFAULT
                );
                Self::DEFAULT
            }
        }
    }

    /// Short language code.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::De => "de",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s).ok_or_else(|| format!("Unsupported locale: {s}"))
    }
}
