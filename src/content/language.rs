//! Supported site languages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language the site is authored in.
///
/// The set is closed: every piece of localized content carries exactly
/// these three variants, so selecting a language can never miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    En,
    /// Japanese (site default)
    #[default]
    Jp,
    /// Ukrainian
    Ua,
}

impl Language {
    /// All languages in selector order.
    pub const ALL: [Self; 3] = [Self::Jp, Self::En, Self::Ua];

    /// Short code used in URLs and content files (`en`, `jp`, `ua`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Jp => "jp",
            Self::Ua => "ua",
        }
    }

    /// Native display label for the language selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Jp => "日本語",
            Self::Ua => "Українська",
        }
    }

    /// Flag shown next to the label.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::En => "🇺🇸",
            Self::Jp => "🇯🇵",
            Self::Ua => "🇺🇦",
        }
    }

    /// BCP 47 tag for the `lang` attribute of rendered pages.
    #[must_use]
    pub const fn html_lang(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Jp => "ja",
            Self::Ua => "uk",
        }
    }

    /// Parses a language code. Matching is exact: `"EN"` is not `en`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "jp" => Some(Self::Jp),
            "ua" => Some(Self::Ua),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| {
            anyhow::anyhow!("Unsupported language '{s}' (expected one of: en, jp, ua)")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_japanese() {
        assert_eq!(Language::default(), Language::Jp);
    }

    #[test]
    fn test_code_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn test_from_code_is_exact() {
        assert_eq!(Language::from_code("EN"), None);
        assert_eq!(Language::from_code("ja"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_from_str_error_names_value() {
        let err = "de".parse::<Language>().unwrap_err();
        assert!(err.to_string().contains("'de'"));
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Language::Ua).unwrap(), "\"ua\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }
}
