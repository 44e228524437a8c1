//! Per-language values and the flat lookup over them.

use serde::{Deserialize, Serialize};

use super::Language;

/// A value authored once per supported language.
///
/// Every field is required when deserializing, so a table missing a
/// translation is rejected when the content is loaded, not when a page
/// asks for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    /// English
    pub en: T,
    /// Japanese
    pub jp: T,
    /// Ukrainian
    pub ua: T,
}

/// A string keyed by language code.
pub type LocalizedText = Localized<String>;

/// An ordered list authored per language.
pub type LocalizedList = Localized<Vec<String>>;

impl<T> Localized<T> {
    /// Creates a value from its three translations.
    pub const fn new(en: T, jp: T, ua: T) -> Self {
        Self { en, jp, ua }
    }

    /// Returns the value for `lang`.
    pub const fn get(&self, lang: Language) -> &T {
        match lang {
            Language::En => &self.en,
            Language::Jp => &self.jp,
            Language::Ua => &self.ua,
        }
    }

    /// Iterates `(language, value)` pairs in selector order.
    pub fn iter(&self) -> impl Iterator<Item = (Language, &T)> {
        Language::ALL.into_iter().map(move |lang| (lang, self.get(lang)))
    }
}

impl<T: Clone> Localized<T> {
    /// The same value for every language (brand names, tool names).
    pub fn uniform(value: T) -> Self {
        Self {
            en: value.clone(),
            jp: value.clone(),
            ua: value,
        }
    }
}

/// Resolves a localized entry for a language.
///
/// The stored value is returned as is: no interpolation, no plural rules.
pub const fn resolve<T>(entry: &Localized<T>, lang: Language) -> &T {
    entry.get(lang)
}
