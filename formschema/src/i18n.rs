//! Label translation.

use std::collections::HashMap;

/// Resolves localized strings by key and locale.
///
/// Implementations must return the key unchanged when no translation exists.
/// Lookups may run concurrently from independent generation calls.
pub trait Translator: Send + Sync {
    /// Translate `key` into `locale`.
    fn translate(&self, key: &str, locale: &str) -> String;
}

/// In-memory translator backed by `locale -> key -> text` maps.
#[derive(Debug, Clone, Default)]
pub struct MapTranslator {
    translations: HashMap<String, HashMap<String, String>>,
}

impl MapTranslator {
    /// Create a translator from a locale map.
    pub fn new(translations: HashMap<String, HashMap<String, String>>) -> Self {
        Self { translations }
    }

    /// Add or replace a single translation.
    pub fn with_entry(
        mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.translations
            .entry(locale.into())
            .or_default()
            .insert(key.into(), text.into());
        self
    }

    /// Locales with at least one entry.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }
}

impl Translator for MapTranslator {
    fn translate(&self, key: &str, locale: &str) -> String {
        self.translations
            .get(locale)
            .and_then(|messages| messages.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
