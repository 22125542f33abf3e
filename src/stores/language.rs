use log::{error, warn};
use std::sync::Arc;

use crate::data::{keys, Storage};
use crate::i18n;
use crate::models::Language;

/// Holds the reader's language selection and resolves UI strings.
///
/// This is the UI locale. Content Store queries take their own `Language`
/// argument; callers are expected to pass the same value, but the two axes
/// are deliberately independent pieces of state.
pub struct LanguageStore {
    language: Language,
    storage: Arc<dyn Storage>,
}

impl LanguageStore {
    /// Restores the persisted selection, defaulting to English
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let language = match storage.load(keys::LANGUAGE) {
            Ok(Some(raw)) => Language::from_str(&raw).unwrap_or_else(|| {
                warn!("Stored language {:?} is unknown, defaulting to en", raw);
                Language::En
            }),
            Ok(None) => Language::En,
            Err(err) => {
                warn!("Failed to read language selection: {:#}", err);
                Language::En
            }
        };
        Self { language, storage }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switches between the two languages and persists the choice
    pub fn toggle(&mut self) {
        self.set(self.language.toggled());
    }

    pub fn set(&mut self, language: Language) {
        self.language = language;
        if let Err(err) = self.storage.save(keys::LANGUAGE, language.as_str()) {
            error!("Failed to persist language selection: {:#}", err);
        }
    }

    /// Display string for `key` in the active language; unknown keys come
    /// back as themselves, never empty, never an error
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        i18n::lookup(self.language, key).unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemoryStorage;

    #[test]
    fn test_defaults_to_english() {
        let store = LanguageStore::new(Arc::new(MemoryStorage::new()));
        assert_eq!(store.language(), Language::En);
    }

    #[test]
    fn test_toggle_persists_raw_token() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = LanguageStore::new(storage.clone());
        store.toggle();
        assert_eq!(store.language(), Language::Bn);
        assert_eq!(storage.load(keys::LANGUAGE).unwrap(), Some("bn".to_string()));

        let restored = LanguageStore::new(storage);
        assert_eq!(restored.language(), Language::Bn);
    }

    #[test]
    fn test_unknown_stored_token_defaults_to_english() {
        let storage = Arc::new(MemoryStorage::new());
        storage.save(keys::LANGUAGE, "de").unwrap();
        let store = LanguageStore::new(storage);
        assert_eq!(store.language(), Language::En);
    }

    #[test]
    fn test_translate_follows_active_language() {
        let mut store = LanguageStore::new(Arc::new(MemoryStorage::new()));
        assert_eq!(store.translate("featured_stories"), "Featured Stories");
        store.toggle();
        assert_eq!(store.translate("featured_stories"), "বিশেষ সংবাদ");
    }

    #[test]
    fn test_translate_unknown_key_falls_back_to_key() {
        let store = LanguageStore::new(Arc::new(MemoryStorage::new()));
        assert_eq!(store.translate("horoscope"), "horoscope");
    }
}
