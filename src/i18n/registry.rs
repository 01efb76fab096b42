//! Fragment registration and key-path resolution.

use serde_json::Value;

use super::dictionary::{Dictionary, LocaleNode};
use super::events::{EventBus, LanguageEvent, LanguagePhase};
use super::store::{LanguageStore, MemoryStore};
use super::{Language, DEFAULT_LANGUAGE};

/// Accumulates translation fragments from independent page modules and
/// resolves key paths for the active language.
///
/// The registry owns the dictionary exclusively; it is mutated only
/// through [`register`](TranslationRegistry::register). The active
/// language is loaded from the store once at construction and changes only
/// through an explicit switch.
pub struct TranslationRegistry {
    dictionary: Dictionary,
    active: Language,
    store: Box<dyn LanguageStore>,
    bus: EventBus,
}

impl TranslationRegistry {
    /// Creates a registry whose active language is the stored code when it
    /// is supported, the default otherwise. Coercion happens here, at read
    /// time; nothing is written back.
    pub fn new(store: Box<dyn LanguageStore>) -> TranslationRegistry {
        let active = store
            .load()
            .as_deref()
            .and_then(Language::parse)
            .unwrap_or(DEFAULT_LANGUAGE);

        TranslationRegistry {
            dictionary: Dictionary::new(),
            active,
            store,
            bus: EventBus::new(),
        }
    }

    /// Registry without external persistence.
    pub fn with_memory_store() -> TranslationRegistry {
        TranslationRegistry::new(Box::new(MemoryStore::new()))
    }

    /// Merges a fragment into the dictionary. Key collisions are won
    /// silently by the incoming fragment; no re-render is triggered.
    pub fn register(&mut self, fragment: &Value) {
        self.dictionary.merge_fragment(fragment);
    }

    /// The active language.
    pub fn language(&self) -> Language {
        self.active
    }

    /// Resolves a dot-separated key path to display text.
    ///
    /// The fallback chain is fixed: active language, then the default
    /// language, then the empty string. Lookup failure is non-fatal; the
    /// caller renders blank text instead of a raw key.
    pub fn translate(&self, key_path: &str) -> String {
        let Some(node) = self.dictionary.lookup(key_path) else {
            tracing::warn!("translation key not found: {}", key_path);
            return String::new();
        };

        match node.resolve(self.active) {
            Some(text) => text,
            None => {
                // An authored variant that lacks both entries resolves
                // blank without noise; a scope or non-string leaf is a
                // misaddressed key.
                if !matches!(node, LocaleNode::Variant(_)) {
                    tracing::warn!("translation key does not resolve to text: {}", key_path);
                }
                String::new()
            }
        }
    }

    /// Subscribes to language-change notifications.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: Fn(&LanguageEvent) + 'static,
    {
        self.bus.subscribe(subscriber);
    }

    /// State-only language switch: coerces unsupported codes to the
    /// default with a warning, persists the resolved code, and updates the
    /// active language. No notifications and no re-render; the full
    /// protocol lives in [`Localizer::set_language`](super::Localizer::set_language).
    pub fn switch_to(&mut self, code: &str) -> Language {
        let language = match Language::parse(code) {
            Some(language) => language,
            None => {
                tracing::warn!(
                    "unsupported language code {:?}, falling back to {}",
                    code,
                    DEFAULT_LANGUAGE
                );
                DEFAULT_LANGUAGE
            }
        };

        if let Err(error) = self.store.save(language.code()) {
            tracing::warn!("failed to persist language selection: {}", error);
        }

        self.active = language;
        language
    }

    pub(crate) fn notify(&self, phase: LanguagePhase) {
        self.bus.emit(phase, self.active);
    }
}
