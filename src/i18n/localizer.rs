//! Document binding and the language-switch protocol.

use markup5ever_rcdom::{Handle, RcDom};
use serde_json::Value;

use crate::parsers::html::{
    apply_translations, serialize_document, set_document_language, sync_language_switcher,
};

use super::events::{LanguageEvent, LanguagePhase};
use super::registry::TranslationRegistry;
use super::Language;

/// Binds a [`TranslationRegistry`] to one parsed page and keeps the
/// rendered document consistent with the active language.
///
/// Construction determines the active language and stamps it on the
/// `<html>` element, but defers the first full application of translations
/// until [`flush`](Localizer::flush): page modules register their
/// fragments in no guaranteed order, so applying eagerly would miss late
/// registrants.
pub struct Localizer {
    registry: TranslationRegistry,
    dom: RcDom,
    pending: bool,
}

impl Localizer {
    pub fn new(dom: RcDom, registry: TranslationRegistry) -> Localizer {
        set_document_language(&dom.document, registry.language());
        Localizer {
            registry,
            dom,
            pending: true,
        }
    }

    /// Merges a fragment into the underlying registry.
    pub fn register(&mut self, fragment: &Value) {
        self.registry.register(fragment);
    }

    /// Subscribes to language-change notifications.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: Fn(&LanguageEvent) + 'static,
    {
        self.registry.subscribe(subscriber);
    }

    pub fn language(&self) -> Language {
        self.registry.language()
    }

    /// Resolves a key path for the active language.
    pub fn translate(&self, key_path: &str) -> String {
        self.registry.translate(key_path)
    }

    pub fn registry(&self) -> &TranslationRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut TranslationRegistry {
        &mut self.registry
    }

    pub fn document(&self) -> &Handle {
        &self.dom.document
    }

    pub fn dom(&self) -> &RcDom {
        &self.dom
    }

    /// Runs the deferred initial render: applies all translations and
    /// syncs the switcher control. A no-op when nothing is pending.
    pub fn flush(&mut self) {
        if !self.pending {
            return;
        }
        apply_translations(&self.dom.document, &self.registry);
        sync_language_switcher(&self.dom.document, self.registry.language());
        self.pending = false;
    }

    /// Switches the active language, running the full two-phase contract:
    ///
    /// 1. coerce and persist the code;
    /// 2. update the document `lang` attribute;
    /// 3. notify `Changing` (no visible text has mutated yet);
    /// 4. re-apply all translations;
    /// 5. sync the switcher control's active state;
    /// 6. notify `Changed`.
    ///
    /// Unsupported codes fall back to the default language; the switch
    /// itself never fails.
    pub fn set_language(&mut self, code: &str) -> Language {
        let language = self.registry.switch_to(code);
        set_document_language(&self.dom.document, language);

        self.registry.notify(LanguagePhase::Changing);
        apply_translations(&self.dom.document, &self.registry);
        sync_language_switcher(&self.dom.document, language);
        self.pending = false;
        self.registry.notify(LanguagePhase::Changed);

        language
    }

    /// Serializes the document, flushing any pending initial render first.
    pub fn serialize(&mut self, document_encoding: &str) -> Vec<u8> {
        self.flush();
        serialize_document(&self.dom, document_encoding)
    }
}
