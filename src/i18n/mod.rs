//! Translation registry and resolver.
//!
//! This module owns everything language-related:
//!
//! - `dictionary`: tagged locale tree, fragment conversion, deep merge
//! - `registry`: fragment registration and key-path resolution
//! - `events`: two-phase language-change notifications
//! - `store`: persisted language selection
//! - `localizer`: document binding and the language-switch protocol

pub mod dictionary;
pub mod error;
pub mod events;
pub mod localizer;
pub mod registry;
pub mod store;

pub use dictionary::{Dictionary, LocaleNode};
pub use error::{I18nError, I18nResult};
pub use events::{LanguageEvent, LanguagePhase};
pub use localizer::Localizer;
pub use registry::TranslationRegistry;
pub use store::{FileStore, LanguageStore, MemoryStore};

use std::fmt;

/// Default language; partially translated entries fall back to it.
pub const DEFAULT_LANGUAGE: Language = Language::Id;

/// Supported language codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Indonesian (default)
    Id,
    /// English
    En,
}

impl Language {
    /// Parses a supported language code, case-insensitively.
    pub fn parse(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "id" => Some(Language::Id),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// The lowercase code used in markup, storage, and fragments.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Id => "id",
            Language::En => "en",
        }
    }

    /// All supported languages.
    pub fn all() -> [Language; 2] {
        [Language::Id, Language::En]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
