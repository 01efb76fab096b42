//! # Dwibahasa Library
//!
//! Localizes bilingual (Indonesian/English) HTML pages. Page templates
//! flag elements with `data-i18n*` attributes; independent dictionary
//! fragments are merged into one registry; the resolver applies the
//! active language's strings to the document and keeps a language-switch
//! control in sync.
//!
//! ## Module organization
//!
//! - `core` - error type, options, and document-level entry points
//! - `i18n` - translation registry, resolver, events, and language state
//! - `parsers` - HTML parsing, translation application, serialization
//! - `env` - typed environment variable access

pub mod core;
pub mod env;
pub mod i18n;
pub mod parsers;

// Re-export commonly used items for convenience
pub use crate::core::*;
pub use crate::i18n::*;
pub use crate::parsers::*;
