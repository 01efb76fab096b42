//! Crate error type, localization options, and document-level entry
//! points.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::i18n::{FileStore, I18nError, Localizer, MemoryStore, TranslationRegistry};
use crate::parsers::html::html_to_dom;

/// Errors that can occur while localizing a page.
///
/// Lookup and merge failures are deliberately absent: they degrade to
/// blank text (see the `i18n` module). Only I/O and malformed inputs at
/// the crate boundary are hard errors.
#[derive(Error, Debug)]
pub enum DwibahasaError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid dictionary fragment: {0}")]
    Fragment(#[from] serde_json::Error),

    #[error(transparent)]
    I18n(#[from] I18nError),
}

/// Result type alias for localization operations.
pub type DwibahasaResult<T> = Result<T, DwibahasaError>;

/// Configuration options for page localization.
#[derive(Default, Clone)]
pub struct LocalizeOptions {
    /// Target language code; `None` keeps the persisted or default
    /// language. Unsupported codes are coerced to the default.
    pub language: Option<String>,
    /// Character encoding of the input document (defaults to UTF-8).
    pub encoding: Option<String>,
    /// State file for the persisted language selection; `None` keeps the
    /// selection in memory only.
    pub state_file: Option<PathBuf>,
}

/// Builds a registry backed by the options' state file, or an in-memory
/// store when none is configured.
pub fn build_registry(options: &LocalizeOptions) -> TranslationRegistry {
    match &options.state_file {
        Some(path) => TranslationRegistry::new(Box::new(FileStore::new(path.clone()))),
        None => TranslationRegistry::new(Box::new(MemoryStore::new())),
    }
}

/// Localizes a page from raw HTML data and dictionary fragments.
///
/// Fragments are registered in the given order; for disjoint keys the
/// order is irrelevant, for colliding leaf keys the last one wins.
pub fn localize_document(
    input_data: &[u8],
    fragments: &[Value],
    options: &LocalizeOptions,
) -> DwibahasaResult<Vec<u8>> {
    let document_encoding = options.encoding.clone().unwrap_or_default();
    let dom = html_to_dom(input_data, document_encoding.clone());

    let mut registry = build_registry(options);
    for fragment in fragments {
        registry.register(fragment);
    }

    let mut localizer = Localizer::new(dom, registry);
    if let Some(code) = &options.language {
        localizer.set_language(code);
    }

    Ok(localizer.serialize(&document_encoding))
}

/// Localizes a page read from disk; dictionaries are JSON fragment files.
pub fn localize_file(
    input: &Path,
    dictionaries: &[PathBuf],
    options: &LocalizeOptions,
) -> DwibahasaResult<Vec<u8>> {
    let input_data = fs::read(input)?;

    let mut fragments = Vec::with_capacity(dictionaries.len());
    for path in dictionaries {
        let raw = fs::read_to_string(path)?;
        fragments.push(serde_json::from_str(&raw)?);
    }

    localize_document(&input_data, &fragments, options)
}
