//! Error types for the translation registry.
//!
//! Lookup and merge failures never surface here; they degrade to blank
//! text with a warning. Only the crate boundary (state persistence)
//! produces real errors.

use thiserror::Error;

/// Translation subsystem errors.
#[derive(Error, Debug, Clone)]
pub enum I18nError {
    /// Persisted language state could not be written
    #[error("state store error: {0}")]
    Store(String),
}

/// Result type alias for translation operations.
pub type I18nResult<T> = Result<T, I18nError>;
