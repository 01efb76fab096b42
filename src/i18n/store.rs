//! Persisted language selection.
//!
//! The browser original keeps one string under a fixed storage key; here
//! the same contract is a single-value TOML state file. Absent, unreadable,
//! or unsupported values behave as if nothing was stored; coercion happens
//! at read time and is never written back without an explicit selection.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::error::{I18nError, I18nResult};

/// Candidate state file locations; the first existing one wins, writes go
/// to the working-directory dotfile otherwise.
pub const STATE_PATHS: &[&str] = &[".dwibahasa.toml", "~/.config/dwibahasa/state.toml"];

#[derive(Debug, Serialize, Deserialize)]
struct PersistedState {
    language: String,
}

/// External persistence for the active language.
pub trait LanguageStore {
    /// Returns the stored code, if any. Validation is the caller's job.
    fn load(&self) -> Option<String>;

    /// Stores the code.
    fn save(&self, code: &str) -> I18nResult<()>;
}

/// TOML-file-backed store.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> FileStore {
        FileStore { path }
    }

    /// Picks the first existing candidate path, falling back to the first
    /// candidate when none exists yet.
    pub fn default_path() -> PathBuf {
        for candidate in STATE_PATHS {
            let expanded = shellexpand::tilde(candidate);
            let path = Path::new(expanded.as_ref());
            if path.exists() {
                return path.to_path_buf();
            }
        }
        PathBuf::from(shellexpand::tilde(STATE_PATHS[0]).as_ref())
    }

    pub fn discover() -> FileStore {
        FileStore::new(FileStore::default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LanguageStore for FileStore {
    fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let state: PersistedState = toml::from_str(&content).ok()?;
        Some(state.language)
    }

    fn save(&self, code: &str) -> I18nResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| I18nError::Store(e.to_string()))?;
            }
        }

        let state = PersistedState {
            language: code.to_string(),
        };
        let content = toml::to_string(&state).map_err(|e| I18nError::Store(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| I18nError::Store(e.to_string()))
    }
}

/// In-process store for tests and embedders with their own persistence.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

impl LanguageStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn save(&self, code: &str) -> I18nResult<()> {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(code.to_string());
        }
        Ok(())
    }
}
