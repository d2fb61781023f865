//! Local session store.
//!
//! The only client-side persistence this tooling has: the auth token and the
//! remembered page size per list screen, kept in one small JSON file.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionStore {
    pub token: Option<String>,
    #[serde(default)]
    pub page_sizes: HashMap<String, u32>,
    #[serde(skip)]
    path: PathBuf,
}

impl SessionStore {
    /// Load the store from `path`. A missing file yields the default store;
    /// an unreadable or corrupt file is an error rather than silent data loss.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Self {
                path: path.to_path_buf(),
                ..Self::default()
            });
        }

        let raw = fs::read_to_string(path)?;
        let mut store: SessionStore = serde_json::from_str(&raw)?;
        store.path = path.to_path_buf();
        Ok(store)
    }

    /// Write the store back to the path it was loaded from.
    pub fn save(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Remembered page size for a list screen, or the given default.
    pub fn page_size_for(&self, screen: &str, default: u32) -> u32 {
        self.page_sizes.get(screen).copied().unwrap_or(default)
    }

    pub fn remember_page_size(&mut self, screen: &str, size: u32) {
        self.page_sizes.insert(screen.to_string(), size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = SessionStore::load(&path).unwrap();
        assert!(store.token.is_none());
        assert!(store.page_sizes.is_empty());
    }

    #[test]
    fn save_and_reload_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let mut store = SessionStore::load(&path).unwrap();
        store.set_token("secret-token".to_string());
        store.remember_page_size("products", 50);
        store.save().unwrap();

        let reloaded = SessionStore::load(&path).unwrap();
        assert_eq!(reloaded.token.as_deref(), Some("secret-token"));
        assert_eq!(reloaded.page_size_for("products", 20), 50);
        assert_eq!(reloaded.page_size_for("orders", 20), 20);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();

        let result = SessionStore::load(&path);
        assert!(matches!(result, Err(AppError::SessionStore(_))));
    }

    #[test]
    fn clear_token_removes_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = SessionStore::load(&path).unwrap();
        store.set_token("t".to_string());
        store.clear_token();
        store.save().unwrap();

        let reloaded = SessionStore::load(&path).unwrap();
        assert!(reloaded.token.is_none());
    }
}
