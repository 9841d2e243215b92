//! File-backed session store.
//!
//! Persists slots as a single JSON document on disk, the CLI's analog of the
//! browser's local storage. The document is reloaded on open, so a session
//! written by one invocation is visible to the next, and concurrent
//! processes observe each other's logins and logouts at command boundaries.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use crate::store::SessionStore;

/// Session store backed by a JSON document.
///
/// Every mutation rewrites the document. Write failures are logged and
/// swallowed; the in-memory view stays authoritative for the rest of the
/// process.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    slots: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Opens a store at `path`, loading the existing document if present.
    ///
    /// A missing or malformed document starts the store empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let slots = Self::load(&path);
        Self {
            path,
            slots: Mutex::new(slots),
        }
    }

    fn load(path: &Path) -> HashMap<String, String> {
        let Ok(contents) = fs::read_to_string(path) else {
            return HashMap::new();
        };

        match serde_json::from_str(&contents) {
            Ok(slots) => slots,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Malformed session document, starting empty");
                HashMap::new()
            }
        }
    }

    fn slots(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn persist(&self, slots: &HashMap<String, String>) {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warn!(path = %self.path.display(), error = %e, "Failed to create session directory");
            return;
        }

        let json = match serde_json::to_string_pretty(slots) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Failed to serialize session document");
                return;
            }
        };

        if let Err(e) = fs::write(&self.path, json) {
            warn!(path = %self.path.display(), error = %e, "Failed to write session document");
        }
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut slots = self.slots();
        slots.insert(key.to_string(), value.to_string());
        self.persist(&slots);
    }

    fn remove(&self, key: &str) {
        let mut slots = self.slots();
        if slots.remove(key).is_some() {
            self.persist(&slots);
        }
    }

    fn clear(&self) {
        let mut slots = self.slots();
        slots.clear();
        self.persist(&slots);
    }
}
