//! The session store abstraction.
//!
//! [`SessionStore`] is the seam between the resolver/client layers and
//! whatever actually persists slots. It is object-safe so it can be injected
//! as `Arc<dyn SessionStore>`; implementations must be safe to share across
//! tasks.
//!
//! Writes are best-effort: an implementation that fails to persist logs the
//! failure and keeps going. Persistence problems must never surface to
//! callers.

use std::collections::HashMap;
use std::sync::Mutex;

/// Abstract key-value store for session slots.
pub trait SessionStore: Send + Sync {
    /// Returns the raw value of a slot, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Sets a slot to a raw value.
    fn set(&self, key: &str, value: &str);

    /// Removes a slot. Removing an absent slot is a no-op.
    fn remove(&self, key: &str);

    /// Removes every slot.
    fn clear(&self);
}

/// In-memory store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.slots().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.slots().remove(key);
    }

    fn clear(&self) {
        self.slots().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = MemoryStore::new();
        store.set("token", "abc");
        assert_eq!(store.get("token").as_deref(), Some("abc"));
    }

    #[test]
    fn test_get_missing_returns_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("theme", "light");
        store.set("theme", "dark");
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_remove() {
        let store = MemoryStore::new();
        store.set("token", "abc");
        store.remove("token");
        assert_eq!(store.get("token"), None);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let store = MemoryStore::new();
        store.remove("never-set");
        assert_eq!(store.get("never-set"), None);
    }

    #[test]
    fn test_clear() {
        let store = MemoryStore::new();
        store.set("a", "1");
        store.set("b", "2");
        store.clear();
        assert_eq!(store.get("a"), None);
        assert_eq!(store.get("b"), None);
    }
}
