//! The session accessor layer.
//!
//! [`Session`] wraps a [`SessionStore`] and exposes the slot contract:
//! authenticated slots take priority over anonymous ones, malformed JSON in
//! any slot is treated as absent, and the pending-test slot is
//! consume-on-read.

use std::sync::Arc;

use tracing::{debug, warn};

use mindmeter_models::{ANONYMOUS_DISPLAY_NAME, Role, StoredUser};

use crate::keys;
use crate::store::SessionStore;

/// Accessor over the persisted session slots.
///
/// Cheap to clone; clones share the underlying store.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

impl Session {
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Returns the current credential: the authenticated token if present,
    /// else the anonymous token, else `None`.
    #[must_use]
    pub fn current_token(&self) -> Option<String> {
        self.store
            .get(keys::TOKEN)
            .or_else(|| self.store.get(keys::ANONYMOUS_TOKEN))
    }

    /// Returns the current stored user: the authenticated record if present
    /// and valid JSON, else the anonymous record with defaults backfilled,
    /// else `None`.
    #[must_use]
    pub fn current_user(&self) -> Option<StoredUser> {
        if let Some(user) = self.read_user(keys::USER) {
            return Some(user);
        }
        self.read_user(keys::ANONYMOUS_USER)
            .map(backfill_anonymous_defaults)
    }

    fn read_user(&self, slot: &str) -> Option<StoredUser> {
        let raw = self.store.get(slot)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(slot, error = %e, "Malformed user record in session slot, treating as absent");
                None
            }
        }
    }

    /// Persists an authenticated credential and user pair.
    pub fn store_login(&self, token: &str, user: &StoredUser) {
        self.store.set(keys::TOKEN, token);
        self.write_user(keys::USER, user);
        debug!(email = ?user.email, "Stored authenticated session");
    }

    /// Persists an anonymous credential and user pair.
    pub fn store_anonymous(&self, token: &str, user: &StoredUser) {
        self.store.set(keys::ANONYMOUS_TOKEN, token);
        self.write_user(keys::ANONYMOUS_USER, user);
        debug!("Stored anonymous session");
    }

    fn write_user(&self, slot: &str, user: &StoredUser) {
        match serde_json::to_string(user) {
            Ok(json) => self.store.set(slot, &json),
            Err(e) => warn!(slot, error = %e, "Failed to serialize user record"),
        }
    }

    /// Removes only the anonymous slots.
    pub fn clear_anonymous(&self) {
        for slot in keys::ANONYMOUS_SLOTS {
            self.store.remove(slot);
        }
        debug!("Cleared anonymous session slots");
    }

    /// Full logout: removes authenticated and anonymous slots. Preference
    /// slots survive.
    pub fn clear_all(&self) {
        for slot in keys::SESSION_SLOTS {
            self.store.remove(slot);
        }
        debug!("Cleared all session slots");
    }

    /// Remembers a test type chosen before a session existed.
    pub fn set_pending_test(&self, test_type: &str) {
        self.store.set(keys::PENDING_TEST_TYPE, test_type);
    }

    /// Takes the pending test type, removing it from storage.
    ///
    /// Consume-on-read: a second call returns `None` until a new value is
    /// stored, so the redirect it drives fires at most once per value.
    #[must_use]
    pub fn take_pending_test(&self) -> Option<String> {
        let value = self.store.get(keys::PENDING_TEST_TYPE)?;
        self.store.remove(keys::PENDING_TEST_TYPE);
        Some(value)
    }

    /// Current UI theme preference, if set.
    #[must_use]
    pub fn theme(&self) -> Option<String> {
        self.store.get(keys::THEME)
    }

    pub fn set_theme(&self, theme: &str) {
        self.store.set(keys::THEME, theme);
    }

    /// Whether the anonymous-session banner has been dismissed.
    #[must_use]
    pub fn anonymous_banner_dismissed(&self) -> bool {
        self.store
            .get(keys::ANONYMOUS_BANNER_DISMISSED)
            .is_some_and(|v| v == "true")
    }

    pub fn dismiss_anonymous_banner(&self) {
        self.store.set(keys::ANONYMOUS_BANNER_DISMISSED, "true");
    }

    /// Epoch millis of the last contact-form submission, if recorded.
    ///
    /// A malformed value is treated as absent.
    #[must_use]
    pub fn contact_last_sent(&self) -> Option<i64> {
        self.store
            .get(keys::CONTACT_LAST_SENT)
            .and_then(|v| v.parse().ok())
    }

    pub fn set_contact_last_sent(&self, epoch_millis: i64) {
        self.store
            .set(keys::CONTACT_LAST_SENT, &epoch_millis.to_string());
    }
}

/// Backfills the defaults an anonymous record may be missing: role
/// `STUDENT`, the anonymous display name.
fn backfill_anonymous_defaults(mut user: StoredUser) -> StoredUser {
    if user.role.is_none() {
        user.role = Some(Role::Student.as_str().to_string());
    }
    if user.full_name.is_none() && user.first_name.is_none() && user.last_name.is_none() {
        user.full_name = Some(ANONYMOUS_DISPLAY_NAME.to_string());
    }
    user
}
