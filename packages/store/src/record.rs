//! # Durable user record
//!
//! [`UserRecord`] reads and writes the single serialised [`User`] that
//! survives page reloads. The record lives under one fixed key (see
//! [`crate::config::SessionConfig`]) and is encoded as the same camelCase
//! JSON the backend returns.
//!
//! A record that cannot be parsed, or that parses but carries an empty token,
//! is treated as a first-run condition: it is removed and reported as absent,
//! with a warning in the log. Storage
//! failures on read are handled the same way, since a missing session is
//! always a safe state.

use crate::error::StoreError;
use crate::models::User;
use crate::storage::KeyValueStore;

pub const DEFAULT_RECORD_KEY: &str = "user";

/// Typed access to the persisted session user.
#[derive(Clone, Debug)]
pub struct UserRecord<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> UserRecord<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Load the stored user. Corrupt or unreadable records come back as `None`.
    pub fn load(&self) -> Option<User> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read stored session: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) if user.has_token() => Some(user),
            Ok(_) => {
                tracing::warn!("Discarding stored session without a token");
                self.discard();
                None
            }
            Err(e) => {
                tracing::warn!("Discarding corrupt stored session: {}", e);
                self.discard();
                None
            }
        }
    }

    fn discard(&self) {
        if let Err(e) = self.storage.remove(&self.key) {
            tracing::warn!("Failed to remove corrupt session: {}", e);
        }
    }

    /// Persist `user`, replacing any previous record.
    pub fn save(&self, user: &User) -> Result<(), StoreError> {
        let json = serde_json::to_string(user)?;
        self.storage.set(&self.key, &json)
    }

    /// Remove the record.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.storage.remove(&self.key)
    }
}
