//! # Durable key/value storage
//!
//! [`KeyValueStore`] is the seam between the session record and whatever
//! keeps it alive across reloads. Implementations live in sibling modules:
//!
//! | Backend | Module | Used on |
//! |---------|--------|---------|
//! | [`crate::MemoryStore`] | `memory` | tests, fallback |
//! | [`crate::FileStore`] | `file_store` | native builds |
//! | [`crate::LocalStore`] | `local` | web (browser `localStorage`) |
//!
//! Values are opaque strings. Callers own the encoding (the session record
//! is JSON).

use crate::error::StoreError;

/// Synchronous string key/value storage.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a value. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
