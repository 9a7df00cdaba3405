//! # Browser `localStorage` store
//!
//! [`LocalStorageStore`] is the web implementation of [`KeyValueStore`]. Every
//! call looks the storage object up again through `window.localStorage`, so the
//! struct is zero-size and freely cloneable.
//!
//! Errors (storage disabled, quota exceeded, private mode) are swallowed: a
//! failed read is treated as a missing key, a failed write as a no-op.

use crate::kv::KeyValueStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
