//! # Browser-side slot storage — `localStorage`
//!
//! [`LocalStore`] is the [`SlotStore`] implementation used on the **web
//! platform**. Slots map directly onto `window.localStorage` entries, so a
//! session survives page reloads and browser restarts until it is cleared.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). Storage may be unavailable — private browsing
//! modes, quota exhaustion, a detached window — and in every such case the
//! app degrades to "no persisted session" rather than crashing. The
//! authoritative session state always lives on the backend.

use crate::slots::SlotStore;

/// `localStorage`-backed SlotStore for the web platform.
///
/// A zero-size struct that looks up the storage handle on every operation;
/// the browser hands out the same underlying storage each time, so there is
/// no connection state worth caching.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SlotStore for LocalStore {
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
