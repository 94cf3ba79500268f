//! Storage backend trait for persisted session slots.
//!
//! A [`SlotStore`] is a minimal named-slot interface over whatever the
//! platform offers for durable strings. Implementations are expected to
//! swallow storage-layer failures: a read that cannot be served returns
//! `None`, a write that cannot be performed is dropped. The session layer
//! treats missing data as "logged out" rather than an error.

/// A named string slot backend.
pub trait SlotStore {
    /// Read the slot, `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write the slot, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove the slot if present.
    fn remove(&self, key: &str);
}
