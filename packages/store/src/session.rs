//! # Persisted session — token and user slots
//!
//! [`SessionStore`] is the typed layer over a [`SlotStore`] backend. It owns
//! exactly two slots:
//!
//! | Slot | Contents |
//! |------|----------|
//! | `"token"` | the raw bearer token string |
//! | `"user"` | the signed-in user record, serialized as JSON |
//!
//! The two slots are only meaningful together: an authenticated session is
//! "token present AND user present", and that predicate is always derived
//! from the slots, never stored. A token whose companion user slot is
//! missing or corrupt does not constitute a session.
//!
//! Deserialization of the user slot is defensive — JSON that no longer
//! matches the expected shape (an older build wrote it, the user edited
//! devtools storage, …) reads as "no user".

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::slots::SlotStore;

const TOKEN_SLOT: &str = "token";
const USER_SLOT: &str = "user";

/// Typed session persistence over a slot backend.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S: SlotStore> {
    slots: S,
}

impl<S: SlotStore> SessionStore<S> {
    pub fn new(slots: S) -> Self {
        Self { slots }
    }

    /// The persisted bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.slots.get(TOKEN_SLOT)
    }

    /// The persisted user record, if present and still readable.
    pub fn user<U: DeserializeOwned>(&self) -> Option<U> {
        let raw = self.slots.get(USER_SLOT)?;
        serde_json::from_str(&raw).ok()
    }

    /// Persist a session: both slots, or neither.
    ///
    /// The user is serialized before anything is written, so a failed
    /// serialization cannot leave a token without a user behind.
    pub fn set_session<U: Serialize>(&self, token: &str, user: &U) {
        let Ok(raw) = serde_json::to_string(user) else {
            return;
        };
        self.slots.set(USER_SLOT, &raw);
        self.slots.set(TOKEN_SLOT, token);
    }

    /// Remove both slots.
    pub fn clear(&self) {
        self.slots.remove(TOKEN_SLOT);
        self.slots.remove(USER_SLOT);
    }
}
