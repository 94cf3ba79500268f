//! Platform session store selector.
//!
//! Returns a [`store::SessionStore`] backed by the appropriate
//! [`store::SlotStore`]:
//! - **Web** (WASM + `web` feature): browser `localStorage` via
//!   [`store::LocalStore`] — the session survives reloads.
//! - **Everything else**: [`store::MemoryStore`] — the session lives for the
//!   process only. This is also what tests construct directly.

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformSlots = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformSlots = store::MemoryStore;

/// Create the platform-appropriate session store.
pub fn platform_session() -> store::SessionStore<PlatformSlots> {
    store::SessionStore::new(PlatformSlots::new())
}
