//! This crate contains the shared UI layer for the workspace: the
//! authentication context, the route guard, and the platform session store
//! selector.

mod auth;
pub use auth::{use_auth, Auth, AuthProvider, AuthState};

mod guard;
pub use guard::RequireAuth;

mod platform;
pub use platform::{platform_session, PlatformSlots};
