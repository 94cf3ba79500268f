//! Route guard for authenticated views.

use dioxus::prelude::*;

use crate::auth::use_auth;

/// Gate wrapping a protected view.
///
/// While session restoration is in flight, renders a placeholder. Once
/// resolved, an unauthenticated visitor is sent to `/login` with a history
/// *replace*, so back-navigation cannot land on the guarded page. An
/// authenticated visitor gets the wrapped content unchanged. Reads the
/// auth state and nothing else — no side effects of its own.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let auth = use_auth();
    let state = auth.state()();

    if state.loading {
        return rsx! {
            div { class: "guard-loading", "Loading..." }
        };
    }

    if !state.is_authenticated() {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().replace("/login");
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::warn!("unauthenticated access to a guarded view");
        }
        return rsx! {};
    }

    rsx! {
        {children}
    }
}
