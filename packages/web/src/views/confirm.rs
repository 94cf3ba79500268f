//! Account activation page, reached from the emailed confirmation link.

use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

#[component]
pub fn Confirm(token: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| false);

    let handle_confirm = move |_| {
        let auth = auth.clone();
        let token = token.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            match auth.activate(&token).await {
                Ok(()) => {
                    success.set(true);
                    // Let the success message land before moving on.
                    #[cfg(target_arch = "wasm32")]
                    gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                    nav.push(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("activation failed: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-container",
            div {
                class: "auth-card",
                h1 { "Account Activation" }

                if success() {
                    div {
                        class: "success-message",
                        h2 { "Account Activated!" }
                        p { "Your account has been successfully activated. Redirecting to login..." }
                    }
                } else {
                    p {
                        class: "auth-subtitle",
                        "Click the button below to activate your account"
                    }

                    if let Some(err) = error() {
                        div { class: "error-message", "{err}" }
                    }

                    button {
                        class: "btn btn-primary btn-block",
                        disabled: loading(),
                        onclick: handle_confirm,
                        if loading() { "Activating..." } else { "Activate Account" }
                    }

                    div {
                        class: "auth-footer",
                        p {
                            "Already activated? "
                            Link { to: Route::Login {}, "Sign in" }
                        }
                    }
                }
            }
        }
    }
}
