//! Login page: credentials in, login handshake, on to the feed.

use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let email = email().trim().to_string();
            let password = password();
            match auth.login(&email, &password).await {
                Ok(()) => {
                    nav.push(Route::Feed {});
                }
                Err(err) => {
                    tracing::error!("login failed: {err}");
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
                h1 { "Welcome Back" }
                p { class: "auth-subtitle", "Sign in to your account" }

                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    div {
                        class: "form-group",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            required: true,
                            placeholder: "your@email.com",
                            value: email(),
                            disabled: loading(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            required: true,
                            minlength: "3",
                            placeholder: "Enter your password",
                            value: password(),
                            disabled: loading(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }

                div {
                    class: "auth-footer",
                    p {
                        "Don't have an account? "
                        Link { to: Route::Register {}, "Sign up" }
                    }
                }
            }
        }
    }
}
