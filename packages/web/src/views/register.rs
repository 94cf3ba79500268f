//! Registration page.
//!
//! A successful registration does not sign the user in: the backend returns
//! the new account together with an activation token, and the account stays
//! unusable until that token is consumed. The token is surfaced here so it
//! can be used manually when the activation email is not an option.

use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut success = use_signal(|| false);
    let mut activation_token = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let username = username().trim().to_string();
            let email = email().trim().to_string();
            let password = password();
            match auth.register(&username, &email, &password).await {
                Ok(registered) => {
                    activation_token.set(registered.token);
                    success.set(true);
                }
                Err(err) => {
                    tracing::error!("registration failed: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        });
    };

    if success() {
        return rsx! {
            div {
                class: "auth-container",
                div {
                    class: "auth-card",
                    div {
                        class: "success-message",
                        h2 { "Registration Successful!" }
                        p {
                            "Please check your email to activate your account. We've sent an "
                            "activation link to "
                            strong { "{email}" }
                            "."
                        }
                        if !activation_token().is_empty() {
                            div {
                                class: "activation-info",
                                p { "Your activation token:" }
                                code { class: "token-display", "{activation_token}" }
                                p {
                                    class: "help-text",
                                    "Click the link in your email or use this token manually."
                                }
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| { nav.push(Route::Login {}); },
                            "Go to Login"
                        }
                    }
                }
            }
        };
    }

    rsx! {
        div {
            class: "auth-container",
            div {
                class: "auth-card",
                h1 { "Create Account" }
                p { class: "auth-subtitle", "Join our community today" }

                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    div {
                        class: "form-group",
                        label { r#for: "username", "Username" }
                        input {
                            id: "username",
                            r#type: "text",
                            required: true,
                            maxlength: "100",
                            placeholder: "Choose a username",
                            value: username(),
                            disabled: loading(),
                            oninput: move |evt| username.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            required: true,
                            maxlength: "255",
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
                            maxlength: "72",
                            placeholder: "Choose a strong password",
                            value: password(),
                            disabled: loading(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                        small { "Minimum 3 characters" }
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Sign Up" }
                    }
                }

                div {
                    class: "auth-footer",
                    p {
                        "Already have an account? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
