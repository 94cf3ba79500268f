//! Profile page: a user's public record plus the follow toggle.

use dioxus::prelude::*;
use ui::{use_auth, RequireAuth};

use super::date_part;
use crate::Route;

#[component]
pub fn Profile(id: i64) -> Element {
    rsx! {
        RequireAuth {
            ProfileView { id }
        }
    }
}

#[component]
fn ProfileView(id: i64) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let mut user = use_signal(|| Option::<api::User>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    // The backend does not report follow state, so the toggle starts from
    // "not following" on every visit.
    let mut is_following = use_signal(|| false);
    let mut action_loading = use_signal(|| false);

    let loader_auth = auth.clone();
    let _loader = use_resource(move || {
        let client = loader_auth.client();
        let id = id_signal();
        async move {
            loading.set(true);
            error.set(None);
            is_following.set(false);
            match client.get_user(id).await {
                Ok(loaded) => user.set(Some(loaded)),
                Err(err) => {
                    tracing::error!("failed to load user {id}: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        }
    });

    let viewer = auth.state()().user;

    let follow_auth = auth.clone();
    let handle_follow = move |_| {
        if action_loading() {
            return;
        }
        let client = follow_auth.client();
        spawn(async move {
            action_loading.set(true);
            error.set(None);

            let id = id_signal();
            let result = if is_following() {
                client.unfollow_user(id).await
            } else {
                client.follow_user(id).await
            };
            match result {
                Ok(()) => is_following.set(!is_following()),
                Err(err) => {
                    tracing::error!("failed to update follow status: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            action_loading.set(false);
        });
    };

    if loading() {
        return rsx! {
            div {
                class: "profile-container",
                div { class: "loading", "Loading profile..." }
            }
        };
    }

    let Some(current) = user() else {
        let message = error().unwrap_or_else(|| "User not found".to_string());
        return rsx! {
            div {
                class: "profile-container",
                div { class: "error-message", "{message}" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| { nav.push(Route::Feed {}); },
                    "Back to Feed"
                }
            }
        };
    };

    let initial = current
        .username
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?');
    let is_own_profile = viewer.as_ref().map(|user| user.id) == Some(current.id);
    let member_since = date_part(&current.created_at).to_string();
    let status = if current.is_active { "Active" } else { "Inactive" };
    let status_class = if current.is_active { "badge active" } else { "badge inactive" };
    let follow_class = if is_following() { "btn btn-secondary" } else { "btn btn-primary" };

    rsx! {
        div {
            class: "profile-container",

            if let Some(err) = error() {
                div { class: "error-message", "{err}" }
            }

            div {
                class: "profile-card",
                div {
                    class: "profile-header",
                    div { class: "profile-avatar", "{initial}" }
                    div {
                        class: "profile-info",
                        h1 { "{current.username}" }
                        p { class: "profile-email", "{current.email}" }
                        div {
                            class: "profile-badges",
                            span { class: status_class, "{status}" }
                            span { class: "badge role", "{current.role.name}" }
                        }
                    }
                }

                div {
                    class: "profile-meta",
                    p {
                        strong { "Member since: " }
                        "{member_since}"
                    }
                    if !current.role.description.is_empty() {
                        p {
                            strong { "Role: " }
                            "{current.role.description}"
                        }
                    }
                }

                if !is_own_profile {
                    div {
                        class: "profile-actions",
                        button {
                            class: follow_class,
                            disabled: action_loading(),
                            onclick: handle_follow,
                            if action_loading() {
                                "Loading..."
                            } else if is_following() {
                                "Unfollow"
                            } else {
                                "Follow"
                            }
                        }
                    }
                }
            }

            button {
                class: "btn btn-secondary",
                onclick: move |_| { nav.push(Route::Feed {}); },
                "Back to Feed"
            }
        }
    }
}
