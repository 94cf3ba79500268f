//! Post detail page: full content, comments, and the owner's edit/delete
//! actions.

use api::{Comment, UpdatePost};
use dioxus::prelude::*;
use ui::{use_auth, RequireAuth};

use super::date_part;
use crate::Route;

#[component]
pub fn PostDetail(id: i64) -> Element {
    rsx! {
        RequireAuth {
            PostDetailView { id }
        }
    }
}

#[component]
fn PostDetailView(id: i64) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Track the route param in a signal so the loader re-runs when the
    // route changes without a remount.
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let mut post = use_signal(|| Option::<api::Post>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut deleting = use_signal(|| false);
    let mut confirm_delete = use_signal(|| false);
    let mut editing = use_signal(|| false);
    let mut edit_title = use_signal(String::new);
    let mut edit_content = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let loader_auth = auth.clone();
    let _loader = use_resource(move || {
        let client = loader_auth.client();
        let id = id_signal();
        async move {
            loading.set(true);
            error.set(None);
            match client.get_post(id).await {
                Ok(loaded) => post.set(Some(loaded)),
                Err(err) => {
                    tracing::error!("failed to load post {id}: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        }
    });

    let viewer = auth.state()().user;

    let delete_auth = auth.clone();
    let handle_delete = move |_| {
        // First click arms the button, second click deletes.
        if !confirm_delete() {
            confirm_delete.set(true);
            return;
        }
        let client = delete_auth.client();
        spawn(async move {
            deleting.set(true);
            match client.delete_post(id_signal()).await {
                Ok(()) => {
                    nav.push(Route::Feed {});
                }
                Err(err) => {
                    tracing::error!("failed to delete post: {err}");
                    error.set(Some(err.to_string()));
                    confirm_delete.set(false);
                    deleting.set(false);
                }
            }
        });
    };

    let start_edit = move |_| {
        if let Some(current) = post() {
            edit_title.set(current.title);
            edit_content.set(current.content);
            editing.set(true);
        }
    };

    let save_auth = auth.clone();
    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let client = save_auth.client();
        spawn(async move {
            error.set(None);
            saving.set(true);

            let patch = UpdatePost {
                title: Some(edit_title().trim().to_string()),
                content: Some(edit_content().trim().to_string()),
            };
            match client.update_post(id_signal(), &patch).await {
                Ok(updated) => {
                    post.set(Some(updated));
                    editing.set(false);
                }
                Err(err) => {
                    tracing::error!("failed to update post: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            saving.set(false);
        });
    };

    if loading() {
        return rsx! {
            div {
                class: "post-detail-container",
                div { class: "loading", "Loading post..." }
            }
        };
    }

    let Some(current) = post() else {
        let message = error().unwrap_or_else(|| "Post not found".to_string());
        return rsx! {
            div {
                class: "post-detail-container",
                div { class: "error-message", "{message}" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| { nav.push(Route::Feed {}); },
                    "Back to Feed"
                }
            }
        };
    };

    let is_owner = viewer.as_ref().map(|user| user.id) == Some(current.user_id);
    let edited = current.updated_at != current.created_at;
    let created = date_part(&current.created_at).to_string();
    let updated = date_part(&current.updated_at).to_string();
    let comments = current.comments.clone().unwrap_or_default();
    let comment_count = comments.len();

    rsx! {
        div {
            class: "post-detail-container",

            if let Some(err) = error() {
                div { class: "error-message", "{err}" }
            }

            article {
                class: "post-detail",

                if editing() {
                    form {
                        class: "post-form",
                        onsubmit: handle_save,

                        div {
                            class: "form-group",
                            label { r#for: "edit-title", "Title" }
                            input {
                                id: "edit-title",
                                r#type: "text",
                                required: true,
                                maxlength: "100",
                                value: edit_title(),
                                disabled: saving(),
                                oninput: move |evt| edit_title.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-group",
                            label { r#for: "edit-content", "Content" }
                            textarea {
                                id: "edit-content",
                                required: true,
                                maxlength: "1000",
                                rows: "8",
                                value: edit_content(),
                                disabled: saving(),
                                oninput: move |evt| edit_content.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-actions",
                            button {
                                r#type: "button",
                                class: "btn btn-secondary",
                                disabled: saving(),
                                onclick: move |_| editing.set(false),
                                "Cancel"
                            }
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: saving(),
                                if saving() { "Saving..." } else { "Save Changes" }
                            }
                        }
                    }
                } else {
                    header {
                        class: "post-header",
                        h1 { "{current.title}" }
                        div {
                            class: "post-meta",
                            span { "Posted {created}" }
                            if edited {
                                span { " • Edited {updated}" }
                            }
                        }
                        if !current.tags.is_empty() {
                            div {
                                class: "post-tags",
                                for tag in current.tags.iter() {
                                    span { class: "tag", "#{tag}" }
                                }
                            }
                        }
                    }

                    div { class: "post-content", "{current.content}" }

                    if is_owner {
                        div {
                            class: "post-actions",
                            button {
                                class: "btn btn-secondary",
                                onclick: start_edit,
                                "Edit Post"
                            }
                            button {
                                class: "btn btn-danger",
                                disabled: deleting(),
                                onclick: handle_delete,
                                if deleting() {
                                    "Deleting..."
                                } else if confirm_delete() {
                                    "Confirm Delete"
                                } else {
                                    "Delete Post"
                                }
                            }
                        }
                    }

                    if comment_count > 0 {
                        section {
                            class: "comments-section",
                            h2 { "Comments ({comment_count})" }
                            div {
                                class: "comments-list",
                                for comment in comments {
                                    CommentItem { key: "{comment.id}", comment }
                                }
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

#[component]
fn CommentItem(comment: Comment) -> Element {
    let author = comment
        .user
        .as_ref()
        .map(|user| user.username.clone())
        .unwrap_or_else(|| "Anonymous".to_string());
    let date = date_part(&comment.created_at).to_string();

    rsx! {
        div {
            class: "comment",
            div { class: "comment-meta", "{author} • {date}" }
            p { class: "comment-content", "{comment.content}" }
        }
    }
}
