//! Post composition page.

use api::NewPost;
use dioxus::prelude::*;
use ui::{use_auth, RequireAuth};

use crate::Route;

#[component]
pub fn CreatePost() -> Element {
    rsx! {
        RequireAuth {
            CreatePostView {}
        }
    }
}

#[component]
fn CreatePostView() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut tags = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let title_count = title().chars().count();
    let content_count = content().chars().count();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = auth.client();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let payload = NewPost {
                title: title(),
                content: content(),
                tags: tags()
                    .split(',')
                    .map(|tag| tag.trim().to_string())
                    .filter(|tag| !tag.is_empty())
                    .collect(),
            };
            match client.create_post(&payload).await {
                Ok(post) => {
                    nav.push(Route::PostDetail { id: post.id });
                }
                Err(err) => {
                    tracing::error!("failed to create post: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "post-create-container",
            div {
                class: "post-create-card",
                h1 { "Create New Post" }

                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                form {
                    class: "post-form",
                    onsubmit: handle_submit,

                    div {
                        class: "form-group",
                        label { r#for: "title", "Title" }
                        input {
                            id: "title",
                            r#type: "text",
                            required: true,
                            maxlength: "100",
                            placeholder: "Enter post title",
                            value: title(),
                            disabled: loading(),
                            oninput: move |evt| title.set(evt.value()),
                        }
                        small { "{title_count}/100 characters" }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "content", "Content" }
                        textarea {
                            id: "content",
                            required: true,
                            maxlength: "1000",
                            rows: "8",
                            placeholder: "What's on your mind?",
                            value: content(),
                            disabled: loading(),
                            oninput: move |evt| content.set(evt.value()),
                        }
                        small { "{content_count}/1000 characters" }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "tags", "Tags" }
                        input {
                            id: "tags",
                            r#type: "text",
                            placeholder: "Enter tags separated by commas (e.g., tech, news, tutorial)",
                            value: tags(),
                            disabled: loading(),
                            oninput: move |evt| tags.set(evt.value()),
                        }
                        small { "Separate tags with commas" }
                    }

                    div {
                        class: "form-actions",
                        button {
                            r#type: "button",
                            class: "btn btn-secondary",
                            disabled: loading(),
                            onclick: move |_| { nav.go_back(); },
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: loading(),
                            if loading() { "Creating..." } else { "Create Post" }
                        }
                    }
                }
            }
        }
    }
}
