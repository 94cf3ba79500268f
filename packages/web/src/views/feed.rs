//! Feed page: the posts of followed users, searched and sorted server-side.

use api::{FeedQuery, PostWithMetadata};
use dioxus::prelude::*;
use ui::{use_auth, RequireAuth};

use super::date_part;
use crate::Route;

#[component]
pub fn Feed() -> Element {
    rsx! {
        RequireAuth {
            FeedView {}
        }
    }
}

#[component]
fn FeedView() -> Element {
    let auth = use_auth();
    let mut search = use_signal(String::new);
    let mut sort = use_signal(|| "desc".to_string());
    let mut error = use_signal(|| Option::<String>::None);

    // Search and sort are query parameters, not client-side filters: every
    // change re-asks the backend.
    let mut feed = use_resource(move || {
        let client = auth.client();
        let sort = sort();
        let search = search().trim().to_string();
        async move {
            error.set(None);
            let query = FeedQuery {
                limit: Some(20),
                offset: Some(0),
                sort: Some(sort),
                search: (!search.is_empty()).then_some(search),
                ..Default::default()
            };
            match client.feed(&query).await {
                Ok(posts) => Some(posts),
                Err(err) => {
                    tracing::error!("failed to load feed: {err}");
                    error.set(Some(err.to_string()));
                    None
                }
            }
        }
    });

    let body = match feed() {
        None => rsx! {
            div { class: "loading", "Loading feed..." }
        },
        Some(None) => rsx! {},
        Some(Some(posts)) if posts.is_empty() => rsx! {
            div {
                class: "empty-state",
                h2 { "No posts yet" }
                p { "Be the first to create a post!" }
                Link { class: "btn btn-primary", to: Route::CreatePost {}, "Create Post" }
            }
        },
        Some(Some(posts)) => rsx! {
            div {
                class: "posts-grid",
                for meta in posts {
                    PostCard { key: "{meta.post.id}", meta }
                }
            }
        },
    };

    rsx! {
        div {
            class: "feed-container",
            div {
                class: "feed-header",
                h1 { "Your Feed" }
                Link { class: "btn btn-primary", to: Route::CreatePost {}, "Create Post" }
            }

            div {
                class: "feed-controls",
                form {
                    class: "search-form",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        feed.restart();
                    },
                    input {
                        class: "search-input",
                        r#type: "text",
                        placeholder: "Search posts...",
                        value: search(),
                        oninput: move |evt| search.set(evt.value()),
                    }
                    button { r#type: "submit", class: "btn btn-secondary", "Search" }
                }

                div {
                    class: "sort-controls",
                    label { "Sort by:" }
                    select {
                        class: "sort-select",
                        value: sort(),
                        onchange: move |evt| sort.set(evt.value()),
                        option { value: "desc", "Newest First" }
                        option { value: "asc", "Oldest First" }
                    }
                }
            }

            if let Some(err) = error() {
                div { class: "error-message", "{err}" }
            }

            {body}
        }
    }
}

#[component]
fn PostCard(meta: PostWithMetadata) -> Element {
    let date = date_part(&meta.post.created_at).to_string();
    let body = preview(&meta.post.content);
    let overflow_tags = meta.post.tags.len().saturating_sub(3);

    rsx! {
        article {
            class: "post-card",
            Link {
                class: "post-link",
                to: Route::PostDetail { id: meta.post.id },

                div {
                    class: "post-card-header",
                    h2 { "{meta.post.title}" }
                    div {
                        class: "post-card-meta",
                        span { class: "author", "by {meta.user.username}" }
                        span { class: "date", "{date}" }
                    }
                }

                p { class: "post-card-content", "{body}" }

                if !meta.post.tags.is_empty() {
                    div {
                        class: "post-card-tags",
                        for tag in meta.post.tags.iter().take(3) {
                            span { class: "tag", "#{tag}" }
                        }
                        if overflow_tags > 0 {
                            span { class: "tag", "+{overflow_tags} more" }
                        }
                    }
                }

                div {
                    class: "post-card-footer",
                    span { class: "comments-count", "{meta.comments_count} comments" }
                }
            }
        }
    }
}

/// Truncated content for the card body.
fn preview(content: &str) -> String {
    if content.chars().count() > 200 {
        let truncated: String = content.chars().take(200).collect();
        format!("{truncated}...")
    } else {
        content.to_string()
    }
}
