use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

/// Landing page: a hero for visitors, a shortcut to the feed for users.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let state = auth.state()();

    if state.is_authenticated() {
        return rsx! {
            div {
                class: "home-container",
                div {
                    class: "home-content",
                    h1 { "Welcome Back!" }
                    p { "Check out your feed to see the latest posts." }
                    Link { class: "btn btn-primary", to: Route::Feed {}, "Go to Feed" }
                }
            }
        };
    }

    rsx! {
        div {
            class: "home-container",
            div {
                class: "home-hero",
                h1 { "Welcome to Commons" }
                p {
                    class: "hero-subtitle",
                    "Connect, share, and engage with a community of like-minded individuals"
                }

                div {
                    class: "hero-features",
                    div {
                        class: "feature",
                        h3 { "Share Your Thoughts" }
                        p { "Create posts and share your ideas with the community" }
                    }
                    div {
                        class: "feature",
                        h3 { "Connect with Others" }
                        p { "Follow users and stay updated with their content" }
                    }
                    div {
                        class: "feature",
                        h3 { "Engage" }
                        p { "Comment and interact with posts from the community" }
                    }
                }

                div {
                    class: "hero-actions",
                    Link { class: "btn btn-primary btn-lg", to: Route::Register {}, "Get Started" }
                    Link { class: "btn btn-secondary btn-lg", to: Route::Login {}, "Sign In" }
                }
            }
        }
    }
}
