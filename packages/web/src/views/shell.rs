//! Layout shell: the navbar plus the routed page body.

use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

#[component]
pub fn Shell() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Navbar() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let state = auth.state()();

    let handle_logout = move |_| {
        auth.logout();
        nav.push(Route::Login {});
    };

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-container",
                Link { class: "navbar-brand", to: Route::Home {}, "Commons" }

                div {
                    class: "navbar-menu",
                    if state.is_authenticated() {
                        Link { class: "navbar-link", to: Route::Feed {}, "Feed" }
                        Link { class: "navbar-link", to: Route::CreatePost {}, "New Post" }
                        if let Some(user) = state.user {
                            Link { class: "navbar-link", to: Route::Profile { id: user.id }, "Profile" }
                        }
                        button { class: "navbar-button", onclick: handle_logout, "Logout" }
                    } else {
                        Link { class: "navbar-link", to: Route::Login {}, "Login" }
                        Link { class: "navbar-link navbar-link-primary", to: Route::Register {}, "Sign Up" }
                    }
                }
            }
        }
    }
}
