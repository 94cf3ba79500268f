use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Confirm, CreatePost, Feed, Home, Login, PostDetail, Profile, Register, Shell};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/confirm/:token")]
        Confirm { token: String },
        #[route("/feed")]
        Feed {},
        #[route("/posts/new")]
        CreatePost {},
        #[route("/posts/:id")]
        PostDetail { id: i64 },
        #[route("/profile/:id")]
        Profile { id: i64 },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
