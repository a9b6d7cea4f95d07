use dioxus::prelude::*;
use store::User;

/// Head and body shared by every page; [`crate::render`] wraps them in `<html>`.
///
/// The header shows who is signed in, so it takes the current viewer rather than
/// querying the session itself.
pub(crate) fn layout(title: &str, viewer: Option<&User>, content: Element) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            title { "{title}" }
            link { rel: "stylesheet", href: "/main.css" }
        }
        body {
            header {
                class: "navbar",
                a { class: "brand", href: "/", "Fwitter" }
                nav {
                    if let Some(user) = viewer {
                        span { class: "viewer", "Signed in as " {user.username.clone()} }
                        a { href: "/tweet", "New tweet" }
                        a { href: "/logout", "Log out" }
                    } else {
                        a { href: "/login", "Log in" }
                        a { href: "/signup", "Sign up" }
                    }
                }
            }
            main { {content} }
        }
    }
}
