use dioxus::prelude::*;

use crate::navbar::layout;

/// Render the login page.
pub fn login_page() -> String {
    crate::render(Login, ())
}

#[component]
fn Login() -> Element {
    let content = rsx! {
        form {
            class: "login",
            method: "post",
            action: "/login",
            label {
                "Username"
                input { r#type: "text", name: "username" }
            }
            button { r#type: "submit", "Log in" }
        }
        p {
            "No account yet? "
            a { href: "/signup", "Sign up" }
        }
    };

    layout("Log in", None, content)
}
