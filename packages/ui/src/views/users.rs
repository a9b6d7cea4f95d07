//! Sign-up form and the list of registered users.

use dioxus::prelude::*;
use store::User;

use crate::navbar::layout;

/// Render the sign-up page, served at both `/signup` and `/users`.
pub fn users_page(viewer: Option<User>, users: Vec<User>) -> String {
    crate::render(Users, UsersProps { viewer, users })
}

#[component]
fn Users(viewer: Option<User>, users: Vec<User>) -> Element {
    let content = rsx! {
        form {
            class: "signup",
            method: "post",
            action: "/sign-up",
            label {
                "Username"
                input { r#type: "text", name: "username" }
            }
            label {
                "Email"
                input { r#type: "email", name: "email" }
            }
            button { r#type: "submit", "Sign up" }
        }
        section {
            class: "users",
            h2 { "Users" }
            ul {
                for user in users.iter() {
                    li {
                        span { class: "username", {user.username.clone()} }
                        " "
                        span { class: "email", {user.email.clone()} }
                    }
                }
            }
        }
    };

    layout("Sign up", viewer.as_ref(), content)
}
