//! Listing page: every tweet with its author, then every user.

use std::collections::HashMap;

use dioxus::prelude::*;
use store::{Tweet, User, UserId};

use crate::navbar::layout;

/// Render the listing page.
pub fn home_page(viewer: Option<User>, tweets: Vec<Tweet>, users: Vec<User>) -> String {
    crate::render(
        Home,
        HomeProps {
            viewer,
            tweets,
            users,
        },
    )
}

fn byline(authors: &HashMap<UserId, &str>, tweet: &Tweet) -> String {
    match tweet.user_id.and_then(|id| authors.get(&id)) {
        Some(name) => format!("by {name}"),
        None => "by unknown".to_string(),
    }
}

#[component]
fn Home(viewer: Option<User>, tweets: Vec<Tweet>, users: Vec<User>) -> Element {
    let authors: HashMap<UserId, &str> = users
        .iter()
        .map(|u| (u.id, u.username.as_str()))
        .collect();

    let content = rsx! {
        section {
            class: "feed",
            h2 { "Tweets" }
            if tweets.is_empty() {
                p { class: "empty", "Nothing posted yet." }
            }
            ul {
                for tweet in tweets.iter() {
                    li {
                        class: "tweet",
                        p { class: "status", {tweet.status.clone()} }
                        span { class: "author", {byline(&authors, tweet)} }
                    }
                }
            }
        }
        section {
            class: "users",
            h2 { "Users" }
            ul {
                for user in users.iter() {
                    li { {user.username.clone()} }
                }
            }
        }
    };

    layout("Fwitter", viewer.as_ref(), content)
}
