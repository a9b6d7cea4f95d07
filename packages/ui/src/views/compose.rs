//! Composition page for a logged-in user.

use dioxus::prelude::*;
use store::{Tweet, User};

use crate::navbar::layout;

/// Render the composition page.
pub fn compose_page(viewer: User, tweets: Vec<Tweet>) -> String {
    crate::render(Compose, ComposeProps { viewer, tweets })
}

/// `tweets` are the viewer's earlier posts.
#[component]
fn Compose(viewer: User, tweets: Vec<Tweet>) -> Element {
    let content = rsx! {
        form {
            class: "compose",
            method: "post",
            action: "/tweet",
            label {
                "What's happening?"
                textarea { name: "status", rows: "3" }
            }
            button { r#type: "submit", "Tweet" }
        }
        section {
            class: "own-tweets",
            h2 { "Your tweets" }
            ul {
                for tweet in tweets.iter() {
                    li { class: "tweet", {tweet.status.clone()} }
                }
            }
        }
    };

    layout("New tweet", Some(&viewer), content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_form_posts_status() {
        let alice = User {
            id: 1,
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
        };
        let tweets = vec![Tweet {
            id: 3,
            status: "earlier post".to_string(),
            user_id: Some(1),
        }];
        let html = compose_page(alice, tweets);

        assert!(html.contains("action=\"/tweet\""));
        assert!(html.contains("name=\"status\""));
        assert!(html.contains("earlier post"));
        assert!(html.contains("Log out"));
    }
}
