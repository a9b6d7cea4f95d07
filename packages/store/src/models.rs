//! # Domain models for users and tweets
//!
//! Defines the records read from the data store and the validated inputs used to
//! create them. Persisted records are `Serialize + Deserialize` so they can be stored
//! in sessions or logged as structured values.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | A row of the `users` table: store-assigned `id`, `username` and `email`. |
//! | [`Tweet`] | A row of the `tweets` table: store-assigned `id`, the `status` body and the owning `user_id`. |
//! | [`NewUser`] | A validated sign-up request. Username and email are trimmed and must not be blank. |
//! | [`NewTweet`] | A validated post. It can only be built from an existing [`User`], so every new tweet has an owner. |
//!
//! `Tweet::user_id` is optional because rows written before the `user_id` column was
//! added have no owner. Tweets created through [`NewTweet`] always carry one.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub type UserId = i32;
pub type TweetId = i32;

/// A registered user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

/// A short status message posted by a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    pub id: TweetId,
    /// Body of the post
    pub status: String,
    /// Owner, `None` for rows that predate the `user_id` column
    pub user_id: Option<UserId>,
}

impl Tweet {
    pub fn is_owned_by(&self, user: &User) -> bool {
        self.user_id == Some(user.id)
    }
}

/// Input for creating a [`User`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUser {
    username: String,
    email: String,
}

impl NewUser {
    pub fn new(username: &str, email: &str) -> Result<Self, ValidationError> {
        let username = username.trim();
        let email = email.trim();

        if username.is_empty() {
            return Err(ValidationError::BlankUsername);
        }
        if email.is_empty() {
            return Err(ValidationError::BlankEmail);
        }

        Ok(Self {
            username: username.to_string(),
            email: email.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Input for creating a [`Tweet`] owned by an existing user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTweet {
    user_id: UserId,
    status: String,
}

impl NewTweet {
    pub fn new(author: &User, status: &str) -> Result<Self, ValidationError> {
        if status.trim().is_empty() {
            return Err(ValidationError::BlankStatus);
        }

        Ok(Self {
            user_id: author.id,
            status: status.to_string(),
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}
