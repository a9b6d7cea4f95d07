//! # Store — the data access seam for users and tweets
//!
//! Every handler talks to persistence through the [`Store`] trait, so the same request
//! logic runs against PostgreSQL in production (`api::db::PgStore`) and against
//! [`MemoryStore`](crate::MemoryStore) in tests and local development.
//!
//! ## Read path
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`all_users`](Store::all_users) | Every user, ordered by id. |
//! | [`all_tweets`](Store::all_tweets) | Every tweet, ordered by id. |
//! | [`find_user`](Store::find_user) | The user with the given id, or `None`. |
//! | [`find_user_by_username`](Store::find_user_by_username) | The user with the given username, or `None`. |
//! | [`tweets_by_user`](Store::tweets_by_user) | The tweets owned by one user, ordered by id. |
//!
//! ## Write path
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`create_user`](Store::create_user) | Inserts a user. Fails with [`StoreError::DuplicateUsername`] if the username is taken. |
//! | [`create_tweet`](Store::create_tweet) | Inserts a tweet. Fails with [`StoreError::UnknownUser`] if the owner does not exist. |
//!
//! Lookups return `Option` rather than an error on a miss; callers decide what absence
//! means for them.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{NewTweet, NewUser, Tweet, User, UserId};

/// Async interface to the `users` and `tweets` tables.
#[async_trait]
pub trait Store: Send + Sync {
    async fn all_users(&self) -> Result<Vec<User>, StoreError>;

    async fn all_tweets(&self) -> Result<Vec<Tweet>, StoreError>;

    async fn find_user(&self, id: UserId) -> Result<Option<User>, StoreError>;

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    async fn tweets_by_user(&self, id: UserId) -> Result<Vec<Tweet>, StoreError>;

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    async fn create_tweet(&self, tweet: NewTweet) -> Result<Tweet, StoreError>;
}
