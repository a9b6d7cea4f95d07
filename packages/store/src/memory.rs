use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{NewTweet, NewUser, Tweet, TweetId, User, UserId};
use crate::repo::Store;

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    tweets: Vec<Tweet>,
}

/// In-memory Store for testing and running without a database.
///
/// Ids are assigned sequentially from 1, matching a `SERIAL` column.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn all_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.tables().users.clone())
    }

    async fn all_tweets(&self) -> Result<Vec<Tweet>, StoreError> {
        Ok(self.tables().tweets.clone())
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.tables().users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .tables()
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn tweets_by_user(&self, id: UserId) -> Result<Vec<Tweet>, StoreError> {
        Ok(self
            .tables()
            .tweets
            .iter()
            .filter(|t| t.user_id == Some(id))
            .cloned()
            .collect())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables();

        if tables.users.iter().any(|u| u.username == user.username()) {
            return Err(StoreError::DuplicateUsername(user.username().to_string()));
        }

        let user = User {
            id: tables.users.len() as UserId + 1,
            username: user.username().to_string(),
            email: user.email().to_string(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn create_tweet(&self, tweet: NewTweet) -> Result<Tweet, StoreError> {
        let mut tables = self.tables();

        // Mirrors the foreign key on tweets.user_id
        if !tables.users.iter().any(|u| u.id == tweet.user_id()) {
            return Err(StoreError::UnknownUser(tweet.user_id()));
        }

        let tweet = Tweet {
            id: tables.tweets.len() as TweetId + 1,
            status: tweet.status().to_string(),
            user_id: Some(tweet.user_id()),
        };
        tables.tweets.push(tweet.clone());
        Ok(tweet)
    }
}
