//! [`Store`] implementation over the `users` and `tweets` tables.

use async_trait::async_trait;
use sqlx::PgPool;
use store::{NewTweet, NewUser, Store, StoreError, Tweet, User, UserId};

/// Database backed user
#[derive(sqlx::FromRow, Clone)]
struct SqlUser {
    id: i32,
    username: String,
    email: String,
}

impl SqlUser {
    fn into_user(self) -> User {
        User {
            id: self.id,
            username: self.username,
            email: self.email,
        }
    }
}

/// Database backed tweet
#[derive(sqlx::FromRow, Clone)]
struct SqlTweet {
    id: i32,
    status: String,
    user_id: Option<i32>,
}

impl SqlTweet {
    fn into_tweet(self) -> Tweet {
        Tweet {
            id: self.id,
            status: self.status,
            user_id: self.user_id,
        }
    }
}

fn backend(e: sqlx::Error) -> StoreError {
    StoreError::Backend(Box::new(e))
}

/// PostgreSQL-backed store sharing the process-wide pool.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn all_users(&self) -> Result<Vec<User>, StoreError> {
        let rows: Vec<SqlUser> = sqlx::query_as("SELECT id, username, email FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(backend)?;

        Ok(rows.into_iter().map(SqlUser::into_user).collect())
    }

    async fn all_tweets(&self) -> Result<Vec<Tweet>, StoreError> {
        let rows: Vec<SqlTweet> =
            sqlx::query_as("SELECT id, status, user_id FROM tweets ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(backend)?;

        Ok(rows.into_iter().map(SqlTweet::into_tweet).collect())
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let row: Option<SqlUser> =
            sqlx::query_as("SELECT id, username, email FROM users WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(backend)?;

        Ok(row.map(SqlUser::into_user))
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let row: Option<SqlUser> =
            sqlx::query_as("SELECT id, username, email FROM users WHERE username = $1")
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .map_err(backend)?;

        Ok(row.map(SqlUser::into_user))
    }

    async fn tweets_by_user(&self, id: UserId) -> Result<Vec<Tweet>, StoreError> {
        let rows: Vec<SqlTweet> =
            sqlx::query_as("SELECT id, status, user_id FROM tweets WHERE user_id = $1 ORDER BY id")
                .bind(id)
                .fetch_all(&self.pool)
                .await
                .map_err(backend)?;

        Ok(rows.into_iter().map(SqlTweet::into_tweet).collect())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let row: SqlUser = sqlx::query_as(
            "INSERT INTO users (username, email) VALUES ($1, $2) RETURNING id, username, email",
        )
        .bind(user.username())
        .bind(user.email())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                StoreError::DuplicateUsername(user.username().to_string())
            }
            e => backend(e),
        })?;

        Ok(row.into_user())
    }

    async fn create_tweet(&self, tweet: NewTweet) -> Result<Tweet, StoreError> {
        let row: SqlTweet = sqlx::query_as(
            "INSERT INTO tweets (status, user_id) VALUES ($1, $2) RETURNING id, status, user_id",
        )
        .bind(tweet.status())
        .bind(tweet.user_id())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                StoreError::UnknownUser(tweet.user_id())
            }
            e => backend(e),
        })?;

        Ok(row.into_tweet())
    }
}
