//! Errors raised by the data store and by entity construction.

use thiserror::Error;

use crate::models::UserId;

/// Failure of a [`Store`](crate::Store) operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A user with this username already exists.
    #[error("username already taken: {0}")]
    DuplicateUsername(String),

    /// A tweet referenced a user id with no matching row.
    #[error("no user with id {0}")]
    UnknownUser(UserId),

    #[error("backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Rejected input when building a [`NewUser`](crate::NewUser) or [`NewTweet`](crate::NewTweet).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("username must not be blank")]
    BlankUsername,

    #[error("email must not be blank")]
    BlankEmail,

    #[error("status must not be blank")]
    BlankStatus,
}
