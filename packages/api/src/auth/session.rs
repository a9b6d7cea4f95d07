//! Per-request session context.

use axum::{extract::FromRequestParts, http::request::Parts};
use store::{Store, User, UserId};
use tower_sessions::Session;

use crate::error::AppError;

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// The caller's session, extracted once per request.
///
/// Wraps the tower-sessions [`Session`] and exposes the two identity checks the
/// handlers and pages rely on, [`logged_in`](Self::logged_in) and
/// [`current_user`](Self::current_user), plus the writes that log a user in or out.
#[derive(Clone, Debug)]
pub struct AuthSession {
    session: Session,
}

impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = <Session as FromRequestParts<S>>::Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        Ok(Self { session })
    }
}

impl AuthSession {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// The id stored by the last successful login, if any.
    pub async fn user_id(&self) -> Result<Option<UserId>, AppError> {
        Ok(self.session.get(SESSION_USER_ID_KEY).await?)
    }

    pub async fn logged_in(&self) -> Result<bool, AppError> {
        Ok(self.user_id().await?.is_some())
    }

    /// Resolve the session's user id against the store.
    ///
    /// `None` when nobody is logged in or the stored id no longer matches a user.
    pub async fn current_user(&self, store: &dyn Store) -> Result<Option<User>, AppError> {
        let Some(id) = self.user_id().await? else {
            return Ok(None);
        };

        Ok(store.find_user(id).await?)
    }

    /// Record `user` as the caller's identity under a fresh session id.
    pub async fn log_in(&self, user: &User) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_USER_ID_KEY, user.id).await?;
        Ok(())
    }

    /// Destroy the session, both the stored record and the cookie.
    pub async fn log_out(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use store::{MemoryStore, NewUser};
    use tower_sessions::MemoryStore as SessionMemoryStore;

    fn session() -> AuthSession {
        let store = Arc::new(SessionMemoryStore::default());
        AuthSession::new(Session::new(None, store, None))
    }

    #[tokio::test]
    async fn test_fresh_session_is_anonymous() {
        let auth = session();
        let store = MemoryStore::new();

        assert!(!auth.logged_in().await.unwrap());
        assert!(auth.current_user(&store).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_log_in_and_out() {
        let auth = session();
        let store = MemoryStore::new();
        let alice = store
            .create_user(NewUser::new("alice", "a@x.com").unwrap())
            .await
            .unwrap();

        auth.log_in(&alice).await.unwrap();
        assert!(auth.logged_in().await.unwrap());
        assert_eq!(auth.user_id().await.unwrap(), Some(alice.id));
        assert_eq!(auth.current_user(&store).await.unwrap(), Some(alice));

        auth.log_out().await.unwrap();
        assert!(!auth.logged_in().await.unwrap());
    }

    #[tokio::test]
    async fn test_dangling_user_id_resolves_to_none() {
        let auth = session();
        let store = MemoryStore::new();
        let ghost = User {
            id: 7,
            username: "ghost".to_string(),
            email: "ghost@x.com".to_string(),
        };

        auth.log_in(&ghost).await.unwrap();
        assert!(auth.logged_in().await.unwrap());
        assert!(auth.current_user(&store).await.unwrap().is_none());
    }
}
