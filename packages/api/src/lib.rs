//! # API crate — server-side plumbing for Fwitter
//!
//! Everything the HTTP handlers in the `web` crate need besides rendering: settings,
//! the PostgreSQL-backed data store, session authentication and the error type that
//! turns infrastructure failures into responses.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | The `user_id` session key and the [`AuthSession`](auth::AuthSession) request extractor (`logged_in`, `current_user`, log in/out) |
//! | [`db`] | PostgreSQL connection pool (lazy `OnceCell` singleton), embedded migrations and [`PgStore`](db::PgStore) |
//! | [`error`] | [`AppError`], rendered as a bare `500` after logging |
//! | [`settings`] | Layered configuration: defaults, `config.toml`, `FWITTER_*` environment variables |
//!
//! ## Shared state
//!
//! [`AppState`] is the axum router state. It only holds the data store, as a trait
//! object so the same router serves both the Postgres and the in-memory backend.

use std::sync::Arc;

use store::Store;

pub mod auth;
pub mod db;
pub mod error;
pub mod settings;

pub use error::AppError;
pub use settings::Settings;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}
