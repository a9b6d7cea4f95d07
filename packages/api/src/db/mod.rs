//! # Database module — PostgreSQL pool, migrations and the Postgres-backed store
//!
//! ## Design
//!
//! The pool is a **lazy, process-wide singleton** backed by a [`tokio::sync::OnceCell`].
//! The first call to [`get_pool`] connects using the `[database]` settings and caches
//! the pool for all subsequent callers, so the data store and the session store share
//! one set of connections.
//!
//! Schema changes live in `migrations/` as reversible sqlx migrations and are embedded
//! into the binary through [`MIGRATOR`]:
//!
//! | Version | Up | Down |
//! |---------|----|------|
//! | `create_users` | `users (id, username, email)` | drop `users` |
//! | `create_tweets` | `tweets (id, username, status)` | drop `tweets` |
//! | `modify_tweets` | drop `tweets.username`, add `tweets.user_id` referencing `users` | re-add `username`, drop `user_id` |
//! | `unique_usernames` | unique index on `users.username` | drop the index |
//!
//! ## Re-exports
//!
//! - [`get_pool`] — returns `&'static PgPool`, initialising it on first use.
//! - [`PgStore`] — the [`store::Store`] implementation used in production.

mod pool;
mod postgres;

pub use pool::{get_pool, run_migrations, MIGRATOR};
pub use postgres::PgStore;
