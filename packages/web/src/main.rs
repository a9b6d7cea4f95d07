use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use api::settings::{self, Backend};
use api::{AppState, Settings};
use axum::Router;
use store::{MemoryStore, Store};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions::cookie::SameSite;
use tower_sessions::session_store::ExpiredDeletion;
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};
use tower_sessions_sqlx_store::PostgresStore;
use tracing_subscriber::EnvFilter;

mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::new().context("Failed to load settings")?;

    let store: Arc<dyn Store> = match settings.database.backend {
        Backend::Postgres => {
            let pool = api::db::get_pool(&settings.database)
                .await
                .context("Failed to connect to database")?;
            api::db::run_migrations(pool)
                .await
                .context("Failed to run migrations")?;
            Arc::new(api::db::PgStore::new(pool.clone()))
        }
        Backend::Memory => {
            tracing::warn!("Using the in-memory data store, nothing survives a restart");
            Arc::new(MemoryStore::new())
        }
    };

    let router = routes::router(AppState::new(store))
        .fallback_service(ServeDir::new(&settings.server.public_dir));

    // Session layer configuration
    let router = match settings.session.backend {
        Backend::Postgres => {
            let pool = api::db::get_pool(&settings.database)
                .await
                .context("Failed to connect to database")?;
            let session_store = PostgresStore::new(pool.clone());
            session_store
                .migrate()
                .await
                .context("Failed to create session table")?;

            tokio::task::spawn(
                session_store
                    .clone()
                    .continuously_delete_expired(Duration::from_secs(60)),
            );

            with_sessions(router, session_store, &settings.session)
        }
        Backend::Memory => {
            let session_store = tower_sessions::MemoryStore::default();
            with_sessions(router, session_store, &settings.session)
        }
    };

    let router = router.layer(TraceLayer::new_for_http());

    let addr = settings.server.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;
    Ok(())
}

fn with_sessions<S>(router: Router, session_store: S, settings: &settings::Session) -> Router
where
    S: SessionStore + Clone,
{
    let layer = SessionManagerLayer::new(session_store)
        .with_name(settings.cookie_name.clone())
        .with_secure(settings.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            settings.expiry_days,
        )));

    router.layer(layer)
}
