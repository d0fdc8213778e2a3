//! HTTP server initialization and runtime setup.
//!
//! Owns the persistence lifecycle: the connection pool is opened once here,
//! migrations run, the click worker is spawned, and every repository and
//! service is constructed with the shared pool before the server starts.

use crate::config::Config;
use crate::domain::click_worker::run_click_worker;
use crate::infrastructure::persistence::{
    PgAffiliateLinkRepository, PgCategoryRepository, PgClickRepository, PgGuideRepository,
    PgSessionRepository, PgStatsRepository, PgTagRepository, PgUserRepository,
};
use crate::application::services::{
    AffiliateLinkService, AuthService, GuideService, StatsService, TaxonomyService,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes, in order: PostgreSQL pool, migrations, the background
/// click worker, shared state, and the Axum server. Shuts down gracefully
/// on ctrl-c.
///
/// # Errors
///
/// Returns an error if the database connection, migration run, or server
/// bind fails.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let pool = Arc::new(pool);

    let link_repository = Arc::new(PgAffiliateLinkRepository::new(pool.clone()));
    let click_repository = Arc::new(PgClickRepository::new(pool.clone()));
    let guide_repository = Arc::new(PgGuideRepository::new(pool.clone()));
    let category_repository = Arc::new(PgCategoryRepository::new(pool.clone()));
    let tag_repository = Arc::new(PgTagRepository::new(pool.clone()));
    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
    let session_repository = Arc::new(PgSessionRepository::new(pool.clone()));
    let stats_repository = Arc::new(PgStatsRepository::new(pool.clone()));

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);

    tokio::spawn(run_click_worker(
        click_rx,
        link_repository.clone(),
        click_repository.clone(),
    ));
    tracing::info!("Click worker started");

    let state = AppState {
        affiliate_links: Arc::new(AffiliateLinkService::new(
            link_repository,
            click_repository,
        )),
        guides: Arc::new(GuideService::new(guide_repository)),
        taxonomy: Arc::new(TaxonomyService::new(category_repository, tag_repository)),
        stats: Arc::new(StatsService::new(stats_repository)),
        auth: Arc::new(AuthService::new(
            user_repository,
            session_repository,
            config.session_signing_secret.clone(),
            config.session_ttl_hours,
            config.registration_secret.clone(),
        )),
        click_tx,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
