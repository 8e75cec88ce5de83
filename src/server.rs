//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, gateway client setup and the
//! Axum server lifecycle.

use crate::application::services::ProfileService;
use crate::config::Config;
use crate::domain::gateway::PaymentGateway;
use crate::domain::repositories::CampaignRepository;
use crate::infrastructure::gateway::RazorpayClient;
use crate::infrastructure::persistence::PgCampaignRepository;
use crate::infrastructure::profiles::load_profiles;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Profile data
/// - Payment gateway client
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Profile data cannot be loaded
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let profiles = load_profiles(&config.profiles_path)?;
    tracing::info!(count = profiles.len(), "Profiles loaded");

    let gateway: Arc<dyn PaymentGateway> = Arc::new(
        RazorpayClient::new(
            &config.razorpay_api_base,
            &config.razorpay_key_id,
            &config.razorpay_key_secret,
        )
        .context("Failed to build payment gateway client")?,
    );

    let campaign_repository: Arc<dyn CampaignRepository> =
        Arc::new(PgCampaignRepository::new(Arc::new(pool)));

    let state = AppState::new(
        campaign_repository,
        gateway,
        ProfileService::new(profiles),
        &config.razorpay_key_id,
        &config.razorpay_key_secret,
        &config.payment_currency,
    );

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
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
