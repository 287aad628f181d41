// SPDX-License-Identifier: MIT

//! OctoFit Dashboard server
//!
//! Serves the fitness dashboard pages (users, activities, teams,
//! leaderboard, workouts) backed by the OctoFit REST API.

use octofit_dashboard::{config::Config, services::ApiClient, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env();
    tracing::info!(
        port = config.port,
        backend = %config.api_base_url,
        "Starting OctoFit Dashboard"
    );

    // The backend origin is injected once here; nothing reads it ambiently
    let api = ApiClient::new(config.api_base_url.clone());

    let state = Arc::new(AppState {
        config: config.clone(),
        api,
    });

    let app = octofit_dashboard::routes::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("octofit_dashboard=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
