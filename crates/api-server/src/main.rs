//! API server for the task board
//!
//! Serves the task and category REST API over a JSON file store.

mod config;
mod routes;
mod seed;
mod state;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::state::AppState;

fn cors_layer(config: &ServerConfig) -> anyhow::Result<CorsLayer> {
    match (&config.client_origin, config.environment.is_production()) {
        (Some(origin), true) => {
            let origin = HeaderValue::from_str(origin)
                .with_context(|| format!("CLIENT_URL is not a valid header value: {origin}"))?;
            Ok(CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true))
        }
        _ => Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api_server=debug,taskboard_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        environment = %config.environment,
        "Using data directory: {:?}",
        config.data_dir
    );

    let app_state = AppState::new(config.data_dir.clone())
        .await
        .context("Failed to initialize application state")?;

    if config.seed {
        seed::seed_if_empty(&app_state)
            .await
            .context("Failed to seed store")?;
    }

    let app = routes::router()
        .with_state(app_state)
        .layer(cors_layer(&config)?)
        .layer(TraceLayer::new_for_http());

    let addr = config.socket_addr();
    tracing::info!("REST API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
