mod config;
mod handlers;
mod models;

use std::net::SocketAddr;

use axum::{routing::any, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::handlers::{greeting::greeting, health::health_check};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("FATAL ERROR: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ms_test=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // .env file is optional; system environment wins otherwise.
    let _ = dotenvy::dotenv();

    let config = config::Config::from_env();

    let app = create_router();

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("ms-test microservice running on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Exact-match routing only: `/health/`, `/Health` and every other path
    // fall through to the greeting handler.
    Router::new()
        .route("/health", any(health_check))
        .fallback(greeting)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
