//! Smart Soil Dashboard - admin backend
//!
//! Serves the staff dashboard: farmer roster views, interpreted soil test
//! reports, SMS history and device registration. All data lives in the
//! soil platform API; this service adds the analytics on top.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;

pub use config::Config;
pub use external::SoilApiClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub api: SoilApiClient,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(api: SoilApiClient, config: Config) -> Self {
        Self {
            api,
            config: Arc::new(config),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Smart Soil Dashboard API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
