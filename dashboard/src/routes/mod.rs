//! Route definitions for the Smart Soil Dashboard

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Auth routes
        .nest("/auth", auth_routes())
        // Protected routes - overview page
        .nest("/dashboard", dashboard_routes())
        // Protected routes - farmer roster
        .nest("/farmers", farmer_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .merge(
            Router::new()
                .route("/me", get(handlers::me))
                .route_layer(middleware::from_fn(auth_middleware)),
        )
}

/// Overview routes (protected)
fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/summary", get(handlers::get_dashboard_summary))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Farmer roster routes (protected)
fn farmer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_farmers).post(handlers::create_farmer))
        .route("/regions", get(handlers::list_regions))
        .route("/:farmer_id", get(handlers::get_farmer))
        .route("/:farmer_id/soil-tests", get(handlers::list_soil_tests))
        .route("/:farmer_id/soil-tests/:test_id", get(handlers::get_soil_test))
        .route("/:farmer_id/sms-logs", get(handlers::list_sms_logs))
        .route(
            "/:farmer_id/devices",
            get(handlers::list_devices).post(handlers::register_device),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}
