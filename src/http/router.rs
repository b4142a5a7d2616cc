//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! static page serving, and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        .route("/users", get(handlers::list_users))
        .route("/mean_time_weekday/{user_id}", get(handlers::mean_time_weekday))
        .route("/presence_weekday/{user_id}", get(handlers::presence_weekday))
        .route(
            "/user_available_average/{user_id}",
            get(handlers::user_available_average),
        );

    let static_pages = ServeDir::new(state.config.data.static_dir.clone());

    // Combine all routes
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_v1)
        .nest_service("/static", static_pages)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_router_creation() {
        let state = AppState::new(AppConfig::default());
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
