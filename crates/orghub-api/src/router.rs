//! Route definitions for the Orghub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(department_routes())
        .merge(employee_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Department CRUD, listing, and hierarchy views.
fn department_routes() -> Router<AppState> {
    Router::new()
        .route("/departments", get(handlers::department::list_departments))
        .route("/departments", post(handlers::department::create_department))
        .route(
            "/departments/{id}",
            get(handlers::department::get_department),
        )
        .route(
            "/departments/{id}",
            put(handlers::department::update_department),
        )
        .route(
            "/departments/{id}",
            delete(handlers::department::archive_department),
        )
}

/// Employee directory endpoints.
fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/employees", get(handlers::employee::list_employees))
        .route("/employees", post(handlers::employee::create_employee))
        .route("/employees/{id}", get(handlers::employee::get_employee))
        .route("/employees/{id}", put(handlers::employee::update_employee))
        .route(
            "/employees/{id}",
            delete(handlers::employee::delete_employee),
        )
}

/// Health check endpoint (no tenant scoping).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use http::Method;
    use tower_http::cors::{Any, AllowOrigin};

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(AllowOrigin::list(origins));
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    cors.max_age(std::time::Duration::from_secs(
        cors_config.max_age_seconds,
    ))
}
