use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::{
    handlers::{catalog, health, sessions},
    server::MedbillServer,
};

/// Create health check routes
pub fn health_routes() -> Router<MedbillServer> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/version", get(health::version_info))
}

/// Create catalog and coverage reference-data routes
pub fn catalog_routes() -> Router<MedbillServer> {
    Router::new()
        .route("/catalog/items", get(catalog::list_catalog_items))
        .route(
            "/catalog/coverage-categories",
            get(catalog::list_coverage_categories),
        )
}

/// Create billing session routes
pub fn session_routes() -> Router<MedbillServer> {
    Router::new()
        .route("/sessions", post(sessions::create_session))
        .route("/sessions/:session_id", get(sessions::get_session))
        .route("/sessions/:session_id/patient", put(sessions::update_patient))
        .route("/sessions/:session_id/items", post(sessions::add_item))
        .route(
            "/sessions/:session_id/items/:index",
            delete(sessions::remove_item),
        )
        .route("/sessions/:session_id/summary", get(sessions::get_summary))
}

/// Assemble all routes under the API prefix
pub fn create_routes() -> Router<MedbillServer> {
    Router::new().merge(health_routes()).nest(
        "/api/v1",
        Router::new().merge(catalog_routes()).merge(session_routes()),
    )
}
