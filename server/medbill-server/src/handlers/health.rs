use axum::{extract::State, response::Json as ResponseJson};
use serde::Serialize;
use std::collections::HashMap;

use crate::server::MedbillServer;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub checks: HashMap<String, String>,
}

/// Version information response
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub name: String,
    pub version: String,
    pub features: Vec<String>,
}

/// Health check handler
pub async fn health_check(State(server): State<MedbillServer>) -> ResponseJson<HealthResponse> {
    let mut checks = HashMap::new();

    checks.insert(
        "catalog".to_string(),
        format!("{} entries loaded", server.billing.catalog().len()),
    );
    checks.insert(
        "sessions".to_string(),
        format!("{} active", server.sessions.read().await.len()),
    );

    ResponseJson(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks,
    })
}

/// Version information handler
pub async fn version_info(State(server): State<MedbillServer>) -> ResponseJson<VersionResponse> {
    ResponseJson(VersionResponse {
        name: server.config.name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        features: vec![
            "catalog-lookup".to_string(),
            "coverage-discounts".to_string(),
            "billing-sessions".to_string(),
        ],
    })
}
