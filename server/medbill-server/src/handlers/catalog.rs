use axum::{extract::State, response::Json as ResponseJson};

use catalog_service::CatalogEntry;
use coverage_service::{CoverageCategory, CoverageOption};

use crate::server::MedbillServer;

/// List catalog items in display order
#[utoipa::path(
    get,
    path = "/api/v1/catalog/items",
    responses(
        (status = 200, description = "Catalog retrieved successfully", body = Vec<CatalogEntry>)
    ),
    tag = "catalog"
)]
pub async fn list_catalog_items(
    State(server): State<MedbillServer>,
) -> ResponseJson<Vec<CatalogEntry>> {
    ResponseJson(server.billing.catalog().entries().to_vec())
}

/// List selectable coverage categories
#[utoipa::path(
    get,
    path = "/api/v1/catalog/coverage-categories",
    responses(
        (status = 200, description = "Coverage categories retrieved successfully", body = Vec<CoverageOption>)
    ),
    tag = "catalog"
)]
pub async fn list_coverage_categories() -> ResponseJson<Vec<CoverageOption>> {
    ResponseJson(CoverageCategory::selectable())
}
