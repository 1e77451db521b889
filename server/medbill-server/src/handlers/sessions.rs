use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json as ResponseJson,
    Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use billing_service::{BillingSummary, LineItem};
use coverage_service::CoverageCategory;

use crate::error::{ApiError, ApiResult};
use crate::server::{BillingSession, MedbillServer};

/// Open Billing Session Request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateSessionRequest {
    /// Free-text patient identifier (hospital number)
    #[serde(default)]
    pub patient_ref: Option<String>,
    /// Coverage category; defaults to unspecified
    #[serde(default)]
    pub category: Option<CoverageCategory>,
}

/// Update Patient Info Request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePatientRequest {
    pub patient_ref: Option<String>,
    pub category: Option<CoverageCategory>,
}

/// Add Line Item Request
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddItemRequest {
    pub item_id: String,
    pub quantity: u32,
}

/// Billed line with its display total
#[derive(Debug, Serialize, ToSchema)]
pub struct LineItemView {
    pub catalog_id: String,
    pub name: String,
    pub unit_price: Decimal,
    pub unit: String,
    pub quantity: u32,
    pub line_total: Decimal,
}

impl From<&LineItem> for LineItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            catalog_id: item.catalog_id.clone(),
            name: item.name.clone(),
            unit_price: item.unit_price,
            unit: item.unit.clone(),
            quantity: item.quantity,
            line_total: item.line_total(),
        }
    }
}

/// Billing session with its freshly recomputed summary
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionView {
    pub id: Uuid,
    pub patient_ref: String,
    pub items: Vec<LineItemView>,
    pub summary: BillingSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Build the client view of a session
///
/// The summary is recomputed here, on every read, so the view always
/// reflects the ledger state after the mutation that produced it.
fn session_view(server: &MedbillServer, session: &BillingSession) -> SessionView {
    SessionView {
        id: session.id,
        patient_ref: session.patient_ref.clone(),
        items: session.ledger.items().iter().map(LineItemView::from).collect(),
        summary: server.billing.summarize(&session.ledger, session.category),
        created_at: session.created_at,
        updated_at: session.updated_at,
    }
}

/// Open a new billing session
#[utoipa::path(
    post,
    path = "/api/v1/sessions",
    request_body = CreateSessionRequest,
    responses(
        (status = 201, description = "Billing session opened", body = SessionView)
    ),
    tag = "sessions"
)]
pub async fn create_session(
    State(server): State<MedbillServer>,
    Json(payload): Json<CreateSessionRequest>,
) -> ApiResult<(StatusCode, ResponseJson<SessionView>)> {
    let session = BillingSession::open(
        payload.patient_ref.unwrap_or_default(),
        payload.category.unwrap_or_default(),
    );

    info!(session_id = %session.id, "billing session opened");

    let view = session_view(&server, &session);
    server.sessions.write().await.insert(session.id, session);

    Ok((StatusCode::CREATED, ResponseJson(view)))
}

/// Get a billing session with its current summary
#[utoipa::path(
    get,
    path = "/api/v1/sessions/{session_id}",
    responses(
        (status = 200, description = "Session retrieved successfully", body = SessionView),
        (status = 404, description = "Session not found")
    ),
    params(("session_id" = Uuid, Path, description = "Billing session id")),
    tag = "sessions"
)]
pub async fn get_session(
    State(server): State<MedbillServer>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<ResponseJson<SessionView>> {
    let sessions = server.sessions.read().await;
    let session = sessions
        .get(&session_id)
        .ok_or_else(|| ApiError::not_found("billing session"))?;

    Ok(ResponseJson(session_view(&server, session)))
}

/// Update patient identifier and/or coverage category
#[utoipa::path(
    put,
    path = "/api/v1/sessions/{session_id}/patient",
    request_body = UpdatePatientRequest,
    responses(
        (status = 200, description = "Patient info updated", body = SessionView),
        (status = 404, description = "Session not found")
    ),
    params(("session_id" = Uuid, Path, description = "Billing session id")),
    tag = "sessions"
)]
pub async fn update_patient(
    State(server): State<MedbillServer>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<UpdatePatientRequest>,
) -> ApiResult<ResponseJson<SessionView>> {
    let mut sessions = server.sessions.write().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or_else(|| ApiError::not_found("billing session"))?;

    if let Some(patient_ref) = payload.patient_ref {
        session.patient_ref = patient_ref;
    }
    if let Some(category) = payload.category {
        session.category = category;
    }
    session.touch();

    Ok(ResponseJson(session_view(&server, session)))
}

/// Add a catalog item to the session ledger
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{session_id}/items",
    request_body = AddItemRequest,
    responses(
        (status = 200, description = "Line item added", body = SessionView),
        (status = 400, description = "Invalid quantity"),
        (status = 404, description = "Session or catalog item not found")
    ),
    params(("session_id" = Uuid, Path, description = "Billing session id")),
    tag = "sessions"
)]
pub async fn add_item(
    State(server): State<MedbillServer>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<AddItemRequest>,
) -> ApiResult<ResponseJson<SessionView>> {
    let mut sessions = server.sessions.write().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or_else(|| ApiError::not_found("billing session"))?;

    let item = server
        .billing
        .add_item(&mut session.ledger, &payload.item_id, payload.quantity)?;
    session.touch();

    info!(
        session_id = %session_id,
        item_id = %item.catalog_id,
        quantity = item.quantity,
        "line item added to session"
    );

    Ok(ResponseJson(session_view(&server, session)))
}

/// Remove the line item at a position
#[utoipa::path(
    delete,
    path = "/api/v1/sessions/{session_id}/items/{index}",
    responses(
        (status = 200, description = "Line item removed", body = SessionView),
        (status = 400, description = "Index out of range"),
        (status = 404, description = "Session not found")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Billing session id"),
        ("index" = usize, Path, description = "Zero-based line position")
    ),
    tag = "sessions"
)]
pub async fn remove_item(
    State(server): State<MedbillServer>,
    Path((session_id, index)): Path<(Uuid, usize)>,
) -> ApiResult<ResponseJson<SessionView>> {
    let mut sessions = server.sessions.write().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or_else(|| ApiError::not_found("billing session"))?;

    let removed = server.billing.remove_item(&mut session.ledger, index)?;
    session.touch();

    info!(
        session_id = %session_id,
        item_id = %removed.catalog_id,
        index,
        "line item removed from session"
    );

    Ok(ResponseJson(session_view(&server, session)))
}

/// Get the current bill summary for a session
#[utoipa::path(
    get,
    path = "/api/v1/sessions/{session_id}/summary",
    responses(
        (status = 200, description = "Summary computed", body = BillingSummary),
        (status = 404, description = "Session not found")
    ),
    params(("session_id" = Uuid, Path, description = "Billing session id")),
    tag = "sessions"
)]
pub async fn get_summary(
    State(server): State<MedbillServer>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<ResponseJson<BillingSummary>> {
    let sessions = server.sessions.read().await;
    let session = sessions
        .get(&session_id)
        .ok_or_else(|| ApiError::not_found("billing session"))?;

    Ok(ResponseJson(
        server.billing.summarize(&session.ledger, session.category),
    ))
}
