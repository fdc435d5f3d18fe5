//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;

use payment_groups_types::{
    AppError, CreatePaymentGroupRequest, PaymentGroupId, PaymentGroupRepository,
    UpdatePaymentGroupRequest,
};

use crate::PaymentService;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState<R: PaymentGroupRepository> {
    pub service: PaymentService<R>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<payment_groups_types::RepoError> for ApiError {
    fn from(err: payment_groups_types::RepoError) -> Self {
        ApiError(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(AppError::BadRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Request failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

fn parse_group_id(raw: &str) -> Result<PaymentGroupId, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid payment group ID: {}", raw)))
}

fn not_found(id: PaymentGroupId) -> ApiError {
    AppError::NotFound(format!("Payment group {}", id)).into()
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// OpenAPI document for this API.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// List all payment groups.
#[tracing::instrument(skip(state))]
pub async fn list_groups<R: PaymentGroupRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let groups = state.service.list_groups().await?;
    tracing::debug!(count = groups.len(), "Listed payment groups");
    Ok(Json(groups))
}

/// Get payment group by ID.
#[tracing::instrument(skip(state), fields(group_id = %id))]
pub async fn get_group<R: PaymentGroupRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let group_id = parse_group_id(&id)?;

    match state.service.get_group(group_id).await? {
        Some(group) => Ok(Json(group)),
        None => Err(not_found(group_id)),
    }
}

#[tracing::instrument(skip(state, payload))]
pub async fn create_group<R: PaymentGroupRepository>(
    State(state): State<Arc<AppState<R>>>,
    payload: Result<Json<CreatePaymentGroupRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let group = state.service.create_group(req).await?;
    tracing::info!(group_id = %group.id, "Created payment group");
    Ok((StatusCode::CREATED, Json(group)))
}

/// Update a payment group.
#[tracing::instrument(skip(state, payload), fields(group_id = %id))]
pub async fn update_group<R: PaymentGroupRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePaymentGroupRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let group_id = parse_group_id(&id)?;
    let Json(req) = payload?;

    match state.service.update_group(group_id, req).await? {
        Some(group) => Ok(Json(group)),
        None => Err(not_found(group_id)),
    }
}

/// Delete a payment group.
#[tracing::instrument(skip(state), fields(group_id = %id))]
pub async fn remove_group<R: PaymentGroupRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let group_id = parse_group_id(&id)?;

    if state.service.remove_group(group_id).await? {
        tracing::info!("Removed payment group");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(group_id))
    }
}
