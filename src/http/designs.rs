//! Design routes
//!
//! CRUD endpoints for stored designs, mirroring the dashboard's API.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::{failure, ApiMessage};
use crate::app::AppState;
use crate::database::DesignPayload;

/// POST /designs
pub async fn create_design(
    State(state): State<AppState>,
    Json(payload): Json<DesignPayload>,
) -> Response {
    match state.designs.create(payload).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(ApiMessage::new("Design saved successfully")),
        )
            .into_response(),
        Err(err) => failure("Failed to save design", err),
    }
}

/// GET /designs
pub async fn list_designs(State(state): State<AppState>) -> Response {
    match state.designs.list().await {
        Ok(summaries) => (StatusCode::OK, Json(summaries)).into_response(),
        Err(err) => failure("Failed to fetch designs", err),
    }
}

/// GET /designs/{id}
pub async fn get_design(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.designs.get(&id).await {
        Ok(detail) => (StatusCode::OK, Json(detail)).into_response(),
        Err(err) => failure("Failed to fetch design", err),
    }
}

/// PUT /designs/{id}
pub async fn update_design(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<DesignPayload>,
) -> Response {
    match state.designs.update(&id, payload).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiMessage::new("Design updated successfully")),
        )
            .into_response(),
        Err(err) => failure("Failed to update design", err),
    }
}

/// DELETE /designs/{id}
pub async fn delete_design(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.designs.delete(&id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiMessage::new("Design deleted successfully")),
        )
            .into_response(),
        Err(err) => failure("Failed to delete design", err),
    }
}
