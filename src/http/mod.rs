//! HTTP surface
//!
//! Thin route handlers over the design service. Each route performs
//! one service call and maps the outcome onto a JSON response.

pub mod designs;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::app::AppState;
use crate::error::AppError;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/designs",
            get(designs::list_designs).post(designs::create_design),
        )
        .route(
            "/designs/{id}",
            get(designs::get_design)
                .put(designs::update_design)
                .delete(designs::delete_design),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness probe
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok", "service": "roomviz" }))
}

/// Confirmation body for successful writes
#[derive(Serialize)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Error body shared by all failure responses.
///
/// `message` describes the failed operation; `error` carries the
/// underlying failure's description verbatim for storage faults.
#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Map a service failure onto the response contract.
pub(crate) fn failure(context: &str, err: AppError) -> Response {
    let (status, body) = match err {
        AppError::Validation(message) => (
            StatusCode::BAD_REQUEST,
            ErrorBody {
                message,
                error: None,
            },
        ),
        AppError::DesignNotFound(_) => (
            StatusCode::NOT_FOUND,
            ErrorBody {
                message: "Design not found".to_string(),
                error: None,
            },
        ),
        other => {
            tracing::error!("{}: {}", context, other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    message: context.to_string(),
                    error: Some(other.to_string()),
                },
            )
        }
    };

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let response = failure("Failed to save design", AppError::missing_fields());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = failure(
            "Failed to fetch design",
            AppError::DesignNotFound("abc".to_string()),
        );
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_faults_map_to_500() {
        let response = failure(
            "Failed to fetch designs",
            AppError::Database(sqlx::Error::PoolClosed),
        );
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
