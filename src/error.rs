//! Error types for the RoomViz backend
//!
//! All errors use thiserror for structured error handling.
//! The HTTP layer maps these onto response statuses.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Design not found: {0}")]
    DesignNotFound(String),

    #[error("{0}")]
    Validation(String),
}

impl AppError {
    /// Validation failure for a request body missing one of the
    /// required design fields.
    pub fn missing_fields() -> Self {
        AppError::Validation("Missing required fields".to_string())
    }

    /// Validation failure for an empty design id.
    pub fn missing_id() -> Self {
        AppError::Validation("Design ID is required".to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
