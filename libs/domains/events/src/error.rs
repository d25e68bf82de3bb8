//! Event domain error types

use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, EventError>;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event not found: {0}")]
    NotFound(Uuid),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("BSON serialization error: {0}")]
    BsonSerialization(#[from] mongodb::bson::ser::Error),

    #[error("Artist registry error: {0}")]
    Registry(String),
}

impl From<validator::ValidationErrors> for EventError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<domain_artists::ArtistError> for EventError {
    fn from(err: domain_artists::ArtistError) -> Self {
        Self::Registry(err.to_string())
    }
}

impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::NotFound(id) => AppError::NotFound(format!("Event not found: {}", id)),
            EventError::Validation(message) => AppError::BadRequest(message),
            EventError::Database(e) => AppError::InternalServerError(e.to_string()),
            EventError::BsonSerialization(e) => AppError::InternalServerError(e.to_string()),
            EventError::Registry(message) => AppError::InternalServerError(message),
        }
    }
}

impl axum::response::IntoResponse for EventError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
