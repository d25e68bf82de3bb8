//! Venue domain error types

use axum_helpers::AppError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, VenueError>;

#[derive(Debug, Error)]
pub enum VenueError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("BSON serialization error: {0}")]
    BsonSerialization(#[from] mongodb::bson::ser::Error),
}

impl From<validator::ValidationErrors> for VenueError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<VenueError> for AppError {
    fn from(err: VenueError) -> Self {
        match err {
            VenueError::Validation(message) => AppError::BadRequest(message),
            VenueError::Database(e) => AppError::InternalServerError(e.to_string()),
            VenueError::BsonSerialization(e) => AppError::InternalServerError(e.to_string()),
        }
    }
}

impl axum::response::IntoResponse for VenueError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
