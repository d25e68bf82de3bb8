//! Artist domain error types

use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, ArtistError>;

#[derive(Debug, Error)]
pub enum ArtistError {
    #[error("Artist not found: {0}")]
    NotFound(Uuid),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("BSON serialization error: {0}")]
    BsonSerialization(#[from] mongodb::bson::ser::Error),
}

impl From<validator::ValidationErrors> for ArtistError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<ArtistError> for AppError {
    fn from(err: ArtistError) -> Self {
        match err {
            ArtistError::NotFound(id) => AppError::NotFound(format!("Artist not found: {}", id)),
            ArtistError::Validation(message) => AppError::BadRequest(message),
            ArtistError::Database(e) => AppError::InternalServerError(e.to_string()),
            ArtistError::BsonSerialization(e) => AppError::InternalServerError(e.to_string()),
        }
    }
}

impl axum::response::IntoResponse for ArtistError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
