//! Subscriber domain error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SubscriberError>;

#[derive(Debug, Error)]
pub enum SubscriberError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
}
