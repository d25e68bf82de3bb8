//! # Axum Helpers
//!
//! Shared plumbing for the gig guide Axum services.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured JSON error responses
//! - **[`extractors`]**: Custom extractors (UUID path, validated JSON)
//! - **[`server`]**: Router assembly, health endpoints, graceful shutdown
//! - **[`session`]**: Cookie-session admin authentication

pub mod errors;
pub mod extractors;
pub mod server;
pub mod session;

pub use errors::{AppError, ErrorResponse};
pub use extractors::{UuidPath, ValidatedJson};
pub use server::{
    HealthResponse, create_app, create_router, health_router, not_found, shutdown_signal,
};
pub use session::{AdminSession, create_session_layer, is_admin, verify_password};
