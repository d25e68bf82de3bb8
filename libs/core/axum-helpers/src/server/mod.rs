//! Server infrastructure module.
//!
//! - Router assembly with OpenAPI documentation
//! - Health endpoint
//! - Graceful shutdown

pub mod app;
pub mod health;

pub use app::{create_app, create_router, not_found, shutdown_signal};
pub use health::{HealthResponse, health_router};
