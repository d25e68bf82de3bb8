//! API routes module
//!
//! Note: These are nested under /api by axum_helpers::create_router

pub mod admin;

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

pub fn routes(state: &AppState) -> Router {
    let admin_state = Arc::new(admin::AdminState {
        admin: state.config.admin.clone(),
        events: state.events.clone(),
        venues: state.venues.clone(),
        export_dir: state.config.export_dir.clone(),
    });

    Router::new()
        .nest(
            "/events",
            domain_events::events_router().with_state(state.events.clone()),
        )
        .nest(
            "/organisers",
            domain_events::organisers_router().with_state(state.events.clone()),
        )
        .nest(
            "/venues",
            domain_venues::venues_router().with_state(state.venues.clone()),
        )
        .nest(
            "/artists",
            domain_artists::artists_router().with_state(state.artists.clone()),
        )
        .nest("/admin", admin::router().with_state(admin_state))
}
