//! HTTP handlers for the venues API

use crate::error::VenueError;
use crate::models::{CreateVenue, Venue};
use crate::repository::VenueRepository;
use crate::service::VenueService;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_helpers::ValidatedJson;
use std::sync::Arc;
use tracing::instrument;

pub type VenuesState<R> = Arc<VenueService<R>>;

/// Create the venues router
pub fn venues_router<R: VenueRepository + 'static>() -> Router<VenuesState<R>> {
    Router::new().route("/", get(list_venues::<R>).post(create_venue::<R>))
}

/// List all venues
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "All venues, sorted by name", body = Vec<Venue>),
        (status = 500, description = "Internal error")
    ),
    tag = "venues"
)]
#[instrument(skip(state))]
pub async fn list_venues<R: VenueRepository>(
    State(state): State<VenuesState<R>>,
) -> Result<Json<Vec<Venue>>, VenueError> {
    let venues = state.list().await?;
    Ok(Json(venues))
}

/// Submit a new venue
#[utoipa::path(
    post,
    path = "/",
    request_body = CreateVenue,
    responses(
        (status = 201, description = "Venue created", body = Venue),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal error")
    ),
    tag = "venues"
)]
#[instrument(skip(state, create), fields(venue_name = %create.name))]
pub async fn create_venue<R: VenueRepository>(
    State(state): State<VenuesState<R>>,
    ValidatedJson(create): ValidatedJson<CreateVenue>,
) -> Result<impl IntoResponse, VenueError> {
    let venue = state.create(create).await?;
    Ok((StatusCode::CREATED, Json(venue)))
}
