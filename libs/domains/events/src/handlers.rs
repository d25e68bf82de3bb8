//! HTTP handlers for the events API

use crate::error::EventError;
use crate::models::{CreateEvent, Event, EventQuery, EventView};
use crate::repository::EventRepository;
use crate::service::EventService;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Redirect};
use axum::routing::get;
use axum::{Json, Router};
use axum_helpers::ValidatedJson;
use calendar_export::{CalendarEntry, google_calendar_url, to_ics};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

/// Events router state
pub type EventsState<R> = Arc<EventService<R>>;

/// Create the events router
pub fn events_router<R: EventRepository + 'static>() -> Router<EventsState<R>> {
    Router::new()
        .route("/", get(list_current_events::<R>).post(create_event::<R>))
        .route("/past", get(list_past_events::<R>))
        .route("/{id}", get(get_event::<R>))
        .route("/{id}/calendar", get(event_calendar_link::<R>))
        .route("/{id}/ics", get(event_ics::<R>))
}

/// Router for the organisers listing, mounted separately so the path is
/// `/api/organisers` rather than living under `/api/events`.
pub fn organisers_router<R: EventRepository + 'static>() -> Router<EventsState<R>> {
    Router::new().route("/", get(list_organisers::<R>))
}

fn calendar_entry(event: &Event) -> CalendarEntry {
    CalendarEntry {
        uid: event.id.to_string(),
        summary: event.title.clone(),
        description: event.link.clone(),
        location: event.venue.clone(),
        start: event.start,
        end: event.end,
        stamp: event.updated_at,
    }
}

/// List current events
#[utoipa::path(
    get,
    path = "/",
    params(
        ("search" = Option<String>, Query, description = "Free-text search")
    ),
    responses(
        (status = 200, description = "Current events, soonest first", body = Vec<EventView>),
        (status = 500, description = "Internal error")
    ),
    tag = "events"
)]
#[instrument(skip(state))]
pub async fn list_current_events<R: EventRepository>(
    State(state): State<EventsState<R>>,
    Query(query): Query<EventQuery>,
) -> Result<Json<Vec<EventView>>, EventError> {
    let events = state.list_current(query.search.as_deref()).await?;
    Ok(Json(events))
}

/// List past events
#[utoipa::path(
    get,
    path = "/past",
    params(
        ("search" = Option<String>, Query, description = "Free-text search")
    ),
    responses(
        (status = 200, description = "Past events, most recent first", body = Vec<EventView>),
        (status = 500, description = "Internal error")
    ),
    tag = "events"
)]
#[instrument(skip(state))]
pub async fn list_past_events<R: EventRepository>(
    State(state): State<EventsState<R>>,
    Query(query): Query<EventQuery>,
) -> Result<Json<Vec<EventView>>, EventError> {
    let events = state.list_past(query.search.as_deref()).await?;
    Ok(Json(events))
}

/// Submit a new event
#[utoipa::path(
    post,
    path = "/",
    request_body = CreateEvent,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal error")
    ),
    tag = "events"
)]
#[instrument(skip(state, create), fields(title = %create.title))]
pub async fn create_event<R: EventRepository>(
    State(state): State<EventsState<R>>,
    ValidatedJson(create): ValidatedJson<CreateEvent>,
) -> Result<impl IntoResponse, EventError> {
    let event = state.create(create).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// Get event by ID, with resolved artist links
#[utoipa::path(
    get,
    path = "/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = EventView),
        (status = 404, description = "Event not found"),
        (status = 500, description = "Internal error")
    ),
    tag = "events"
)]
#[instrument(skip(state))]
pub async fn get_event<R: EventRepository>(
    State(state): State<EventsState<R>>,
    Path(id): Path<Uuid>,
) -> Result<Json<EventView>, EventError> {
    let view = state.view(&id).await?;
    Ok(Json(view))
}

/// Redirect to a pre-filled Google Calendar form for the event
#[utoipa::path(
    get,
    path = "/{id}/calendar",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 303, description = "Redirect to Google Calendar"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
#[instrument(skip(state))]
pub async fn event_calendar_link<R: EventRepository>(
    State(state): State<EventsState<R>>,
    Path(id): Path<Uuid>,
) -> Result<Redirect, EventError> {
    let event = state.get(&id).await?;
    let url = google_calendar_url(&calendar_entry(&event));
    Ok(Redirect::to(&url))
}

/// Download the event as an iCalendar file
#[utoipa::path(
    get,
    path = "/{id}/ics",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "iCalendar document", content_type = "text/calendar"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
#[instrument(skip(state))]
pub async fn event_ics<R: EventRepository>(
    State(state): State<EventsState<R>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, EventError> {
    let event = state.get(&id).await?;
    let ics = to_ics(&calendar_entry(&event));

    let headers = [
        (header::CONTENT_TYPE, "text/calendar; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}.ics\"", event.id),
        ),
    ];
    Ok((headers, ics))
}

/// Distinct organiser names across all events
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Organiser names, sorted", body = Vec<String>),
        (status = 500, description = "Internal error")
    ),
    tag = "organisers"
)]
#[instrument(skip(state))]
pub async fn list_organisers<R: EventRepository>(
    State(state): State<EventsState<R>>,
) -> Result<Json<Vec<String>>, EventError> {
    let organisers = state.distinct_organisers().await?;
    Ok(Json(organisers))
}
