//! Events Domain
//!
//! The heart of the gig guide: public event submission, the current/past
//! visibility split, free-text search, calendar export endpoints, and the
//! digest query the subscriber mailer runs.
//!
//! Event times are local wall-clock times stored as fixed-width ISO
//! strings; "now" is resolved in the community timezone by the
//! [`visibility::VisibilityPolicy`].

use utoipa::OpenApi;

mod error;
mod handlers;
mod models;
mod mongodb;
mod repository;
mod service;
mod visibility;

pub use error::{EventError, Result};
pub use handlers::{EventsState, events_router, organisers_router};
pub use models::{CreateEvent, Event, EventQuery, EventView, UpdateEvent, iso_local, split_list};
pub use mongodb::MongoEventRepository;
pub use repository::EventRepository;
pub use service::EventService;
pub use visibility::{CutoffField, VisibilityPolicy};

/// OpenAPI documentation for the Events API
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_current_events,
        handlers::list_past_events,
        handlers::create_event,
        handlers::get_event,
        handlers::event_calendar_link,
        handlers::event_ics,
    ),
    components(schemas(Event, EventView, CreateEvent, UpdateEvent)),
    tags(
        (name = "events", description = "Event listings, search, and calendar export")
    )
)]
pub struct ApiDoc;

/// OpenAPI documentation for the organisers listing, which lives beside
/// the events routes rather than under them
#[derive(OpenApi)]
#[openapi(
    paths(handlers::list_organisers),
    tags(
        (name = "organisers", description = "Organiser names derived from events")
    )
)]
pub struct OrganisersApiDoc;
