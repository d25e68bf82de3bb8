//! Venues Domain
//!
//! Venues are submitted explicitly through the public form and listed on
//! the venues page. Events refer to venues by free-text name only; no
//! venue record is ever derived from an event.

use utoipa::OpenApi;

mod error;
mod handlers;
mod models;
mod mongodb;
mod repository;
mod service;

pub use error::{Result, VenueError};
pub use handlers::venues_router;
pub use models::{CreateVenue, Venue};
pub use mongodb::MongoVenueRepository;
pub use repository::VenueRepository;
pub use service::VenueService;

/// OpenAPI documentation for the Venues API
#[derive(OpenApi)]
#[openapi(
    paths(handlers::list_venues, handlers::create_venue,),
    components(schemas(Venue, CreateVenue)),
    tags(
        (name = "venues", description = "Venue submissions and listing")
    )
)]
pub struct ApiDoc;
