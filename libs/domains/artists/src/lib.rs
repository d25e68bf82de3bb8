//! Artists Domain
//!
//! The artist registry grows implicitly: whenever an event listing names an
//! artist the registry has not seen, a bare record is created for them.
//! Artists (or anyone) can then flesh out the record through the public
//! edit endpoint. Records are never deleted automatically.
//!
//! Matching between event listings and registry records is a soft,
//! case-insensitive name match. There are no foreign keys.

use utoipa::OpenApi;

mod error;
mod handlers;
mod models;
mod mongodb;
mod registry;
mod repository;

pub use error::{ArtistError, Result};
pub use handlers::artists_router;
pub use models::{Artist, ArtistLink, UpdateArtist};
pub use mongodb::MongoArtistRepository;
pub use registry::ArtistRegistry;
pub use repository::ArtistRepository;

/// OpenAPI documentation for the Artists API
#[derive(OpenApi)]
#[openapi(
    paths(handlers::list_artists, handlers::get_artist, handlers::update_artist,),
    components(schemas(Artist, ArtistLink, UpdateArtist)),
    tags(
        (name = "artists", description = "Artist registry and profiles")
    )
)]
pub struct ApiDoc;
