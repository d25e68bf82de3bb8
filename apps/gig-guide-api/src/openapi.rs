//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gig Guide API",
        version = "0.1.0",
        description = "Community gig guide: event listings, venues, artists, and calendar export",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    nest(
        (path = "/api/events", api = domain_events::ApiDoc),
        (path = "/api/organisers", api = domain_events::OrganisersApiDoc),
        (path = "/api/venues", api = domain_venues::ApiDoc),
        (path = "/api/artists", api = domain_artists::ApiDoc),
        (path = "/api/admin", api = AdminApiDoc)
    ),
    tags(
        (name = "events", description = "Event listings, search, and calendar export"),
        (name = "organisers", description = "Organiser names derived from events"),
        (name = "venues", description = "Venue submissions and listing"),
        (name = "artists", description = "Artist registry and profiles"),
        (name = "admin", description = "Session-gated administration")
    )
)]
pub struct ApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::admin::login,
        crate::api::admin::logout,
        crate::api::admin::dashboard,
        crate::api::admin::update_event,
        crate::api::admin::delete_event,
        crate::api::admin::export_database,
    ),
    components(schemas(crate::api::admin::LoginRequest))
)]
pub struct AdminApiDoc;
