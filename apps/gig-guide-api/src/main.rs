use axum::http::header;
use axum::routing::get;
use axum_helpers::server::{create_app, health_router};
use axum_helpers::session::create_session_layer;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

const ROBOTS_TXT: &str = "User-agent: *\nDisallow: /admin\n";

async fn robots_txt() -> ([(header::HeaderName, &'static str); 1], &'static str) {
    ([(header::CONTENT_TYPE, "text/plain")], ROBOTS_TXT)
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.url);

    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;
    let db = mongo_client.database(&config.mongodb.database);

    info!(
        "Connected to MongoDB database: {}",
        config.mongodb.database
    );

    // Indexes back the start-ordered listings and the name lookups
    domain_events::MongoEventRepository::new(&db)
        .create_indexes()
        .await?;
    domain_artists::MongoArtistRepository::new(&db)
        .create_indexes()
        .await?;

    let state = AppState::new(config, mongo_client, &db);

    let api_routes = api::routes(&state);

    let app = axum_helpers::create_router::<openapi::ApiDoc>(api_routes)
        .merge(health_router(state.config.app.clone()))
        .route("/robots.txt", get(robots_txt))
        .layer(create_session_layer());

    info!(
        "Starting gig guide API on {}",
        state.config.server.address()
    );

    create_app(app, &state.config.server).await?;

    info!("Gig guide API shutdown complete");
    Ok(())
}
