//! Shared application state wired up once at startup.

use domain_artists::{ArtistRegistry, MongoArtistRepository};
use domain_events::{EventService, MongoEventRepository};
use domain_venues::{MongoVenueRepository, VenueService};
use mongodb::{Client, Database};
use std::sync::Arc;

use crate::config::Config;

/// Everything the routers need, built from one MongoDB connection.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub mongo_client: Client,
    pub events: Arc<EventService<MongoEventRepository>>,
    pub venues: Arc<VenueService<MongoVenueRepository>>,
    pub artists: Arc<ArtistRegistry>,
}

impl AppState {
    pub fn new(config: Config, mongo_client: Client, db: &Database) -> Self {
        let registry = Arc::new(ArtistRegistry::new(Arc::new(MongoArtistRepository::new(db))));

        let events = Arc::new(
            EventService::new(MongoEventRepository::new(db), config.visibility.clone())
                .with_registry(registry.clone()),
        );
        let venues = Arc::new(VenueService::new(MongoVenueRepository::new(db)));

        Self {
            config,
            mongo_client,
            events,
            venues,
            artists: registry,
        }
    }
}
