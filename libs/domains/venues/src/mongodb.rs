//! MongoDB implementation of VenueRepository

use crate::error::Result;
use crate::models::Venue;
use crate::repository::VenueRepository;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};
use tracing::instrument;

/// MongoDB-based venue repository
#[derive(Clone)]
pub struct MongoVenueRepository {
    collection: Collection<Venue>,
}

impl MongoVenueRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("venues"),
        }
    }
}

#[async_trait]
impl VenueRepository for MongoVenueRepository {
    #[instrument(skip(self, venue), fields(venue_name = %venue.name))]
    async fn create(&self, venue: Venue) -> Result<Venue> {
        self.collection.insert_one(&venue).await?;
        Ok(venue)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Venue>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "name": 1 })
            .await?;
        let venues: Vec<Venue> = cursor.try_collect().await?;
        Ok(venues)
    }
}
