//! MongoDB implementation of ArtistRepository

use crate::error::{ArtistError, Result};
use crate::models::{Artist, UpdateArtist};
use crate::repository::ArtistRepository;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, to_bson};
use mongodb::{Collection, Database};
use tracing::instrument;
use uuid::Uuid;

/// MongoDB-based artist repository
#[derive(Clone)]
pub struct MongoArtistRepository {
    collection: Collection<Artist>,
}

impl MongoArtistRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("artists"),
        }
    }

    /// Index on name for the registry lookups
    pub async fn create_indexes(&self) -> Result<()> {
        use mongodb::IndexModel;

        let indexes = vec![IndexModel::builder().keys(doc! { "name": 1 }).build()];
        self.collection.create_indexes(indexes).await?;
        Ok(())
    }
}

#[async_trait]
impl ArtistRepository for MongoArtistRepository {
    #[instrument(skip(self, artist), fields(artist_name = %artist.name))]
    async fn insert(&self, artist: Artist) -> Result<Artist> {
        self.collection.insert_one(&artist).await?;
        Ok(artist)
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> Result<Option<Artist>> {
        // Anchored so "Sun" does not match "Sun Araw"
        let pattern = format!("^{}$", regex::escape(name.trim()));
        let filter = doc! { "name": { "$regex": pattern, "$options": "i" } };
        let artist = self.collection.find_one(filter).await?;
        Ok(artist)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Artist>> {
        let filter = doc! { "_id": to_bson(id)? };
        let artist = self.collection.find_one(filter).await?;
        Ok(artist)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Artist>> {
        let cursor = self.collection.find(doc! {}).await?;
        let mut artists: Vec<Artist> = cursor.try_collect().await?;
        // Case-insensitive ordering; the collection stays small enough to sort here
        artists.sort_by_key(|a| a.name.to_lowercase());
        Ok(artists)
    }

    #[instrument(skip(self, update))]
    async fn update(&self, id: Uuid, update: UpdateArtist) -> Result<Artist> {
        let filter = doc! { "_id": to_bson(&id)? };
        let existing = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or(ArtistError::NotFound(id))?;

        let mut updated = existing;
        updated.apply_update(update);

        self.collection.replace_one(filter, &updated).await?;

        tracing::info!(artist_id = %id, "Artist updated");
        Ok(updated)
    }
}
