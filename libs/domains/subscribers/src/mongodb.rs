//! MongoDB implementation of SubscriberRepository

use crate::error::Result;
use crate::models::Subscriber;
use crate::repository::SubscriberRepository;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};
use tracing::instrument;

/// MongoDB-based subscriber repository
#[derive(Clone)]
pub struct MongoSubscriberRepository {
    collection: Collection<Subscriber>,
}

impl MongoSubscriberRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("subscribers"),
        }
    }
}

#[async_trait]
impl SubscriberRepository for MongoSubscriberRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Subscriber>> {
        let cursor = self.collection.find(doc! {}).await?;
        let subscribers: Vec<Subscriber> = cursor.try_collect().await?;
        Ok(subscribers)
    }
}
