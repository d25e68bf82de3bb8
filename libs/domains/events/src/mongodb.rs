//! MongoDB implementation of EventRepository

use crate::error::{EventError, Result};
use crate::models::{Event, UpdateEvent, iso_local};
use crate::repository::EventRepository;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc, to_bson};
use mongodb::{Collection, Database};
use tracing::instrument;
use uuid::Uuid;

/// Fields covered by free-text search.
const SEARCH_FIELDS: [&str; 5] = ["title", "organisers", "venue", "tags", "artists"];

/// Fields covered by subscriber digest terms.
const DIGEST_FIELDS: [&str; 4] = ["title", "venue", "tags", "artists"];

/// MongoDB-based event repository
#[derive(Clone)]
pub struct MongoEventRepository {
    collection: Collection<Event>,
}

impl MongoEventRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("events"),
        }
    }

    /// Indexes for the range scans and title lookups
    pub async fn create_indexes(&self) -> Result<()> {
        use mongodb::IndexModel;

        let indexes = vec![
            IndexModel::builder().keys(doc! { "start": 1 }).build(),
            IndexModel::builder().keys(doc! { "title": 1 }).build(),
        ];

        self.collection.create_indexes(indexes).await?;
        Ok(())
    }

    /// Case-insensitive substring constraint over the searchable fields.
    ///
    /// Array fields match when any element matches, which is MongoDB's
    /// regex-on-array behavior; no special casing needed.
    fn build_search_filter(query: &str) -> Document {
        let query = query.trim();
        if query.is_empty() {
            return Document::new();
        }

        let pattern = regex::escape(query);
        let clauses: Vec<Document> = SEARCH_FIELDS
            .iter()
            .map(|field| doc! { *field: { "$regex": pattern.as_str(), "$options": "i" } })
            .collect();

        doc! { "$or": clauses }
    }
}

#[async_trait]
impl EventRepository for MongoEventRepository {
    #[instrument(skip(self, event), fields(event_id = %event.id, title = %event.title))]
    async fn create(&self, event: Event) -> Result<Event> {
        self.collection.insert_one(&event).await?;
        Ok(event)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Event>> {
        let filter = doc! { "_id": to_bson(id)? };
        let event = self.collection.find_one(filter).await?;
        Ok(event)
    }

    #[instrument(skip(self, update))]
    async fn update(&self, id: Uuid, update: UpdateEvent) -> Result<Event> {
        let filter = doc! { "_id": to_bson(&id)? };
        let existing = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or(EventError::NotFound(id))?;

        let mut updated = existing;
        updated.apply_update(update);

        // Replace rather than $set: absent ids already failed above, so
        // this can never upsert a half-formed record
        self.collection.replace_one(filter, &updated).await?;

        tracing::info!(event_id = %id, "Event updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<bool> {
        let filter = doc! { "_id": to_bson(&id)? };
        let result = self.collection.delete_one(filter).await?;
        Ok(result.deleted_count > 0)
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<Event>> {
        let filter = Self::build_search_filter(query);
        let cursor = self
            .collection
            .find(filter)
            .sort(doc! { "start": 1 })
            .await?;
        let events: Vec<Event> = cursor.try_collect().await?;
        Ok(events)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Event>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "start": 1 })
            .await?;
        let events: Vec<Event> = cursor.try_collect().await?;
        Ok(events)
    }

    #[instrument(skip(self))]
    async fn distinct_organisers(&self) -> Result<Vec<String>> {
        let values = self.collection.distinct("organisers", doc! {}).await?;

        let mut organisers: Vec<String> = values
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .filter(|s| !s.trim().is_empty())
            .collect();
        organisers.sort();
        Ok(organisers)
    }

    #[instrument(skip(self, terms), fields(term_count = terms.len()))]
    async fn upcoming_matching(
        &self,
        terms: &[String],
        after: NaiveDateTime,
    ) -> Result<Vec<Event>> {
        // One regex clause per term per field; any hit qualifies the event
        let clauses: Vec<Document> = terms
            .iter()
            .flat_map(|term| {
                let pattern = regex::escape(term.trim());
                DIGEST_FIELDS
                    .iter()
                    .map(move |field| doc! { *field: { "$regex": pattern.as_str(), "$options": "i" } })
            })
            .collect();

        if clauses.is_empty() {
            return Ok(Vec::new());
        }

        // Stored start strings are fixed-width ISO, so the string $gte is
        // a correct chronological comparison
        let filter = doc! {
            "start": { "$gte": iso_local::format(&after) },
            "$or": clauses,
        };

        let cursor = self
            .collection
            .find(filter)
            .sort(doc! { "start": 1 })
            .await?;
        let events: Vec<Event> = cursor.try_collect().await?;
        Ok(events)
    }
}
