//! Event repository trait

use crate::error::Result;
use crate::models::{Event, UpdateEvent};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

/// Storage operations for event listings.
///
/// Search here is the free-text constraint only; visibility windowing is
/// applied on top by the service layer, which keeps the current/past
/// split a pure, testable function.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Store a new event
    async fn create(&self, event: Event) -> Result<Event>;

    /// Get event by ID
    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Event>>;

    /// Apply an edit; fails with NotFound for absent ids rather than
    /// creating a record
    async fn update(&self, id: Uuid, update: UpdateEvent) -> Result<Event>;

    /// Delete event by ID; false when nothing matched
    async fn delete(&self, id: Uuid) -> Result<bool>;

    /// All events matching a case-insensitive substring search across
    /// title, organisers, venue, tags, and artists, sorted by start. A
    /// blank query is unconstrained.
    async fn search(&self, query: &str) -> Result<Vec<Event>>;

    /// Every event, unfiltered, for the database export
    async fn list_all(&self) -> Result<Vec<Event>>;

    /// Distinct non-empty organiser strings
    async fn distinct_organisers(&self) -> Result<Vec<String>>;

    /// Digest query: events starting at or after `after` that match any
    /// of the subscriber's terms over title, venue, tags, or artists
    async fn upcoming_matching(&self, terms: &[String], after: NaiveDateTime)
    -> Result<Vec<Event>>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use mockall::mock;

    mock! {
        pub EventRepository {}

        #[async_trait]
        impl EventRepository for EventRepository {
            async fn create(&self, event: Event) -> Result<Event>;
            async fn get_by_id(&self, id: &Uuid) -> Result<Option<Event>>;
            async fn update(&self, id: Uuid, update: UpdateEvent) -> Result<Event>;
            async fn delete(&self, id: Uuid) -> Result<bool>;
            async fn search(&self, query: &str) -> Result<Vec<Event>>;
            async fn list_all(&self) -> Result<Vec<Event>>;
            async fn distinct_organisers(&self) -> Result<Vec<String>>;
            async fn upcoming_matching(&self, terms: &[String], after: NaiveDateTime) -> Result<Vec<Event>>;
        }
    }
}
