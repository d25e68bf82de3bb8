//! Event service layer

use crate::error::{EventError, Result};
use crate::models::{CreateEvent, Event, EventView, UpdateEvent};
use crate::repository::EventRepository;
use crate::visibility::VisibilityPolicy;
use domain_artists::ArtistRegistry;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

/// Coordinates the repository, the visibility policy, and the artist
/// registry.
///
/// The registry is optional so the service stays constructible without an
/// artist store (the digest worker has no use for one).
pub struct EventService<R: EventRepository> {
    repository: R,
    policy: VisibilityPolicy,
    registry: Option<Arc<ArtistRegistry>>,
}

impl<R: EventRepository> EventService<R> {
    pub fn new(repository: R, policy: VisibilityPolicy) -> Self {
        Self {
            repository,
            policy,
            registry: None,
        }
    }

    /// Wire in the artist registry for implicit artist creation and
    /// link resolution.
    pub fn with_registry(mut self, registry: Arc<ArtistRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn policy(&self) -> &VisibilityPolicy {
        &self.policy
    }

    /// Validate and store a public submission. Seeds registry records for
    /// any artists the listing names.
    #[instrument(skip(self, create), fields(title = %create.title))]
    pub async fn create(&self, create: CreateEvent) -> Result<Event> {
        create.validate()?;

        if create.end <= create.start {
            return Err(EventError::Validation(
                "Event end must be after its start".to_string(),
            ));
        }

        let event: Event = create.into();
        self.ensure_artists(&event).await?;

        let event = self.repository.create(event).await?;
        info!(event_id = %event.id, "Event created");
        Ok(event)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &Uuid) -> Result<Event> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(EventError::NotFound(*id))
    }

    /// Single event with its artist links resolved.
    #[instrument(skip(self))]
    pub async fn view(&self, id: &Uuid) -> Result<EventView> {
        let event = self.get(id).await?;
        self.into_view(event).await
    }

    /// Current events, optionally narrowed by search, oldest first.
    #[instrument(skip(self))]
    pub async fn list_current(&self, search: Option<&str>) -> Result<Vec<EventView>> {
        let events = self.repository.search(search.unwrap_or_default()).await?;
        let cutoff = self.policy.cutoff_instant(self.policy.now_local());
        let (current, _) = self.policy.partition(events, cutoff);
        self.into_views(current).await
    }

    /// Past events, optionally narrowed by search, most recent first.
    #[instrument(skip(self))]
    pub async fn list_past(&self, search: Option<&str>) -> Result<Vec<EventView>> {
        let events = self.repository.search(search.unwrap_or_default()).await?;
        let cutoff = self.policy.cutoff_instant(self.policy.now_local());
        let (_, past) = self.policy.partition(events, cutoff);
        self.into_views(past).await
    }

    /// Admin edit. Absent ids fail rather than create; end-after-start is
    /// not re-checked on edits.
    #[instrument(skip(self, update))]
    pub async fn update(&self, id: Uuid, update: UpdateEvent) -> Result<Event> {
        update.validate()?;
        let event = self.repository.update(id, update).await?;
        self.ensure_artists(&event).await?;
        Ok(event)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if self.repository.delete(id).await? {
            info!(event_id = %id, "Event deleted");
            Ok(())
        } else {
            Err(EventError::NotFound(id))
        }
    }

    /// Every stored event, for the database export.
    pub async fn list_all(&self) -> Result<Vec<Event>> {
        self.repository.list_all().await
    }

    pub async fn distinct_organisers(&self) -> Result<Vec<String>> {
        self.repository.distinct_organisers().await
    }

    async fn ensure_artists(&self, event: &Event) -> Result<()> {
        if let Some(registry) = &self.registry {
            registry.ensure(&event.artists).await?;
        }
        Ok(())
    }

    async fn into_view(&self, event: Event) -> Result<EventView> {
        let artist_links = match &self.registry {
            Some(registry) => registry.links_for(&event.artists).await?,
            None => Vec::new(),
        };
        Ok(EventView {
            event,
            artist_links,
        })
    }

    async fn into_views(&self, events: Vec<Event>) -> Result<Vec<EventView>> {
        let mut views = Vec::with_capacity(events.len());
        for event in events {
            views.push(self.into_view(event).await?);
        }
        Ok(views)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockEventRepository;
    use chrono::NaiveDate;

    fn create_dto(start_h: u32, end_h: u32) -> CreateEvent {
        let day = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        CreateEvent {
            title: "Jazz Night".to_string(),
            organisers: "MIUC".to_string(),
            venue: "Make It Up Club".to_string(),
            link: String::new(),
            start: day.and_hms_opt(start_h, 0, 0).unwrap(),
            end: day.and_hms_opt(end_h, 0, 0).unwrap(),
            tags: "jazz".to_string(),
            artists: String::new(),
        }
    }

    fn service(mock: MockEventRepository) -> EventService<MockEventRepository> {
        EventService::new(mock, VisibilityPolicy::default())
    }

    #[tokio::test]
    async fn test_create_valid_event_persists() {
        let mut mock = MockEventRepository::new();
        mock.expect_create().times(1).returning(Ok);

        let event = service(mock).create(create_dto(20, 23)).await.unwrap();
        assert_eq!(event.title, "Jazz Night");
        assert_eq!(event.tags, vec!["jazz"]);
    }

    #[tokio::test]
    async fn test_create_rejects_end_before_start_without_persisting() {
        let mut mock = MockEventRepository::new();
        mock.expect_create().times(0);

        let result = service(mock).create(create_dto(23, 20)).await;
        assert!(matches!(result, Err(EventError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_rejects_equal_times() {
        let mut mock = MockEventRepository::new();
        mock.expect_create().times(0);

        let result = service(mock).create(create_dto(20, 20)).await;
        assert!(matches!(result, Err(EventError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_rejects_empty_title() {
        let mut mock = MockEventRepository::new();
        mock.expect_create().times(0);

        let mut dto = create_dto(20, 23);
        dto.title = String::new();
        let result = service(mock).create(dto).await;
        assert!(matches!(result, Err(EventError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_absent_is_not_found() {
        let mut mock = MockEventRepository::new();
        mock.expect_get_by_id().returning(|_| Ok(None));

        let result = service(mock).get(&Uuid::now_v7()).await;
        assert!(matches!(result, Err(EventError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_absent_is_not_found() {
        let mut mock = MockEventRepository::new();
        mock.expect_delete().returning(|_| Ok(false));

        let result = service(mock).delete(Uuid::now_v7()).await;
        assert!(matches!(result, Err(EventError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_without_search_queries_unconstrained() {
        let mut mock = MockEventRepository::new();
        mock.expect_search()
            .withf(|q| q.is_empty())
            .times(1)
            .returning(|_| Ok(vec![]));

        let current = service(mock).list_current(None).await.unwrap();
        assert!(current.is_empty());
    }

    #[tokio::test]
    async fn test_list_current_drops_past_events() {
        let past: Event = create_dto(20, 23).into();
        let mut future: Event = create_dto(20, 23).into();
        future.title = "Far Future Fest".to_string();
        future.start = NaiveDate::from_ymd_opt(2099, 1, 1)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap();
        future.end = NaiveDate::from_ymd_opt(2099, 1, 2)
            .unwrap()
            .and_hms_opt(1, 0, 0)
            .unwrap();

        let mut mock = MockEventRepository::new();
        let events = vec![past, future];
        mock.expect_search()
            .returning(move |_| Ok(events.clone()));

        let current = service(mock).list_current(None).await.unwrap();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].event.title, "Far Future Fest");
        // No registry wired in, so links are empty
        assert!(current[0].artist_links.is_empty());
    }
}
