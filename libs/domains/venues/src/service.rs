//! Venue service layer

use crate::error::Result;
use crate::models::{CreateVenue, Venue};
use crate::repository::VenueRepository;
use tracing::{info, instrument};
use validator::Validate;

pub struct VenueService<R: VenueRepository> {
    repository: R,
}

impl<R: VenueRepository> VenueService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, create), fields(venue_name = %create.name))]
    pub async fn create(&self, create: CreateVenue) -> Result<Venue> {
        create.validate()?;

        let venue = self.repository.create(create.into()).await?;
        info!(venue_id = %venue.id, "Venue created");
        Ok(venue)
    }

    pub async fn list(&self) -> Result<Vec<Venue>> {
        self.repository.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VenueError;
    use crate::repository::mock::MockVenueRepository;

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let mut mock = MockVenueRepository::new();
        mock.expect_create().times(0);

        let result = VenueService::new(mock)
            .create(CreateVenue {
                name: String::new(),
                description: String::new(),
                location: String::new(),
                contact: String::new(),
                link: String::new(),
            })
            .await;

        assert!(matches!(result, Err(VenueError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_persists_valid_venue() {
        let mut mock = MockVenueRepository::new();
        mock.expect_create().times(1).returning(Ok);

        let venue = VenueService::new(mock)
            .create(CreateVenue {
                name: "The Tote".to_string(),
                description: String::new(),
                location: "Collingwood".to_string(),
                contact: String::new(),
                link: String::new(),
            })
            .await
            .unwrap();

        assert_eq!(venue.name, "The Tote");
    }
}
