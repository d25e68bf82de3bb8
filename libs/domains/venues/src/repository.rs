//! Venue repository trait

use crate::error::Result;
use crate::models::Venue;
use async_trait::async_trait;

/// Storage operations for venues.
#[async_trait]
pub trait VenueRepository: Send + Sync {
    /// Store a new venue
    async fn create(&self, venue: Venue) -> Result<Venue>;

    /// All venues, sorted by name
    async fn list(&self) -> Result<Vec<Venue>>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use mockall::mock;

    mock! {
        pub VenueRepository {}

        #[async_trait]
        impl VenueRepository for VenueRepository {
            async fn create(&self, venue: Venue) -> Result<Venue>;
            async fn list(&self) -> Result<Vec<Venue>>;
        }
    }
}
