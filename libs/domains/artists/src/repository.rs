//! Artist repository trait

use crate::error::Result;
use crate::models::{Artist, UpdateArtist};
use async_trait::async_trait;
use uuid::Uuid;

/// Storage operations for artist records.
#[async_trait]
pub trait ArtistRepository: Send + Sync {
    /// Insert a new artist record
    async fn insert(&self, artist: Artist) -> Result<Artist>;

    /// Look up by name, case-insensitively, ignoring surrounding whitespace
    async fn find_by_name(&self, name: &str) -> Result<Option<Artist>>;

    /// Get artist by ID
    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Artist>>;

    /// All artists, sorted case-insensitively by name
    async fn list(&self) -> Result<Vec<Artist>>;

    /// Apply a profile edit; fails with NotFound for absent ids
    async fn update(&self, id: Uuid, update: UpdateArtist) -> Result<Artist>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use mockall::mock;

    mock! {
        pub ArtistRepository {}

        #[async_trait]
        impl ArtistRepository for ArtistRepository {
            async fn insert(&self, artist: Artist) -> Result<Artist>;
            async fn find_by_name(&self, name: &str) -> Result<Option<Artist>>;
            async fn get_by_id(&self, id: &Uuid) -> Result<Option<Artist>>;
            async fn list(&self) -> Result<Vec<Artist>>;
            async fn update(&self, id: Uuid, update: UpdateArtist) -> Result<Artist>;
        }
    }
}
