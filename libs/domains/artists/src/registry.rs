//! Artist registry service
//!
//! Wraps the repository with the registry rules: implicit creation from
//! event listings, dedup by normalized name, and the "link only when a
//! profile exists" rule for event views.

use crate::error::{ArtistError, Result};
use crate::models::{Artist, ArtistLink, UpdateArtist};
use crate::repository::ArtistRepository;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

/// Registry over any [`ArtistRepository`].
///
/// Held as `Arc<ArtistRegistry>` so the events domain can seed records
/// without being generic over the artist store.
pub struct ArtistRegistry {
    repository: Arc<dyn ArtistRepository>,
}

impl ArtistRegistry {
    pub fn new(repository: Arc<dyn ArtistRepository>) -> Self {
        Self { repository }
    }

    /// Make sure every named artist has a registry record.
    ///
    /// Names are trimmed; empties are skipped; matching is
    /// case-insensitive. Check-then-insert without a unique index, so two
    /// concurrent submissions naming the same new artist can race into a
    /// duplicate. Accepted: listings resolve against the first match.
    #[instrument(skip(self, names), fields(count = names.len()))]
    pub async fn ensure(&self, names: &[String]) -> Result<()> {
        for name in names {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                continue;
            }

            if self.repository.find_by_name(trimmed).await?.is_none() {
                let artist = self.repository.insert(Artist::new(trimmed)).await?;
                info!(artist_id = %artist.id, artist_name = %artist.name, "Artist seeded from event listing");
            }
        }
        Ok(())
    }

    /// All artists, sorted by name.
    pub async fn list(&self) -> Result<Vec<Artist>> {
        self.repository.list().await
    }

    /// Resolve event-listing names into links.
    ///
    /// A name gets an `id` only when its registry record has a non-empty
    /// description; bare seeded records render as plain text.
    #[instrument(skip(self, names))]
    pub async fn links_for(&self, names: &[String]) -> Result<Vec<ArtistLink>> {
        let mut links = Vec::with_capacity(names.len());
        for name in names {
            let id = match self.repository.find_by_name(name).await? {
                Some(artist) if !artist.description.trim().is_empty() => Some(artist.id),
                _ => None,
            };
            links.push(ArtistLink {
                name: name.clone(),
                id,
            });
        }
        Ok(links)
    }

    pub async fn get(&self, id: &Uuid) -> Result<Artist> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ArtistError::NotFound(*id))
    }

    #[instrument(skip(self, update))]
    pub async fn update(&self, id: Uuid, update: UpdateArtist) -> Result<Artist> {
        update.validate()?;
        self.repository.update(id, update).await
    }
}
