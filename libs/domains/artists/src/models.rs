//! Artist domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// An artist registry record.
///
/// Created implicitly when an event listing first names the artist, so a
/// fresh record carries only the name. The profile fields are filled in
/// later through the edit endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Artist {
    /// Unique identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,

    /// Display name, the dedup key (case-insensitive, trimmed)
    pub name: String,

    /// Free-text bio; empty until the artist fills it in
    #[serde(default)]
    pub description: String,

    /// Free-text genre tags
    #[serde(default)]
    pub tags: String,

    /// External links (bandcamp, socials, ...)
    #[serde(default)]
    pub links: Vec<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Artist {
    /// A bare record as seeded from an event listing.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            description: String::new(),
            tags: String::new(),
            links: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a profile edit. The name is the registry key and stays fixed.
    pub fn apply_update(&mut self, update: UpdateArtist) {
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(links) = update.links {
            self.links = links;
        }
        self.updated_at = Utc::now();
    }
}

/// DTO for the public artist-edit endpoint.
///
/// Only the profile fields are mutable; the name never changes here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateArtist {
    #[validate(length(max = 10000, message = "Description too long"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
}

/// How an event listing refers to an artist.
///
/// The `id` is present only when a registry record exists for the name and
/// has a non-empty description, i.e. there is a profile worth linking to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArtistLink {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
}
