//! Venue domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A venue record as submitted through the public form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Venue {
    /// Unique identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Street address or suburb, free text
    #[serde(default)]
    pub location: String,

    /// Contact details, free text
    #[serde(default)]
    pub contact: String,

    #[serde(default)]
    pub link: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// DTO for venue submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateVenue {
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub contact: String,

    #[serde(default)]
    pub link: String,
}

impl From<CreateVenue> for Venue {
    fn from(create: CreateVenue) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: create.name,
            description: create.description,
            location: create.location,
            contact: create.contact,
            link: create.link,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_venue_fills_timestamps() {
        let venue: Venue = CreateVenue {
            name: "The Tote".to_string(),
            description: String::new(),
            location: "Collingwood".to_string(),
            contact: String::new(),
            link: String::new(),
        }
        .into();

        assert_eq!(venue.name, "The Tote");
        assert!(!venue.id.is_nil());
        assert_eq!(venue.created_at, venue.updated_at);
    }
}
