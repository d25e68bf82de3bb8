//! Event domain models

use chrono::{DateTime, NaiveDateTime, Utc};
use domain_artists::ArtistLink;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Fixed-width ISO 8601 local time, `YYYY-MM-DDTHH:MM:SS`.
///
/// Events store their times as strings in this format, which sorts
/// lexicographically in chronological order, so MongoDB range queries on
/// the raw strings are correct. Deserialization also accepts the
/// seconds-less `YYYY-MM-DDTHH:MM` form that datetime-local form inputs
/// submit.
pub mod iso_local {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
    const FORMAT_NO_SECONDS: &str = "%Y-%m-%dT%H:%M";

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(de::Error::custom)
    }

    pub fn parse(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(s, FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(s, FORMAT_NO_SECONDS))
    }

    pub fn format(dt: &NaiveDateTime) -> String {
        dt.format(FORMAT).to_string()
    }
}

/// Split a comma-joined form field into trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// An event listing.
///
/// `venue`, `organisers`, and `artists` are free text; any connection to
/// the venue and artist collections is a soft name match made at read
/// time, never a foreign key.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// Unique identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,

    pub title: String,

    #[serde(default)]
    pub organisers: String,

    /// Venue as entered; free text, not a reference
    #[serde(default)]
    pub venue: String,

    /// External link for the event
    #[serde(default)]
    pub link: String,

    /// Local start time, no timezone attached
    #[serde(with = "iso_local")]
    pub start: NaiveDateTime,

    /// Local end time
    #[serde(with = "iso_local")]
    pub end: NaiveDateTime,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Performing artist names as entered on the listing
    #[serde(default)]
    pub artists: Vec<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// DTO for public event submission.
///
/// `tags` and `artists` arrive as comma-joined strings, the way listing
/// forms submit them; they are split and trimmed on conversion.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEvent {
    #[validate(length(min = 1, max = 500, message = "Title is required"))]
    pub title: String,

    #[serde(default)]
    pub organisers: String,

    #[serde(default)]
    pub venue: String,

    #[serde(default)]
    pub link: String,

    #[serde(with = "iso_local")]
    pub start: NaiveDateTime,

    #[serde(with = "iso_local")]
    pub end: NaiveDateTime,

    /// Comma-joined tag list
    #[serde(default)]
    pub tags: String,

    /// Comma-joined artist names
    #[serde(default)]
    pub artists: String,
}

impl From<CreateEvent> for Event {
    fn from(create: CreateEvent) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: create.title,
            organisers: create.organisers,
            venue: create.venue,
            link: create.link,
            start: create.start,
            end: create.end,
            tags: split_list(&create.tags),
            artists: split_list(&create.artists),
            created_at: now,
            updated_at: now,
        }
    }
}

/// DTO for admin event edits. All fields optional; absent fields keep
/// their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEvent {
    #[validate(length(min = 1, max = 500, message = "Title cannot be emptied"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organisers: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default, with = "iso_local_opt", skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDateTime>,

    #[serde(default, with = "iso_local_opt", skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,

    /// Comma-joined, replaces the stored list when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// Comma-joined, replaces the stored list when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artists: Option<String>,
}

/// `Option<NaiveDateTime>` wrapper over [`iso_local`].
mod iso_local_opt {
    use super::iso_local;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(
        dt: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => serializer.serialize_some(&iso_local::format(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => iso_local::parse(&s).map(Some).map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}

impl Event {
    /// Apply an edit. End-after-start is deliberately not re-checked here;
    /// only creation enforces it.
    pub fn apply_update(&mut self, update: UpdateEvent) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(organisers) = update.organisers {
            self.organisers = organisers;
        }
        if let Some(venue) = update.venue {
            self.venue = venue;
        }
        if let Some(link) = update.link {
            self.link = link;
        }
        if let Some(start) = update.start {
            self.start = start;
        }
        if let Some(end) = update.end {
            self.end = end;
        }
        if let Some(tags) = update.tags {
            self.tags = split_list(&tags);
        }
        if let Some(artists) = update.artists {
            self.artists = split_list(&artists);
        }
        self.updated_at = Utc::now();
    }
}

/// Query parameters for listing endpoints.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct EventQuery {
    /// Free-text search across title, organisers, venue, tags, and artists
    pub search: Option<String>,
}

/// An event joined with its resolved artist links, the shape listing
/// pages consume.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventView {
    #[serde(flatten)]
    pub event: Event,

    pub artist_links: Vec<ArtistLink>,
}
