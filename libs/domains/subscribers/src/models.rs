//! Subscriber domain models

use serde::{Deserialize, Serialize};

/// A digest subscriber with their saved search terms.
///
/// Keyed by email; the external signup surface owns the lifecycle of
/// these records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
    pub email: String,

    /// Saved search terms; an empty list means no digest is wanted
    #[serde(default)]
    pub search_terms: Vec<String>,
}
