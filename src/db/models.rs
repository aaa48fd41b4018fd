//! Domain models for the movie database.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Storage-assigned integer ID.
pub type Id = i64;

/// A movie in the rental catalogue.
///
/// `id` is assigned by storage on creation. Repositories ignore the `id`
/// of a record passed to `create`, so callers building a new movie can
/// leave it at `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: Id,
    pub name: String,
    pub cover_url: Option<String>,
    pub description: Option<String>,
    /// Free-form score, conventionally 1 to 10.
    pub score: Option<i32>,
    /// Catalogue status, e.g. "available" or "in-edition".
    pub status: Option<String>,
    /// Rental status, e.g. "rented" or "available".
    pub rental_status: Option<String>,
    pub created_at: Option<NaiveDate>,
    #[serde(default, deserialize_with = "crate::db::utils::deserialize_date_or_datetime")]
    pub modified_at: Option<NaiveDateTime>,
}

impl Movie {
    /// Create an unsaved movie with only a name set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            cover_url: None,
            description: None,
            score: None,
            status: None,
            rental_status: None,
            created_at: None,
            modified_at: None,
        }
    }
}
