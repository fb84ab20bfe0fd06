//! Event catalog domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published event visitors can browse, like, and book.
///
/// `owner`, `participants`, `head_count`, and `income` are carried in the
/// record but not read or written by any endpoint; they exist for parity
/// with the stored schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub organized_by: String,
    pub owner: String,
    pub event_date: NaiveDate,
    pub event_time: String,
    pub location: String,
    /// Price per ticket, in whole currency units.
    pub ticket_price: i64,
    /// Stored filename of the uploaded image, not a path. The serving root
    /// can move without touching records.
    pub image: Option<String>,
    pub likes: i64,
    pub participants: i64,
    pub head_count: i64,
    pub income: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// The date string embedded in booking snapshots and QR payloads.
    pub fn date_string(&self) -> String {
        self.event_date.format("%Y-%m-%d").to_string()
    }
}

/// Fields accepted when an admin creates an event. Persisted as given;
/// `likes` starts at zero unless the form specifies otherwise.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub organized_by: String,
    pub event_date: NaiveDate,
    pub event_time: String,
    pub location: String,
    pub ticket_price: i64,
    pub image: Option<String>,
    pub likes: i64,
}
