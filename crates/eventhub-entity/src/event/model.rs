//! Event entity model.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use eventhub_core::types::{AccountId, EventId};

use super::kind::EventType;
use super::status::EventStatus;

/// Combined date and time format accepted for event schedules.
pub const SCHEDULE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// An event published by an admin.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    /// Unique event identifier.
    pub id: EventId,
    /// Event title.
    pub title: String,
    /// Where the event takes place.
    pub venue: String,
    /// Free-text description.
    pub description: String,
    /// Start, in UTC wall-clock time.
    pub starts_at: NaiveDateTime,
    /// End, in UTC wall-clock time.
    pub ends_at: NaiveDateTime,
    /// Attendance cost; always 0 for free events.
    pub cost: f64,
    /// Pricing type.
    pub event_type: EventType,
    /// Base64 image data URI, stored verbatim.
    pub image: String,
    /// Admin who created the event.
    pub admin_id: AccountId,
    /// Creating admin's display name at creation time.
    pub admin_name: String,
    /// Listing status.
    pub status: EventStatus,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
    /// When the event was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Whether the event has ended as of `now`.
    pub fn has_ended(&self, now: NaiveDateTime) -> bool {
        self.ends_at < now
    }

    /// Start date as `YYYY-MM-DD`.
    pub fn start_date(&self) -> String {
        self.starts_at.format("%Y-%m-%d").to_string()
    }

    /// Start time as `HH:MM`.
    pub fn start_time(&self) -> String {
        self.starts_at.format("%H:%M").to_string()
    }

    /// End date as `YYYY-MM-DD`.
    pub fn end_date(&self) -> String {
        self.ends_at.format("%Y-%m-%d").to_string()
    }

    /// End time as `HH:MM`.
    pub fn end_time(&self) -> String {
        self.ends_at.format("%H:%M").to_string()
    }
}

/// Data required to create a new event.
#[derive(Debug, Clone)]
pub struct NewEvent {
    /// Event title.
    pub title: String,
    /// Venue.
    pub venue: String,
    /// Description.
    pub description: String,
    /// Start.
    pub starts_at: NaiveDateTime,
    /// End; strictly after `starts_at`.
    pub ends_at: NaiveDateTime,
    /// Cost.
    pub cost: f64,
    /// Pricing type.
    pub event_type: EventType,
    /// Image data URI.
    pub image: String,
    /// Creating admin.
    pub admin_id: AccountId,
    /// Creating admin's display name.
    pub admin_name: String,
}
