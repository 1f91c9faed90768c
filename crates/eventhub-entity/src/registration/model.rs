//! Registration entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use eventhub_core::types::{AccountId, EventId, RegistrationId};

use crate::event::EventType;

/// Payment status recorded when none is supplied.
pub const DEFAULT_PAYMENT_STATUS: &str = "pending";
/// Payment method recorded when none is supplied.
pub const DEFAULT_PAYMENT_METHOD: &str = "none";

/// A user's registration for an event.
///
/// Event and user details are copied in at registration time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Registration {
    /// Unique registration identifier.
    pub id: RegistrationId,
    /// Registered event.
    pub event_id: EventId,
    /// Event title at registration time.
    pub event_title: String,
    /// Registering user.
    pub user_id: AccountId,
    /// User display name.
    pub user_name: String,
    /// User email.
    pub user_email: String,
    /// Contact phone number; may be empty.
    pub phone_number: String,
    /// Payment status, e.g. `pending`.
    pub payment_status: String,
    /// Payment method, e.g. `none`.
    pub payment_method: String,
    /// When the registration was made.
    pub registration_date: DateTime<Utc>,
    /// Event pricing type.
    pub event_type: EventType,
    /// Event cost.
    pub event_cost: f64,
}

/// Data required to create a registration.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    /// Event.
    pub event_id: EventId,
    /// Event title.
    pub event_title: String,
    /// User.
    pub user_id: AccountId,
    /// User display name.
    pub user_name: String,
    /// User email.
    pub user_email: String,
    /// Phone number.
    pub phone_number: String,
    /// Payment status.
    pub payment_status: String,
    /// Payment method.
    pub payment_method: String,
    /// Event pricing type.
    pub event_type: EventType,
    /// Event cost.
    pub event_cost: f64,
}
