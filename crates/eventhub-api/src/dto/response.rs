//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::Serialize;

use eventhub_auth::AuthOutcome;
use eventhub_core::types::{AccountId, EventId, PageMeta, PageResponse, RegistrationId};
use eventhub_entity::account::{Account, Role};
use eventhub_entity::event::{Event, EventType};
use eventhub_entity::registration::Registration;
use eventhub_service::{RegisteredEvent, RegistrationReceipt};

/// Account summary embedded in auth responses.
#[derive(Debug, Clone, Serialize)]
pub struct AccountSummary {
    /// Account ID.
    pub id: AccountId,
    /// Normalized email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Role.
    pub role: Role,
}

impl AccountSummary {
    /// Summarizes `account` under `role`.
    pub fn new(account: &Account, role: Role) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            name: account.display_name.clone(),
            role,
        }
    }
}

/// Signup and login response.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    /// Signed identity token.
    pub token: String,
    /// The authenticated account.
    pub user: AccountSummary,
    /// Human-readable outcome.
    pub message: String,
}

impl AuthResponse {
    /// Builds the response for a successful signup or login.
    pub fn new(outcome: AuthOutcome, message: impl Into<String>) -> Self {
        Self {
            user: AccountSummary::new(&outcome.account, outcome.role),
            token: outcome.token,
            message: message.into(),
        }
    }
}

/// Response for `/auth/me`.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    /// The caller's account.
    pub user: AccountSummary,
    /// Last successful login.
    pub last_login_at: Option<DateTime<Utc>>,
    /// Account creation time.
    pub created_at: DateTime<Utc>,
}

/// Event summary returned after creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedEvent {
    /// Event ID.
    pub id: EventId,
    /// Title.
    pub title: String,
    /// Venue.
    pub venue: String,
    /// Start date, `YYYY-MM-DD`.
    pub start_date: String,
    /// Start time, `HH:MM`.
    pub start_time: String,
    /// Cost.
    pub cost: f64,
    /// Pricing type.
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Image data URI.
    pub image: String,
}

/// Response for event creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateEventResponse {
    /// Human-readable outcome.
    pub message: String,
    /// The created event.
    pub event: CreatedEvent,
}

impl From<Event> for CreateEventResponse {
    fn from(event: Event) -> Self {
        Self {
            message: "Event created successfully".to_string(),
            event: CreatedEvent {
                start_date: event.start_date(),
                start_time: event.start_time(),
                id: event.id,
                title: event.title,
                venue: event.venue,
                cost: event.cost,
                event_type: event.event_type,
                image: event.image,
            },
        }
    }
}

/// Event card in the public listing.
#[derive(Debug, Clone, Serialize)]
pub struct EventCard {
    /// Event ID.
    pub id: EventId,
    /// Image data URI.
    pub image: String,
    /// Pricing type.
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Title.
    pub title: String,
    /// Start date, `YYYY-MM-DD`.
    pub date: String,
    /// Venue.
    pub location: String,
    /// Cost.
    pub cost: f64,
    /// Description.
    pub description: String,
}

impl From<Event> for EventCard {
    fn from(event: Event) -> Self {
        Self {
            date: event.start_date(),
            id: event.id,
            image: event.image,
            event_type: event.event_type,
            title: event.title,
            location: event.venue,
            cost: event.cost,
            description: event.description,
        }
    }
}

/// Response for the public event listing.
#[derive(Debug, Clone, Serialize)]
pub struct EventListResponse {
    /// Events on this page.
    pub events: Vec<EventCard>,
    /// Page position.
    pub pagination: PageMeta,
}

impl From<PageResponse<Event>> for EventListResponse {
    fn from(page: PageResponse<Event>) -> Self {
        let page = page.map(EventCard::from);
        Self {
            events: page.items,
            pagination: page.pagination,
        }
    }
}

/// Full event details, as shown to the owning admin.
#[derive(Debug, Clone, Serialize)]
pub struct EventDetails {
    /// Event ID.
    pub id: EventId,
    /// Title.
    pub title: String,
    /// Venue.
    pub venue: String,
    /// Start date.
    pub start_date: String,
    /// Start time.
    pub start_time: String,
    /// End date.
    pub end_date: String,
    /// End time.
    pub end_time: String,
    /// Cost.
    pub cost: f64,
    /// Pricing type.
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Image data URI.
    pub image: String,
    /// Description.
    pub description: String,
    /// Creating admin.
    #[serde(rename = "adminId")]
    pub admin_id: AccountId,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<Event> for EventDetails {
    fn from(event: Event) -> Self {
        Self {
            start_date: event.start_date(),
            start_time: event.start_time(),
            end_date: event.end_date(),
            end_time: event.end_time(),
            id: event.id,
            title: event.title,
            venue: event.venue,
            cost: event.cost,
            event_type: event.event_type,
            image: event.image,
            description: event.description,
            admin_id: event.admin_id,
            created_at: event.created_at,
        }
    }
}

/// Response for the admin's own events.
#[derive(Debug, Clone, Serialize)]
pub struct AdminEventsResponse {
    /// The admin's active events.
    pub events: Vec<EventDetails>,
    /// Number of events.
    pub count: usize,
}

impl From<Vec<Event>> for AdminEventsResponse {
    fn from(events: Vec<Event>) -> Self {
        Self {
            count: events.len(),
            events: events.into_iter().map(EventDetails::from).collect(),
        }
    }
}

/// Response for a successful registration.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationResponse {
    /// Human-readable outcome.
    pub message: String,
    /// Registration ID.
    pub registration_id: RegistrationId,
    /// Title of the event.
    pub event_title: String,
    /// Whether payment is expected.
    pub payment_required: bool,
}

impl From<RegistrationReceipt> for RegistrationResponse {
    fn from(receipt: RegistrationReceipt) -> Self {
        Self {
            message: "Successfully registered for event".to_string(),
            registration_id: receipt.registration.id,
            event_title: receipt.event_title,
            payment_required: receipt.payment_required,
        }
    }
}

/// One registrant of an event.
#[derive(Debug, Clone, Serialize)]
pub struct Participant {
    /// Registration ID.
    pub id: RegistrationId,
    /// Registrant name.
    pub user_name: String,
    /// Registrant email.
    pub user_email: String,
    /// Contact phone number.
    pub phone_number: String,
    /// When the registration was made.
    pub registration_date: DateTime<Utc>,
    /// Payment status.
    pub payment_status: String,
    /// Payment method.
    pub payment_method: String,
}

impl From<Registration> for Participant {
    fn from(r: Registration) -> Self {
        Self {
            id: r.id,
            user_name: r.user_name,
            user_email: r.user_email,
            phone_number: r.phone_number,
            registration_date: r.registration_date,
            payment_status: r.payment_status,
            payment_method: r.payment_method,
        }
    }
}

/// Response for an event's participants.
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantsResponse {
    /// Registrants, newest first.
    pub participants: Vec<Participant>,
    /// Number of registrants.
    pub total_count: usize,
}

impl From<Vec<Registration>> for ParticipantsResponse {
    fn from(registrations: Vec<Registration>) -> Self {
        Self {
            total_count: registrations.len(),
            participants: registrations.into_iter().map(Participant::from).collect(),
        }
    }
}

/// An event the caller registered for.
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredEventView {
    /// Event ID.
    pub id: EventId,
    /// Title.
    pub title: String,
    /// Venue.
    pub venue: String,
    /// Start date.
    pub start_date: String,
    /// Start time.
    pub start_time: String,
    /// End date.
    pub end_date: String,
    /// End time.
    pub end_time: String,
    /// Cost.
    pub cost: f64,
    /// Pricing type.
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Image data URI.
    pub image: String,
    /// Description.
    pub description: String,
    /// When the caller registered.
    pub registration_date: DateTime<Utc>,
    /// The caller's payment status.
    pub payment_status: String,
}

impl From<RegisteredEvent> for RegisteredEventView {
    fn from(RegisteredEvent { event, registration }: RegisteredEvent) -> Self {
        Self {
            start_date: event.start_date(),
            start_time: event.start_time(),
            end_date: event.end_date(),
            end_time: event.end_time(),
            id: event.id,
            title: event.title,
            venue: event.venue,
            cost: event.cost,
            event_type: event.event_type,
            image: event.image,
            description: event.description,
            registration_date: registration.registration_date,
            payment_status: registration.payment_status,
        }
    }
}

/// Response for the caller's registered events.
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredEventsResponse {
    /// Registered events, newest registration first.
    pub events: Vec<RegisteredEventView>,
    /// Number of events.
    pub total_count: usize,
}

impl From<Vec<RegisteredEvent>> for RegisteredEventsResponse {
    fn from(joined: Vec<RegisteredEvent>) -> Self {
        Self {
            total_count: joined.len(),
            events: joined.into_iter().map(RegisteredEventView::from).collect(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Store status.
    pub database: String,
}
