//! Store traits consumed by the auth and service layers.
//!
//! Every mutation is a single atomic operation in the backing store.
//! Uniqueness (emails per namespace, one registration per event and user)
//! is enforced by the store itself, never by a read followed by a write.

use async_trait::async_trait;
use chrono::NaiveDateTime;

use eventhub_core::error::AppError;
use eventhub_core::types::{AccountId, EventId, PageRequest, PageResponse};
use eventhub_entity::account::{Account, AccountUpdate, LockoutState, Namespace, NewAccount};
use eventhub_entity::event::{Event, NewEvent};
use eventhub_entity::registration::{NewRegistration, Registration};

/// Persistence for admin and user accounts.
#[async_trait]
pub trait CredentialStore: Send + Sync + std::fmt::Debug {
    /// Look up an account by email, case-insensitively.
    async fn find_by_email(
        &self,
        namespace: Namespace,
        email: &str,
    ) -> Result<Option<Account>, AppError>;

    /// Look up an account by id.
    async fn find_by_id(
        &self,
        namespace: Namespace,
        id: AccountId,
    ) -> Result<Option<Account>, AppError>;

    /// Insert a new account with a freshly assigned id.
    ///
    /// Fails with a conflict if the normalized email already exists in
    /// `namespace`.
    async fn insert(&self, namespace: Namespace, account: NewAccount)
    -> Result<Account, AppError>;

    /// Apply a partial update and refresh `updated_at`.
    async fn update_fields(
        &self,
        namespace: Namespace,
        id: AccountId,
        update: AccountUpdate,
    ) -> Result<Account, AppError>;

    /// Atomically increment the failed-login counter and lock the account
    /// once the counter reaches `threshold`.
    async fn record_failed_login(
        &self,
        namespace: Namespace,
        id: AccountId,
        threshold: u32,
    ) -> Result<LockoutState, AppError>;

    /// Atomically reset the failed-login counter and stamp the login time.
    async fn record_successful_login(
        &self,
        namespace: Namespace,
        id: AccountId,
    ) -> Result<Account, AppError>;

    /// Verify the store is reachable.
    async fn health_check(&self) -> Result<(), AppError>;
}

/// Persistence for events.
#[async_trait]
pub trait EventStore: Send + Sync + std::fmt::Debug {
    /// Insert a new event with a freshly assigned id.
    async fn insert(&self, event: NewEvent) -> Result<Event, AppError>;

    /// Look up an event by id.
    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, AppError>;

    /// Mark every active event that ended before `now` as inactive.
    ///
    /// Returns the number of events changed.
    async fn deactivate_ended(&self, now: NaiveDateTime) -> Result<u64, AppError>;

    /// Active events, newest first.
    async fn list_active(&self, page: PageRequest) -> Result<PageResponse<Event>, AppError>;

    /// Active events created by `admin_id`, newest first.
    async fn list_active_by_admin(&self, admin_id: AccountId) -> Result<Vec<Event>, AppError>;
}

/// Persistence for event registrations.
#[async_trait]
pub trait RegistrationStore: Send + Sync + std::fmt::Debug {
    /// Insert a registration.
    ///
    /// Fails with a conflict if the user is already registered for the event.
    async fn insert(&self, registration: NewRegistration) -> Result<Registration, AppError>;

    /// Registrations for an event, newest first.
    async fn list_for_event(&self, event_id: EventId) -> Result<Vec<Registration>, AppError>;

    /// Registrations made by a user, newest first.
    async fn list_for_user(&self, user_id: AccountId) -> Result<Vec<Registration>, AppError>;
}

/// Conflict raised when an email is already taken in a namespace.
pub fn duplicate_email(namespace: Namespace) -> AppError {
    let who = match namespace {
        Namespace::Admin => "Admin",
        Namespace::User => "User",
    };
    AppError::conflict(format!("{who} with this email already exists"))
}

/// Conflict raised on a second registration for the same event.
pub fn duplicate_registration() -> AppError {
    AppError::conflict("Already registered for this event")
}

/// Not-found raised when an update targets a missing account.
pub(crate) fn account_not_found(namespace: Namespace) -> AppError {
    AppError::not_found(format!("{namespace} account not found"))
}
