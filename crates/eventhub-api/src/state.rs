//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use eventhub_auth::{AccessGate, AccountManager};
use eventhub_core::config::AppConfig;
use eventhub_database::Stores;
use eventhub_service::{EventService, RegistrationService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped or `Arc`-backed for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Credential, event, and registration stores
    pub stores: Stores,

    // ── Auth ─────────────────────────────────────────────────
    /// Signup and login flows for both namespaces
    pub accounts: Arc<AccountManager>,
    /// Bearer token verification and role checks
    pub gate: Arc<AccessGate>,

    // ── Services ─────────────────────────────────────────────
    /// Event service
    pub event_service: Arc<EventService>,
    /// Registration service
    pub registration_service: Arc<RegistrationService>,
}
