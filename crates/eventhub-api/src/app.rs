//! Application builder: wires stores, auth, and services into an Axum app.

use std::sync::Arc;

use axum::Router;
use tracing::info;

use eventhub_auth::{AccessGate, AccountManager, JwtDecoder, JwtEncoder, PasswordHasher};
use eventhub_core::config::AppConfig;
use eventhub_core::error::AppError;
use eventhub_database::Stores;
use eventhub_service::{EventService, RegistrationService};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the shared application state from configuration and stores.
///
/// Fails when no signing secret is configured outside development.
pub fn build_state(config: AppConfig, stores: Stores) -> Result<AppState, AppError> {
    // ── Auth ─────────────────────────────────────────────────────
    let secret = config.auth.signing_secret(config.environment)?;
    let hasher = PasswordHasher::new(config.auth.resolved_password_salt());
    let encoder = JwtEncoder::new(&secret, &config.auth);
    let gate = Arc::new(AccessGate::new(JwtDecoder::new(&secret)));
    let accounts = Arc::new(AccountManager::new(
        Arc::clone(&stores.credentials),
        hasher,
        encoder,
        &config.auth,
    ));

    // ── Services ─────────────────────────────────────────────────
    let event_service = Arc::new(EventService::new(Arc::clone(&stores.events)));
    let registration_service = Arc::new(RegistrationService::new(
        Arc::clone(&stores.events),
        Arc::clone(&stores.registrations),
    ));

    info!(
        environment = %config.environment,
        token_ttl_days = config.auth.token_ttl_days,
        "Application state initialized"
    );

    Ok(AppState {
        config: Arc::new(config),
        stores,
        accounts,
        gate,
        event_service,
        registration_service,
    })
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}
