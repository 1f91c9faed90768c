//! Lockout tracker.
//!
//! Counts consecutive failed password checks and locks the account when the
//! threshold is reached. A lock is permanent until cleared administratively.

use std::sync::Arc;

use tracing::{error, warn};

use eventhub_core::error::AppError;
use eventhub_database::store::CredentialStore;
use eventhub_entity::account::{Account, LockoutState, Namespace};

/// Records failed logins against the credential store.
#[derive(Debug, Clone)]
pub struct LockoutTracker {
    store: Arc<dyn CredentialStore>,
    threshold: u32,
}

impl LockoutTracker {
    /// Creates a tracker that locks after `threshold` consecutive failures.
    pub fn new(store: Arc<dyn CredentialStore>, threshold: u32) -> Self {
        Self { store, threshold }
    }

    /// Failures allowed before the account locks.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Record one failed password check for a user account.
    ///
    /// The increment is a single store operation and is never retried. A
    /// store failure yields `ServiceUnavailable` so it cannot be mistaken
    /// for either a login success or a credential failure.
    pub async fn record_failure(&self, account: &Account) -> Result<LockoutState, AppError> {
        let state = self
            .store
            .record_failed_login(Namespace::User, account.id, self.threshold)
            .await
            .map_err(|e| {
                error!(account_id = %account.id, error = %e, "Failed to record failed login");
                AppError::service_unavailable("Login is temporarily unavailable, please retry")
            })?;

        if state.locked {
            warn!(
                account_id = %account.id,
                attempts = state.attempts,
                "Account locked after repeated failed logins"
            );
        } else {
            warn!(
                account_id = %account.id,
                attempts = state.attempts,
                threshold = self.threshold,
                "Failed login attempt"
            );
        }
        Ok(state)
    }
}
