//! Request context carrying the verified caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use eventhub_auth::Claims;
use eventhub_auth::gate::require_role;
use eventhub_core::error::AppError;
use eventhub_core::types::AccountId;
use eventhub_entity::account::Role;

/// Context for the current authenticated request.
///
/// Built from verified token claims and passed into service methods so
/// that every operation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The caller's account ID (`sub`).
    pub account_id: AccountId,
    /// The caller's role.
    pub role: Role,
    /// The caller's email from the token.
    pub email: String,
    /// The caller's display name from the token.
    pub display_name: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context from verified claims.
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            account_id: claims.sub,
            role: claims.role,
            email: claims.email.clone(),
            display_name: claims.name.clone(),
            request_time: Utc::now(),
        }
    }

    /// Fails with `Forbidden` unless the caller holds `role`.
    pub fn require(&self, role: Role) -> Result<(), AppError> {
        require_role(self.role, role)
    }
}
