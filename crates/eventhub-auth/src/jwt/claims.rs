//! JWT claims structure carried by identity tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use eventhub_core::types::AccountId;
use eventhub_entity::account::Role;

/// JWT claims payload embedded in every identity token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account ID.
    pub sub: AccountId,
    /// Account email at issuance.
    pub email: String,
    /// Account display name at issuance.
    pub name: String,
    /// Namespace role.
    pub role: Role,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the account ID from the subject claim.
    pub fn account_id(&self) -> AccountId {
        self.sub
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Whether the token is past its expiry at `now` (seconds since epoch).
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.exp
    }
}
