//! Account entity model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use eventhub_core::types::AccountId;

/// An admin or user account.
///
/// Admins and users share this shape but live in separate tables. The
/// lockout and activation columns only carry meaning for users.
#[derive(Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    /// Unique account identifier.
    pub id: AccountId,
    /// Normalized (trimmed, lowercase) email address.
    pub email: String,
    /// Human-readable display name.
    pub display_name: String,
    /// Salted SHA-256 password hash, lowercase hex.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Consecutive failed login attempts.
    pub login_attempts: i32,
    /// Set once the failure threshold is reached. Never cleared by login.
    pub account_locked: bool,
    /// Whether the account may log in at all.
    pub is_active: bool,
    /// Last successful login time.
    pub last_login_at: Option<DateTime<Utc>>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Check if the account is locked out.
    pub fn is_locked(&self) -> bool {
        self.account_locked
    }

    /// Check if the account has been deactivated.
    pub fn is_disabled(&self) -> bool {
        !self.is_active
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("display_name", &self.display_name)
            .field("password_hash", &"[REDACTED]")
            .field("login_attempts", &self.login_attempts)
            .field("account_locked", &self.account_locked)
            .field("is_active", &self.is_active)
            .field("last_login_at", &self.last_login_at)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Data required to create a new account.
#[derive(Clone)]
pub struct NewAccount {
    /// Email address; normalized by the store before insert.
    pub email: String,
    /// Display name.
    pub display_name: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

impl fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAccount")
            .field("email", &self.email)
            .field("display_name", &self.display_name)
            .finish_non_exhaustive()
    }
}

/// A partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct AccountUpdate {
    /// New display name.
    pub display_name: Option<String>,
    /// New activation flag.
    pub is_active: Option<bool>,
    /// New lock flag.
    pub account_locked: Option<bool>,
    /// New failed-attempt counter.
    pub login_attempts: Option<i32>,
    /// New last-login timestamp.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl AccountUpdate {
    /// Whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none()
            && self.is_active.is_none()
            && self.account_locked.is_none()
            && self.login_attempts.is_none()
            && self.last_login_at.is_none()
    }
}

/// Counter state after a failed login was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockoutState {
    /// Failed attempts including the one just recorded.
    pub attempts: i32,
    /// Whether the account is now locked.
    pub locked: bool,
}

/// Normalize an email for storage and comparison.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Account {
        let now = Utc::now();
        Account {
            id: AccountId::new(),
            email: "a@b.com".into(),
            display_name: "A".into(),
            password_hash: "deadbeef".into(),
            login_attempts: 0,
            account_locked: false,
            is_active: true,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Alice@Example.COM "), "alice@example.com");
    }

    #[test]
    fn test_hash_never_serialized() {
        let json = serde_json::to_value(sample()).expect("serialize");
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "a@b.com");
    }

    #[test]
    fn test_debug_redacts_hash() {
        let rendered = format!("{:?}", sample());
        assert!(!rendered.contains("deadbeef"));
    }

    #[test]
    fn test_empty_update() {
        assert!(AccountUpdate::default().is_empty());
        let update = AccountUpdate {
            is_active: Some(false),
            ..AccountUpdate::default()
        };
        assert!(!update.is_empty());
    }
}
