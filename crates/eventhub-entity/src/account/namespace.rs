//! Account namespaces.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::role::Role;

/// An independent account collection with its own email uniqueness domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    /// Event organizers.
    Admin,
    /// Event attendees.
    User,
}

impl Namespace {
    /// Backing table name.
    pub fn table(&self) -> &'static str {
        match self {
            Self::Admin => "admins",
            Self::User => "users",
        }
    }

    /// Role granted to tokens issued for this namespace.
    pub fn role(&self) -> Role {
        match self {
            Self::Admin => Role::Admin,
            Self::User => Role::User,
        }
    }

    /// Whether failed logins count toward a lockout.
    pub fn tracks_lockout(&self) -> bool {
        matches!(self, Self::User)
    }

    /// Return the namespace as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_distinct() {
        assert_eq!(Namespace::Admin.table(), "admins");
        assert_eq!(Namespace::User.table(), "users");
    }

    #[test]
    fn test_only_users_lock_out() {
        assert!(Namespace::User.tracks_lockout());
        assert!(!Namespace::Admin.tracks_lockout());
        assert_eq!(Namespace::Admin.role(), Role::Admin);
    }
}
