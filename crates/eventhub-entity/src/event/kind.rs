//! Event pricing type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether attendance costs money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "event_type", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum EventType {
    /// No cost; any submitted cost is ignored.
    #[default]
    Free,
    /// Requires a non-negative cost.
    Paid,
}

impl EventType {
    /// Whether registrants must pay.
    pub fn requires_payment(&self) -> bool {
        matches!(self, Self::Paid)
    }

    /// Return the type as an uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "FREE",
            Self::Paid => "PAID",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventType {
    type Err = eventhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "FREE" => Ok(Self::Free),
            "PAID" => Ok(Self::Paid),
            _ => Err(eventhub_core::AppError::validation(
                "Event type must be FREE or PAID.",
            )),
        }
    }
}
