//! Password policy enforcement for new passwords.

use thiserror::Error;

use eventhub_core::config::AuthConfig;
use eventhub_core::error::FieldViolation;

/// Characters that satisfy the special-character rule.
const SPECIAL_CHARACTERS: &str = r"!@#$%^&*()_+={}[]:;<>,.?~\/-";

/// Why a password was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// Fewer characters than the configured minimum.
    #[error("Password must be at least {min} characters long.")]
    TooShort {
        /// Required minimum length.
        min: usize,
    },
    /// Missing a lowercase letter, uppercase letter, digit, or special character.
    #[error("Password must include uppercase, lowercase, number, and special character.")]
    WeakComposition,
}

impl PolicyError {
    /// Express the rejection as a violation of the `password` field.
    pub fn violation(&self) -> FieldViolation {
        FieldViolation::new("password", self.to_string())
    }
}

/// Validates password strength against the configured policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password; length is counted in characters.
    pub fn validate(&self, password: &str) -> Result<(), PolicyError> {
        if password.chars().count() < self.min_length {
            return Err(PolicyError::TooShort {
                min: self.min_length,
            });
        }

        let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_special = password.chars().any(|c| SPECIAL_CHARACTERS.contains(c));

        if has_lower && has_upper && has_digit && has_special {
            Ok(())
        } else {
            Err(PolicyError::WeakComposition)
        }
    }
}
