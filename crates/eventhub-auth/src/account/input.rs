//! Credential payloads accepted by signup and login.
//!
//! Missing fields decode as empty strings so that every absent or invalid
//! field is reported together by validation.

use std::borrow::Cow;
use std::fmt;

use serde::Deserialize;
use validator::{Validate, ValidateEmail, ValidationError};

/// Signup payload.
#[derive(Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupInput {
    /// Email address.
    #[serde(default)]
    #[validate(custom(function = "email_field"))]
    pub email: String,
    /// Plaintext password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Must equal `password`.
    #[serde(default)]
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
    /// Display name; required for users, optional for admins.
    #[serde(default)]
    pub name: Option<String>,
}

impl fmt::Debug for SignupInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupInput")
            .field("email", &self.email)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Login payload.
#[derive(Clone, Default, Deserialize, Validate)]
pub struct LoginInput {
    /// Email address.
    #[serde(default)]
    #[validate(custom(function = "email_field"))]
    pub email: String,
    /// Plaintext password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginInput")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Required, and well-formed once trimmed.
fn email_field(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(
            ValidationError::new("required").with_message(Cow::Borrowed("Email is required"))
        );
    }
    if !email.validate_email() {
        return Err(ValidationError::new("email")
            .with_message(Cow::Borrowed("Please provide a valid email address")));
    }
    Ok(())
}
