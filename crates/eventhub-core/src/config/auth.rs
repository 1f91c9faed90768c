//! Authentication configuration.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::app::Environment;
use crate::error::AppError;

/// Signing key used when no secret is configured in development or test.
const DEV_SIGNING_KEY: &str = "eventhub-insecure-development-key";

/// Salt used when none is configured.
const DEFAULT_PASSWORD_SALT: &str = "default-salt-value";

/// Authentication and credential configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256). Required outside development.
    #[serde(default)]
    pub jwt_secret: Option<String>,
    /// Process-wide password salt.
    #[serde(default)]
    pub password_salt: Option<String>,
    /// Token lifetime in days.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_days: i64,
    /// Failed user logins before the account locks.
    #[serde(default = "default_max_failed")]
    pub max_failed_attempts: u32,
    /// Minimum password length in characters.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl AuthConfig {
    /// Resolve the token signing secret for `env`.
    ///
    /// A missing secret is fatal in staging and production.
    pub fn signing_secret(&self, env: Environment) -> Result<String, AppError> {
        match self.jwt_secret.as_deref().map(str::trim) {
            Some(secret) if !secret.is_empty() => Ok(secret.to_string()),
            _ if env.allows_fallback_secrets() => {
                warn!(
                    environment = %env,
                    "auth.jwt_secret is not set; using the built-in development key"
                );
                Ok(DEV_SIGNING_KEY.to_string())
            }
            _ => Err(AppError::configuration(format!(
                "auth.jwt_secret must be set in the {env} environment"
            ))),
        }
    }

    /// Resolve the password salt, falling back to the legacy default.
    pub fn resolved_password_salt(&self) -> String {
        match self.password_salt.as_deref() {
            Some(salt) if !salt.is_empty() => salt.to_string(),
            _ => {
                warn!("auth.password_salt is not set; using the default salt");
                DEFAULT_PASSWORD_SALT.to_string()
            }
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            password_salt: None,
            token_ttl_days: default_token_ttl(),
            max_failed_attempts: default_max_failed(),
            password_min_length: default_password_min(),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &redact(&self.jwt_secret))
            .field("password_salt", &redact(&self.password_salt))
            .field("token_ttl_days", &self.token_ttl_days)
            .field("max_failed_attempts", &self.max_failed_attempts)
            .field("password_min_length", &self.password_min_length)
            .finish()
    }
}

fn default_token_ttl() -> i64 {
    7
}

fn default_max_failed() -> u32 {
    5
}

fn default_password_min() -> usize {
    8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_missing_secret_is_fatal_in_production() {
        let config = AuthConfig::default();
        let err = config.signing_secret(Environment::Production).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert!(config.signing_secret(Environment::Staging).is_err());
    }

    #[test]
    fn test_missing_secret_falls_back_in_development() {
        let config = AuthConfig::default();
        let secret = config.signing_secret(Environment::Development).unwrap();
        assert_eq!(secret, DEV_SIGNING_KEY);
    }

    #[test]
    fn test_blank_secret_counts_as_missing() {
        let config = AuthConfig {
            jwt_secret: Some("   ".into()),
            ..AuthConfig::default()
        };
        assert!(config.signing_secret(Environment::Production).is_err());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = AuthConfig {
            jwt_secret: Some("super-secret".into()),
            password_salt: Some("pepper".into()),
            ..AuthConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(!rendered.contains("pepper"));
        assert!(rendered.contains("REDACTED"));
    }

    #[test]
    fn test_salt_default() {
        assert_eq!(
            AuthConfig::default().resolved_password_salt(),
            DEFAULT_PASSWORD_SALT
        );
    }
}
