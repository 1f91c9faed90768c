//! Bearer-token access gate.
//!
//! Every protected operation runs through [`AccessGate::authorize`]: the
//! bearer token is extracted and verified, then its role is compared to the
//! role the operation requires.

use tracing::debug;

use eventhub_core::error::AppError;
use eventhub_entity::account::Role;

use crate::jwt::{Claims, JwtDecoder, TokenError};

/// Verifies bearer tokens and enforces required roles.
#[derive(Debug, Clone)]
pub struct AccessGate {
    decoder: JwtDecoder,
}

impl AccessGate {
    /// Creates a gate over the given decoder.
    pub fn new(decoder: JwtDecoder) -> Self {
        Self { decoder }
    }

    /// Verifies the `Authorization` header value and returns its claims.
    pub fn authenticate(&self, header: Option<&str>) -> Result<Claims, AppError> {
        let token = bearer_token(header)?;
        self.decoder.verify(token).map_err(|e| {
            debug!(reason = %e, "Rejected bearer token");
            match e {
                TokenError::Expired => AppError::unauthenticated("Token expired"),
                TokenError::Malformed => AppError::unauthenticated("Invalid token"),
            }
        })
    }

    /// Verifies the header and requires the token to carry `required`.
    pub fn authorize(&self, header: Option<&str>, required: Role) -> Result<Claims, AppError> {
        let claims = self.authenticate(header)?;
        require_role(claims.role, required).inspect_err(|_| {
            debug!(account_id = %claims.sub, role = %claims.role, %required, "Role mismatch");
        })?;
        Ok(claims)
    }
}

/// Fails with `Forbidden` unless `actual` is the `required` role.
pub fn require_role(actual: Role, required: Role) -> Result<(), AppError> {
    if actual == required {
        return Ok(());
    }
    Err(AppError::forbidden(match required {
        Role::Admin => "Unauthorized. Admin access required.",
        Role::User => "Only users can access this endpoint",
    }))
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AppError> {
    header
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::unauthenticated("Authentication required"))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use eventhub_core::config::AuthConfig;
    use eventhub_core::error::ErrorKind;
    use eventhub_core::types::AccountId;
    use eventhub_entity::account::Account;

    use super::*;
    use crate::jwt::JwtEncoder;

    const SECRET: &str = "gate-secret";

    fn token_for(role: Role) -> String {
        let now = Utc::now();
        let account = Account {
            id: AccountId::new(),
            email: "a@b.com".into(),
            display_name: "A".into(),
            password_hash: String::new(),
            login_attempts: 0,
            account_locked: false,
            is_active: true,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        };
        JwtEncoder::new(SECRET, &AuthConfig::default())
            .issue(&account, role)
            .unwrap()
    }

    fn gate() -> AccessGate {
        AccessGate::new(JwtDecoder::new(SECRET))
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token(Some("Bearer abc")).unwrap(), "abc");
        assert!(bearer_token(None).is_err());
        assert!(bearer_token(Some("Basic abc")).is_err());
        assert!(bearer_token(Some("bearer abc")).is_err());
        assert!(bearer_token(Some("Bearer ")).is_err());
    }

    #[test]
    fn test_matching_role_passes() {
        let header = format!("Bearer {}", token_for(Role::Admin));
        let claims = gate().authorize(Some(&header), Role::Admin).unwrap();
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn test_role_mismatch_is_forbidden() {
        let header = format!("Bearer {}", token_for(Role::Admin));
        let err = gate().authorize(Some(&header), Role::User).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[test]
    fn test_invalid_token_is_unauthenticated() {
        let err = gate()
            .authorize(Some("Bearer nope"), Role::User)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);

        let err = gate().authenticate(None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }
}
