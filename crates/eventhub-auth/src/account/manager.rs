//! Account manager: signup and login orchestration.

use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use eventhub_core::config::AuthConfig;
use eventhub_core::error::{AppError, FieldViolation};
use eventhub_database::store::CredentialStore;
use eventhub_entity::account::{Account, Namespace, NewAccount, Role, normalize_email};

use crate::jwt::{Claims, JwtEncoder};
use crate::lockout::LockoutTracker;
use crate::password::{PasswordHasher, PasswordValidator};

use super::input::{LoginInput, SignupInput};

/// Result of a successful signup or login.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    /// Signed identity token.
    pub token: String,
    /// The authenticated account.
    pub account: Account,
    /// Role embedded in the token.
    pub role: Role,
}

/// Runs the signup and login flows for both namespaces.
#[derive(Debug, Clone)]
pub struct AccountManager {
    store: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
    policy: PasswordValidator,
    encoder: JwtEncoder,
    lockout: LockoutTracker,
}

impl AccountManager {
    /// Creates a manager from its collaborators.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: PasswordHasher,
        encoder: JwtEncoder,
        config: &AuthConfig,
    ) -> Self {
        Self {
            lockout: LockoutTracker::new(Arc::clone(&store), config.max_failed_attempts),
            policy: PasswordValidator::new(config),
            store,
            hasher,
            encoder,
        }
    }

    /// Registers a new account and issues its first token.
    pub async fn signup(
        &self,
        namespace: Namespace,
        input: SignupInput,
    ) -> Result<AuthOutcome, AppError> {
        let display_name = self.check_signup(namespace, &input)?;
        let email = normalize_email(&input.email);

        let account = self
            .store
            .insert(
                namespace,
                NewAccount {
                    email,
                    display_name,
                    password_hash: self.hasher.hash_password(&input.password),
                },
            )
            .await?;

        info!(
            account_id = %account.id,
            email = %account.email,
            namespace = %namespace,
            "Account registered"
        );

        let role = namespace.role();
        let token = self.encoder.issue(&account, role)?;
        Ok(AuthOutcome {
            token,
            account,
            role,
        })
    }

    /// Authenticates an account and issues a token.
    ///
    /// For users: lookup, lock check, password check (counting failures),
    /// active check, then counter reset. Admins skip the lockout steps.
    pub async fn login(
        &self,
        namespace: Namespace,
        input: LoginInput,
    ) -> Result<AuthOutcome, AppError> {
        if let Err(errors) = input.validate() {
            return Err(AppError::invalid(FieldViolation::from_errors(&errors)));
        }

        let account = self
            .store
            .find_by_email(namespace, &input.email)
            .await?
            .ok_or_else(invalid_credentials)?;

        let tracks_lockout = namespace.tracks_lockout();

        if tracks_lockout && account.is_locked() {
            warn!(account_id = %account.id, "Login attempt on locked account");
            return Err(account_locked());
        }

        if !self
            .hasher
            .verify_password(&input.password, &account.password_hash)
        {
            if tracks_lockout {
                let state = self.lockout.record_failure(&account).await?;
                if state.locked {
                    return Err(account_locked());
                }
            } else {
                warn!(account_id = %account.id, namespace = %namespace, "Failed login attempt");
            }
            return Err(invalid_credentials());
        }

        if tracks_lockout && account.is_disabled() {
            warn!(account_id = %account.id, "Login attempt on disabled account");
            return Err(AppError::account_disabled("Account is disabled"));
        }

        let account = self
            .store
            .record_successful_login(namespace, account.id)
            .await?;

        info!(
            account_id = %account.id,
            namespace = %namespace,
            "Login successful"
        );

        let role = namespace.role();
        let token = self.encoder.issue(&account, role)?;
        Ok(AuthOutcome {
            token,
            account,
            role,
        })
    }

    /// Loads the account a verified token refers to.
    pub async fn profile(&self, claims: &Claims) -> Result<Account, AppError> {
        self.store
            .find_by_id(claims.role.namespace(), claims.sub)
            .await?
            .ok_or_else(|| AppError::unauthenticated("Account no longer exists"))
    }

    /// Validates a signup payload, collecting every violation, and returns
    /// the display name to store.
    fn check_signup(
        &self,
        namespace: Namespace,
        input: &SignupInput,
    ) -> Result<String, AppError> {
        let mut violations = match input.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => FieldViolation::from_errors(&errors),
        };

        if !input.password.is_empty() {
            if let Err(policy) = self.policy.validate(&input.password) {
                violations.push(policy.violation());
            }
        }

        let name = input
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty());
        let display_name = match (namespace, name) {
            (_, Some(name)) => name.to_string(),
            (Namespace::Admin, None) => default_display_name(&input.email),
            (Namespace::User, None) => {
                violations.push(FieldViolation::new("name", "Name is required"));
                String::new()
            }
        };

        if violations.is_empty() {
            Ok(display_name)
        } else {
            Err(AppError::invalid(violations))
        }
    }
}

/// The local part of an email address.
fn default_display_name(email: &str) -> String {
    let email = normalize_email(email);
    email
        .split_once('@')
        .map(|(local, _)| local.to_string())
        .unwrap_or(email)
}

fn invalid_credentials() -> AppError {
    AppError::unauthenticated("Invalid email or password")
}

fn account_locked() -> AppError {
    AppError::account_locked("Account is locked due to too many failed login attempts")
}
