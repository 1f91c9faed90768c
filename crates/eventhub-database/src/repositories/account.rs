//! Account repository implementation.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use eventhub_core::error::AppError;
use eventhub_core::types::AccountId;
use eventhub_entity::account::{
    Account, AccountUpdate, LockoutState, Namespace, NewAccount, normalize_email,
};

use crate::connection::DatabasePool;
use crate::error::{is_unique_violation, map_sqlx_error, timed};
use crate::store::{CredentialStore, account_not_found, duplicate_email};

/// Repository for the `admins` and `users` tables.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: PgPool,
    timeout: Duration,
}

impl AccountRepository {
    /// Create a new account repository.
    pub fn new(db: &DatabasePool) -> Self {
        Self {
            pool: db.pool().clone(),
            timeout: db.operation_timeout(),
        }
    }
}

#[async_trait]
impl CredentialStore for AccountRepository {
    async fn find_by_email(
        &self,
        namespace: Namespace,
        email: &str,
    ) -> Result<Option<Account>, AppError> {
        let sql = format!(
            "SELECT * FROM {} WHERE LOWER(email) = $1",
            namespace.table()
        );
        let email = normalize_email(email);
        timed(
            self.timeout,
            "Failed to find account by email",
            sqlx::query_as::<_, Account>(&sql)
                .bind(&email)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn find_by_id(
        &self,
        namespace: Namespace,
        id: AccountId,
    ) -> Result<Option<Account>, AppError> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", namespace.table());
        timed(
            self.timeout,
            "Failed to find account by id",
            sqlx::query_as::<_, Account>(&sql)
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn insert(
        &self,
        namespace: Namespace,
        account: NewAccount,
    ) -> Result<Account, AppError> {
        let sql = format!(
            "INSERT INTO {} (id, email, display_name, password_hash) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
            namespace.table()
        );
        let query = sqlx::query_as::<_, Account>(&sql)
            .bind(AccountId::new())
            .bind(normalize_email(&account.email))
            .bind(&account.display_name)
            .bind(&account.password_hash)
            .fetch_one(&self.pool);

        match tokio::time::timeout(self.timeout, query).await {
            Ok(Ok(created)) => Ok(created),
            Ok(Err(e)) if is_unique_violation(&e) => Err(duplicate_email(namespace)),
            Ok(Err(e)) => Err(map_sqlx_error("Failed to insert account", e)),
            Err(_) => Err(AppError::store_timeout("Failed to insert account")),
        }
    }

    async fn update_fields(
        &self,
        namespace: Namespace,
        id: AccountId,
        update: AccountUpdate,
    ) -> Result<Account, AppError> {
        let sql = format!(
            "UPDATE {} SET \
                display_name = COALESCE($2, display_name), \
                is_active = COALESCE($3, is_active), \
                account_locked = COALESCE($4, account_locked), \
                login_attempts = COALESCE($5, login_attempts), \
                last_login_at = COALESCE($6, last_login_at), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
            namespace.table()
        );
        timed(
            self.timeout,
            "Failed to update account",
            sqlx::query_as::<_, Account>(&sql)
                .bind(id)
                .bind(update.display_name)
                .bind(update.is_active)
                .bind(update.account_locked)
                .bind(update.login_attempts)
                .bind(update.last_login_at)
                .fetch_optional(&self.pool),
        )
        .await?
        .ok_or_else(|| account_not_found(namespace))
    }

    async fn record_failed_login(
        &self,
        namespace: Namespace,
        id: AccountId,
        threshold: u32,
    ) -> Result<LockoutState, AppError> {
        // SET expressions see the pre-update row.
        let sql = format!(
            "UPDATE {} SET \
                login_attempts = login_attempts + 1, \
                account_locked = account_locked OR login_attempts + 1 >= $2, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING login_attempts, account_locked",
            namespace.table()
        );
        let threshold = i32::try_from(threshold).unwrap_or(i32::MAX);
        let (attempts, locked) = timed(
            self.timeout,
            "Failed to record failed login",
            sqlx::query_as::<_, (i32, bool)>(&sql)
                .bind(id)
                .bind(threshold)
                .fetch_optional(&self.pool),
        )
        .await?
        .ok_or_else(|| account_not_found(namespace))?;

        Ok(LockoutState { attempts, locked })
    }

    async fn record_successful_login(
        &self,
        namespace: Namespace,
        id: AccountId,
    ) -> Result<Account, AppError> {
        let sql = format!(
            "UPDATE {} SET login_attempts = 0, last_login_at = NOW(), updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
            namespace.table()
        );
        timed(
            self.timeout,
            "Failed to record login",
            sqlx::query_as::<_, Account>(&sql)
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await?
        .ok_or_else(|| account_not_found(namespace))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        timed(
            self.timeout,
            "Health check failed",
            sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(&self.pool),
        )
        .await
        .map(|_| ())
    }
}
