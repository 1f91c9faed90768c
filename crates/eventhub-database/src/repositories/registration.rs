//! Registration repository implementation.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use eventhub_core::error::AppError;
use eventhub_core::types::{AccountId, EventId, RegistrationId};
use eventhub_entity::registration::{NewRegistration, Registration};

use crate::connection::DatabasePool;
use crate::error::{is_unique_violation, map_sqlx_error, timed};
use crate::store::{RegistrationStore, duplicate_registration};

/// Repository for the `registrations` table.
#[derive(Debug, Clone)]
pub struct RegistrationRepository {
    pool: PgPool,
    timeout: Duration,
}

impl RegistrationRepository {
    /// Create a new registration repository.
    pub fn new(db: &DatabasePool) -> Self {
        Self {
            pool: db.pool().clone(),
            timeout: db.operation_timeout(),
        }
    }
}

#[async_trait]
impl RegistrationStore for RegistrationRepository {
    async fn insert(&self, registration: NewRegistration) -> Result<Registration, AppError> {
        let query = sqlx::query_as::<_, Registration>(
            "INSERT INTO registrations \
                (id, event_id, event_title, user_id, user_name, user_email, phone_number, \
                 payment_status, payment_method, event_type, event_cost) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING *",
        )
        .bind(RegistrationId::new())
        .bind(registration.event_id)
        .bind(&registration.event_title)
        .bind(registration.user_id)
        .bind(&registration.user_name)
        .bind(&registration.user_email)
        .bind(&registration.phone_number)
        .bind(&registration.payment_status)
        .bind(&registration.payment_method)
        .bind(registration.event_type)
        .bind(registration.event_cost)
        .fetch_one(&self.pool);

        match tokio::time::timeout(self.timeout, query).await {
            Ok(Ok(created)) => Ok(created),
            Ok(Err(e)) if is_unique_violation(&e) => Err(duplicate_registration()),
            Ok(Err(e)) => Err(map_sqlx_error("Failed to insert registration", e)),
            Err(_) => Err(AppError::store_timeout("Failed to insert registration")),
        }
    }

    async fn list_for_event(&self, event_id: EventId) -> Result<Vec<Registration>, AppError> {
        timed(
            self.timeout,
            "Failed to list event registrations",
            sqlx::query_as::<_, Registration>(
                "SELECT * FROM registrations WHERE event_id = $1 \
                 ORDER BY registration_date DESC",
            )
            .bind(event_id)
            .fetch_all(&self.pool),
        )
        .await
    }

    async fn list_for_user(&self, user_id: AccountId) -> Result<Vec<Registration>, AppError> {
        timed(
            self.timeout,
            "Failed to list user registrations",
            sqlx::query_as::<_, Registration>(
                "SELECT * FROM registrations WHERE user_id = $1 \
                 ORDER BY registration_date DESC",
            )
            .bind(user_id)
            .fetch_all(&self.pool),
        )
        .await
    }
}
