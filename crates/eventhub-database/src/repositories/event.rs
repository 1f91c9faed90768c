//! Event repository implementation.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;

use eventhub_core::error::AppError;
use eventhub_core::types::{AccountId, EventId, PageRequest, PageResponse};
use eventhub_entity::event::{Event, EventStatus, NewEvent};

use crate::connection::DatabasePool;
use crate::error::timed;
use crate::store::EventStore;

/// Repository for the `events` table.
#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
    timeout: Duration,
}

impl EventRepository {
    /// Create a new event repository.
    pub fn new(db: &DatabasePool) -> Self {
        Self {
            pool: db.pool().clone(),
            timeout: db.operation_timeout(),
        }
    }
}

#[async_trait]
impl EventStore for EventRepository {
    async fn insert(&self, event: NewEvent) -> Result<Event, AppError> {
        timed(
            self.timeout,
            "Failed to insert event",
            sqlx::query_as::<_, Event>(
                "INSERT INTO events \
                    (id, title, venue, description, starts_at, ends_at, cost, event_type, \
                     image, admin_id, admin_name, status) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
                 RETURNING *",
            )
            .bind(EventId::new())
            .bind(&event.title)
            .bind(&event.venue)
            .bind(&event.description)
            .bind(event.starts_at)
            .bind(event.ends_at)
            .bind(event.cost)
            .bind(event.event_type)
            .bind(&event.image)
            .bind(event.admin_id)
            .bind(&event.admin_name)
            .bind(EventStatus::Active)
            .fetch_one(&self.pool),
        )
        .await
    }

    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, AppError> {
        timed(
            self.timeout,
            "Failed to find event",
            sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn deactivate_ended(&self, now: NaiveDateTime) -> Result<u64, AppError> {
        timed(
            self.timeout,
            "Failed to deactivate ended events",
            sqlx::query(
                "UPDATE events SET status = $1, updated_at = NOW() \
                 WHERE status = $2 AND ends_at < $3",
            )
            .bind(EventStatus::Inactive)
            .bind(EventStatus::Active)
            .bind(now)
            .execute(&self.pool),
        )
        .await
        .map(|r| r.rows_affected())
    }

    async fn list_active(&self, page: PageRequest) -> Result<PageResponse<Event>, AppError> {
        let total: i64 = timed(
            self.timeout,
            "Failed to count events",
            sqlx::query_scalar("SELECT COUNT(*) FROM events WHERE status = $1")
                .bind(EventStatus::Active)
                .fetch_one(&self.pool),
        )
        .await?;

        let events = timed(
            self.timeout,
            "Failed to list events",
            sqlx::query_as::<_, Event>(
                "SELECT * FROM events WHERE status = $1 \
                 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
            )
            .bind(EventStatus::Active)
            .bind(i64::try_from(page.limit).unwrap_or(i64::MAX))
            .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(PageResponse::new(events, page, total as u64))
    }

    async fn list_active_by_admin(&self, admin_id: AccountId) -> Result<Vec<Event>, AppError> {
        timed(
            self.timeout,
            "Failed to list admin events",
            sqlx::query_as::<_, Event>(
                "SELECT * FROM events WHERE admin_id = $1 AND status = $2 \
                 ORDER BY created_at DESC",
            )
            .bind(admin_id)
            .bind(EventStatus::Active)
            .fetch_all(&self.pool),
        )
        .await
    }
}
