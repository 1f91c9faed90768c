//! Event publishing and listing service.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use eventhub_core::error::AppError;
use eventhub_core::types::{PageRequest, PageResponse};
use eventhub_database::store::EventStore;
use eventhub_entity::account::Role;
use eventhub_entity::event::{Event, NewEvent};

use super::request::CreateEventRequest;
use crate::context::RequestContext;

/// Creates events and serves the public and per-admin listings.
#[derive(Debug, Clone)]
pub struct EventService {
    /// Event store.
    events: Arc<dyn EventStore>,
}

impl EventService {
    /// Creates a new event service.
    pub fn new(events: Arc<dyn EventStore>) -> Self {
        Self { events }
    }

    /// Publishes a new event owned by the calling admin.
    pub async fn create_event(
        &self,
        ctx: &RequestContext,
        req: CreateEventRequest,
    ) -> Result<Event, AppError> {
        ctx.require(Role::Admin)?;
        let checked = req.check().map_err(AppError::invalid)?;

        let event = self
            .events
            .insert(NewEvent {
                title: checked.title,
                venue: checked.venue,
                description: checked.description,
                starts_at: checked.starts_at,
                ends_at: checked.ends_at,
                cost: checked.cost,
                event_type: checked.event_type,
                image: checked.image,
                admin_id: ctx.account_id,
                admin_name: ctx.display_name.clone(),
            })
            .await?;

        info!(
            event_id = %event.id,
            account_id = %ctx.account_id,
            event_type = %event.event_type,
            "Event created"
        );
        Ok(event)
    }

    /// Lists active events, newest first.
    ///
    /// Events that have already ended are deactivated before the page is
    /// read, so they never appear in the listing.
    pub async fn list_events(&self, page: PageRequest) -> Result<PageResponse<Event>, AppError> {
        self.expire_ended().await?;
        self.events.list_active(page).await
    }

    /// Lists the calling admin's active events, newest first.
    ///
    /// Ended events are deactivated first, as for the public listing.
    pub async fn list_admin_events(&self, ctx: &RequestContext) -> Result<Vec<Event>, AppError> {
        ctx.require(Role::Admin)?;
        self.expire_ended().await?;
        self.events.list_active_by_admin(ctx.account_id).await
    }

    async fn expire_ended(&self) -> Result<(), AppError> {
        let now = Utc::now().naive_utc();
        let expired = self.events.deactivate_ended(now).await?;
        if expired > 0 {
            debug!(count = expired, "Deactivated ended events");
        }
        Ok(())
    }
}
