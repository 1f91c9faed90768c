//! Registration service: sign-ups for events and the views over them.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use eventhub_core::error::AppError;
use eventhub_core::types::EventId;
use eventhub_database::store::{EventStore, RegistrationStore};
use eventhub_entity::account::Role;
use eventhub_entity::event::Event;
use eventhub_entity::registration::{
    DEFAULT_PAYMENT_METHOD, DEFAULT_PAYMENT_STATUS, NewRegistration, Registration,
};

use crate::context::RequestContext;

/// Request body for registering for an event. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    /// Contact phone number.
    pub phone_number: String,
    /// Payment status; `pending` when absent.
    pub payment_status: Option<String>,
    /// Payment method; `none` when absent.
    pub payment_method: Option<String>,
}

/// Outcome of a successful registration.
#[derive(Debug, Clone)]
pub struct RegistrationReceipt {
    /// The stored registration.
    pub registration: Registration,
    /// Title of the event registered for.
    pub event_title: String,
    /// Whether the event is paid.
    pub payment_required: bool,
}

/// A user's registration joined with the event it refers to.
#[derive(Debug, Clone)]
pub struct RegisteredEvent {
    /// The event.
    pub event: Event,
    /// The caller's registration for it.
    pub registration: Registration,
}

/// Manages registrations for events.
#[derive(Debug, Clone)]
pub struct RegistrationService {
    /// Event store.
    events: Arc<dyn EventStore>,
    /// Registration store.
    registrations: Arc<dyn RegistrationStore>,
}

impl RegistrationService {
    /// Creates a new registration service.
    pub fn new(events: Arc<dyn EventStore>, registrations: Arc<dyn RegistrationStore>) -> Self {
        Self {
            events,
            registrations,
        }
    }

    /// Registers the calling user for `event_id`.
    ///
    /// A second registration for the same event is rejected by the store.
    pub async fn register(
        &self,
        ctx: &RequestContext,
        event_id: EventId,
        req: RegisterRequest,
    ) -> Result<RegistrationReceipt, AppError> {
        ctx.require(Role::User)?;

        let event = self
            .events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        let registration = self
            .registrations
            .insert(NewRegistration {
                event_id: event.id,
                event_title: event.title.clone(),
                user_id: ctx.account_id,
                user_name: ctx.display_name.clone(),
                user_email: ctx.email.clone(),
                phone_number: req.phone_number.trim().to_string(),
                payment_status: non_blank(req.payment_status, DEFAULT_PAYMENT_STATUS),
                payment_method: non_blank(req.payment_method, DEFAULT_PAYMENT_METHOD),
                event_type: event.event_type,
                event_cost: event.cost,
            })
            .await?;

        info!(
            registration_id = %registration.id,
            event_id = %event.id,
            account_id = %ctx.account_id,
            "User registered for event"
        );

        Ok(RegistrationReceipt {
            registration,
            payment_required: event.event_type.requires_payment(),
            event_title: event.title,
        })
    }

    /// Lists registrations for `event_id`, newest first.
    pub async fn participants(
        &self,
        ctx: &RequestContext,
        event_id: EventId,
    ) -> Result<Vec<Registration>, AppError> {
        ctx.require(Role::Admin)?;
        self.registrations.list_for_event(event_id).await
    }

    /// Lists the calling user's registrations with their events, newest first.
    pub async fn registered_events(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<RegisteredEvent>, AppError> {
        ctx.require(Role::User)?;

        let registrations = self.registrations.list_for_user(ctx.account_id).await?;
        let mut joined = Vec::with_capacity(registrations.len());
        for registration in registrations {
            match self.events.find_by_id(registration.event_id).await? {
                Some(event) => joined.push(RegisteredEvent {
                    event,
                    registration,
                }),
                None => warn!(
                    registration_id = %registration.id,
                    event_id = %registration.event_id,
                    "Registration refers to a missing event"
                ),
            }
        }
        Ok(joined)
    }
}

fn non_blank(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
