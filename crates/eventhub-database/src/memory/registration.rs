//! In-memory registration store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use eventhub_core::error::AppError;
use eventhub_core::types::{AccountId, EventId, RegistrationId};
use eventhub_entity::registration::{NewRegistration, Registration};

use crate::store::{RegistrationStore, duplicate_registration};

/// In-memory registration store. Registrations are kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistrationStore {
    registrations: Arc<Mutex<Vec<Registration>>>,
}

impl MemoryRegistrationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RegistrationStore for MemoryRegistrationStore {
    async fn insert(&self, registration: NewRegistration) -> Result<Registration, AppError> {
        let mut registrations = self.registrations.lock().await;
        if registrations
            .iter()
            .any(|r| r.event_id == registration.event_id && r.user_id == registration.user_id)
        {
            return Err(duplicate_registration());
        }

        let created = Registration {
            id: RegistrationId::new(),
            event_id: registration.event_id,
            event_title: registration.event_title,
            user_id: registration.user_id,
            user_name: registration.user_name,
            user_email: registration.user_email,
            phone_number: registration.phone_number,
            payment_status: registration.payment_status,
            payment_method: registration.payment_method,
            registration_date: Utc::now(),
            event_type: registration.event_type,
            event_cost: registration.event_cost,
        };
        registrations.push(created.clone());
        Ok(created)
    }

    async fn list_for_event(&self, event_id: EventId) -> Result<Vec<Registration>, AppError> {
        let registrations = self.registrations.lock().await;
        Ok(registrations
            .iter()
            .rev()
            .filter(|r| r.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn list_for_user(&self, user_id: AccountId) -> Result<Vec<Registration>, AppError> {
        let registrations = self.registrations.lock().await;
        Ok(registrations
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }
}
