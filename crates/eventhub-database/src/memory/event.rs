//! In-memory event store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use tokio::sync::Mutex;

use eventhub_core::error::AppError;
use eventhub_core::types::{AccountId, EventId, PageRequest, PageResponse};
use eventhub_entity::event::{Event, EventStatus, NewEvent};

use crate::store::EventStore;

/// In-memory event store. Events are kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryEventStore {
    events: Arc<Mutex<Vec<Event>>>,
}

impl MemoryEventStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn insert(&self, event: NewEvent) -> Result<Event, AppError> {
        let now = Utc::now();
        let created = Event {
            id: EventId::new(),
            title: event.title,
            venue: event.venue,
            description: event.description,
            starts_at: event.starts_at,
            ends_at: event.ends_at,
            cost: event.cost,
            event_type: event.event_type,
            image: event.image,
            admin_id: event.admin_id,
            admin_name: event.admin_name,
            status: EventStatus::Active,
            created_at: now,
            updated_at: now,
        };
        self.events.lock().await.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, AppError> {
        let events = self.events.lock().await;
        Ok(events.iter().find(|e| e.id == id).cloned())
    }

    async fn deactivate_ended(&self, now: NaiveDateTime) -> Result<u64, AppError> {
        let mut events = self.events.lock().await;
        let stamp = Utc::now();
        let mut changed = 0;
        for event in events
            .iter_mut()
            .filter(|e| e.status == EventStatus::Active && e.has_ended(now))
        {
            event.status = EventStatus::Inactive;
            event.updated_at = stamp;
            changed += 1;
        }
        Ok(changed)
    }

    async fn list_active(&self, page: PageRequest) -> Result<PageResponse<Event>, AppError> {
        let events = self.events.lock().await;
        let active: Vec<&Event> = events
            .iter()
            .rev()
            .filter(|e| e.status == EventStatus::Active)
            .collect();
        let total = active.len() as u64;
        let items = active
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit as usize)
            .cloned()
            .collect();
        Ok(PageResponse::new(items, page, total))
    }

    async fn list_active_by_admin(&self, admin_id: AccountId) -> Result<Vec<Event>, AppError> {
        let events = self.events.lock().await;
        Ok(events
            .iter()
            .rev()
            .filter(|e| e.admin_id == admin_id && e.status == EventStatus::Active)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventhub_entity::event::{EventType, SCHEDULE_FORMAT};

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, SCHEDULE_FORMAT).unwrap()
    }

    fn new_event(title: &str, admin_id: AccountId, ends: &str) -> NewEvent {
        NewEvent {
            title: title.to_string(),
            venue: "Hall".to_string(),
            description: "Desc".to_string(),
            starts_at: at("2020-01-01 09:00"),
            ends_at: at(ends),
            cost: 0.0,
            event_type: EventType::Free,
            image: "data:image/png;base64,AA".to_string(),
            admin_id,
            admin_name: "Org".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_active_newest_first_with_pagination() {
        let store = MemoryEventStore::new();
        let admin = AccountId::new();
        for i in 0..5 {
            store
                .insert(new_event(&format!("e{i}"), admin, "2999-01-01 10:00"))
                .await
                .unwrap();
        }

        let page = store.list_active(PageRequest::new(1, 2)).await.unwrap();
        let titles: Vec<_> = page.items.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["e4", "e3"]);
        assert_eq!(page.pagination.total, 5);
        assert!(page.pagination.has_more);

        let last = store.list_active(PageRequest::new(3, 2)).await.unwrap();
        assert_eq!(last.items.len(), 1);
        assert!(!last.pagination.has_more);
    }

    #[tokio::test]
    async fn test_deactivate_ended() {
        let store = MemoryEventStore::new();
        let admin = AccountId::new();
        let past = store
            .insert(new_event("past", admin, "2020-01-01 10:00"))
            .await
            .unwrap();
        store
            .insert(new_event("future", admin, "2999-01-01 10:00"))
            .await
            .unwrap();

        let changed = store
            .deactivate_ended(at("2024-06-01 00:00"))
            .await
            .unwrap();
        assert_eq!(changed, 1);

        let stored = store.find_by_id(past.id).await.unwrap().unwrap();
        assert_eq!(stored.status, EventStatus::Inactive);
        let listed = store.list_active_by_admin(admin).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "future");
    }
}
