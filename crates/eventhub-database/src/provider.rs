//! Store selection from configuration.

use std::sync::Arc;

use tracing::{info, warn};

use eventhub_core::config::{DatabaseConfig, StoreProvider};
use eventhub_core::error::AppError;

use crate::connection::DatabasePool;
use crate::memory::{MemoryAccountStore, MemoryEventStore, MemoryRegistrationStore};
use crate::migration::run_migrations;
use crate::repositories::{AccountRepository, EventRepository, RegistrationRepository};
use crate::store::{CredentialStore, EventStore, RegistrationStore};

/// Shared handles to every store the application uses.
#[derive(Debug, Clone)]
pub struct Stores {
    /// Admin and user accounts.
    pub credentials: Arc<dyn CredentialStore>,
    /// Events.
    pub events: Arc<dyn EventStore>,
    /// Registrations.
    pub registrations: Arc<dyn RegistrationStore>,
    /// The PostgreSQL pool, when one backs the stores.
    pub pool: Option<DatabasePool>,
}

impl Stores {
    /// Build the stores selected by `config.provider`.
    ///
    /// For PostgreSQL this connects and applies pending migrations.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self, AppError> {
        match config.provider {
            StoreProvider::Postgres => {
                let db = DatabasePool::connect(config).await?;
                run_migrations(db.pool()).await?;
                info!("Using PostgreSQL stores");
                Ok(Self::postgres(db))
            }
            StoreProvider::Memory => {
                warn!("Using in-memory stores; data will not survive a restart");
                Ok(Self::memory())
            }
        }
    }

    /// Stores backed by PostgreSQL.
    pub fn postgres(db: DatabasePool) -> Self {
        Self {
            credentials: Arc::new(AccountRepository::new(&db)),
            events: Arc::new(EventRepository::new(&db)),
            registrations: Arc::new(RegistrationRepository::new(&db)),
            pool: Some(db),
        }
    }

    /// Fresh, empty in-memory stores.
    pub fn memory() -> Self {
        Self {
            credentials: Arc::new(MemoryAccountStore::new()),
            events: Arc::new(MemoryEventStore::new()),
            registrations: Arc::new(MemoryRegistrationStore::new()),
            pool: None,
        }
    }

    /// Close the underlying pool, if any.
    pub async fn close(&self) {
        if let Some(db) = &self.pool {
            db.close().await;
        }
    }
}
