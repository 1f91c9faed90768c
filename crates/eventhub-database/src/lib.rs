//! # eventhub-database
//!
//! Store traits for accounts, events, and registrations, with a
//! PostgreSQL implementation (connection pool, migrations, repositories)
//! and an in-memory implementation for development and tests.

pub mod connection;
pub mod error;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use provider::Stores;
pub use store::{CredentialStore, EventStore, RegistrationStore};
