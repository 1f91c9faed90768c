//! In-memory stores using a Tokio mutex for single-process deployments.
//!
//! Each store keeps its whole state behind one mutex, so every operation
//! (including uniqueness checks) is a single critical section. Nothing
//! survives a restart.

pub mod account;
pub mod event;
pub mod registration;

pub use account::MemoryAccountStore;
pub use event::MemoryEventStore;
pub use registration::MemoryRegistrationStore;
