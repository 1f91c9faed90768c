//! # eventhub-service
//!
//! Business logic service layer for EventHub. Services receive a
//! [`RequestContext`] describing the verified caller and orchestrate the
//! stores to implement event publishing and registration.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod event;
pub mod registration;

pub use context::RequestContext;
pub use event::{CreateEventRequest, EventService};
pub use registration::{RegisterRequest, RegisteredEvent, RegistrationReceipt, RegistrationService};
