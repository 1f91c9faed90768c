//! Event registration.

pub mod service;

pub use service::{RegisterRequest, RegisteredEvent, RegistrationReceipt, RegistrationService};
