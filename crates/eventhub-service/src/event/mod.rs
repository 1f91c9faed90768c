//! Event publishing and listing.

pub mod request;
pub mod service;

pub use request::CreateEventRequest;
pub use service::EventService;
