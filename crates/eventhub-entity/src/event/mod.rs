//! Event domain entities.

pub mod kind;
pub mod model;
pub mod status;

pub use kind::EventType;
pub use model::{Event, NewEvent, SCHEDULE_FORMAT};
pub use status::EventStatus;
