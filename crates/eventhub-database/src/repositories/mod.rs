//! PostgreSQL implementations of the store traits.

pub mod account;
pub mod event;
pub mod registration;

pub use account::AccountRepository;
pub use event::EventRepository;
pub use registration::RegistrationRepository;
