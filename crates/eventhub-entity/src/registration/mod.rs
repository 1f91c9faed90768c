//! Registration domain entities.

pub mod model;

pub use model::{DEFAULT_PAYMENT_METHOD, DEFAULT_PAYMENT_STATUS, NewRegistration, Registration};
