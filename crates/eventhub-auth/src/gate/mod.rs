//! Access control for protected operations.

pub mod enforcer;

pub use enforcer::{AccessGate, bearer_token, require_role};
