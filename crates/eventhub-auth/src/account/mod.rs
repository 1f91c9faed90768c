//! Signup and login flows.

pub mod input;
pub mod manager;

pub use input::{LoginInput, SignupInput};
pub use manager::{AccountManager, AuthOutcome};
