//! # eventhub-auth
//!
//! Authentication and authorization for EventHub.
//!
//! ## Modules
//!
//! - `password`: salted SHA-256 hashing and strength policy
//! - `jwt`: token issuance and stateless verification
//! - `gate`: bearer extraction and role checks for protected operations
//! - `lockout`: failed-login counting for user accounts
//! - `account`: signup and login flows

pub mod account;
pub mod gate;
pub mod jwt;
pub mod lockout;
pub mod password;

pub use account::{AccountManager, AuthOutcome, LoginInput, SignupInput};
pub use gate::AccessGate;
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenError};
pub use lockout::LockoutTracker;
pub use password::{PasswordHasher, PasswordValidator, PolicyError};
