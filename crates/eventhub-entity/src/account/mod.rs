//! Account domain entities.

pub mod model;
pub mod namespace;
pub mod role;

pub use model::{Account, AccountUpdate, LockoutState, NewAccount, normalize_email};
pub use namespace::Namespace;
pub use role::Role;
