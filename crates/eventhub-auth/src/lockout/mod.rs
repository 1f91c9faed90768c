//! Failed-login tracking for user accounts.

pub mod tracker;

pub use tracker::LockoutTracker;
