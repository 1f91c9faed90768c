//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod pagination;
pub mod path;

pub use auth::{AdminOnly, AuthUser, Authenticated, RequiredRole, UserOnly};
pub use json::JsonBody;
pub use pagination::PaginationParams;
pub use path::EventPath;
