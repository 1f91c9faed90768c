//! Core type definitions used across the EventHub workspace.

pub mod id;
pub mod pagination;

pub use id::*;
pub use pagination::{DEFAULT_PAGE_LIMIT, MAX_PAGE, MAX_PAGE_LIMIT, PageMeta, PageRequest, PageResponse};
