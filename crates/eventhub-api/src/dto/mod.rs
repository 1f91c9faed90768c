//! Data transfer objects for request/response serialization.

pub mod response;
