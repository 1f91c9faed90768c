//! Typed path parameter extractors.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use eventhub_core::error::AppError;
use eventhub_core::types::EventId;

use crate::error::ApiError;

/// The `{id}` segment of an event route.
///
/// An id that does not parse cannot name an event, so it is reported as
/// "Event not found".
#[derive(Debug, Clone, Copy)]
pub struct EventPath(pub EventId);

impl<S: Send + Sync> FromRequestParts<S> for EventPath {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::not_found("Event not found"))?;
        raw.parse::<EventId>()
            .map(Self)
            .map_err(|_| AppError::not_found("Event not found").into())
    }
}
