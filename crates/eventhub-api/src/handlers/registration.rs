//! Registration handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use eventhub_service::RegisterRequest;

use crate::dto::response::{ParticipantsResponse, RegisteredEventsResponse, RegistrationResponse};
use crate::error::ApiError;
use crate::extractors::{AdminOnly, Authenticated, EventPath, JsonBody, UserOnly};
use crate::state::AppState;

/// POST /events/{id}/register
pub async fn register(
    State(state): State<AppState>,
    user: Authenticated<UserOnly>,
    EventPath(event_id): EventPath,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<RegistrationResponse>), ApiError> {
    let receipt = state
        .registration_service
        .register(&user, event_id, req)
        .await?;
    Ok((StatusCode::CREATED, Json(receipt.into())))
}

/// GET /events/{id}/participants
pub async fn participants(
    State(state): State<AppState>,
    admin: Authenticated<AdminOnly>,
    EventPath(event_id): EventPath,
) -> Result<Json<ParticipantsResponse>, ApiError> {
    let registrations = state
        .registration_service
        .participants(&admin, event_id)
        .await?;
    Ok(Json(registrations.into()))
}

/// GET /user/registered-events
pub async fn registered_events(
    State(state): State<AppState>,
    user: Authenticated<UserOnly>,
) -> Result<Json<RegisteredEventsResponse>, ApiError> {
    let joined = state.registration_service.registered_events(&user).await?;
    Ok(Json(joined.into()))
}
