//! Event handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use eventhub_service::CreateEventRequest;

use crate::dto::response::{AdminEventsResponse, CreateEventResponse, EventListResponse};
use crate::error::ApiError;
use crate::extractors::{AdminOnly, Authenticated, JsonBody, PaginationParams};
use crate::state::AppState;

/// POST /events/create
pub async fn create_event(
    State(state): State<AppState>,
    admin: Authenticated<AdminOnly>,
    JsonBody(req): JsonBody<CreateEventRequest>,
) -> Result<(StatusCode, Json<CreateEventResponse>), ApiError> {
    let event = state.event_service.create_event(&admin, req).await?;
    Ok((StatusCode::CREATED, Json(event.into())))
}

/// GET /events
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<EventListResponse>, ApiError> {
    let page = state
        .event_service
        .list_events(params.into_page_request())
        .await?;
    Ok(Json(page.into()))
}

/// GET /admin/events
pub async fn admin_events(
    State(state): State<AppState>,
    admin: Authenticated<AdminOnly>,
) -> Result<Json<AdminEventsResponse>, ApiError> {
    let events = state.event_service.list_admin_events(&admin).await?;
    Ok(Json(events.into()))
}
