//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use eventhub_core::error::{AppError, ErrorKind, FieldViolation};

/// Message returned in place of any server-side failure detail.
const GENERIC_FAILURE: &str = "An unexpected error occurred";
/// Message returned while a dependency is briefly unavailable.
const GENERIC_UNAVAILABLE: &str = "Service temporarily unavailable, please retry";

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Every violated input rule, for validation errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}

/// Error type returned by handlers and extractors.
///
/// A newtype so that `AppError`, which lives in a crate without an HTTP
/// dependency, can be turned into a response here.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
        Self(AppError::validation("Invalid JSON data"))
    }
}

/// Status and wire code for an error kind.
pub fn status_for(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
        ErrorKind::Unauthenticated => (StatusCode::UNAUTHORIZED, "UNAUTHENTICATED"),
        // Role mismatches share 401 with missing credentials.
        ErrorKind::Forbidden => (StatusCode::UNAUTHORIZED, "FORBIDDEN"),
        ErrorKind::AccountLocked => (StatusCode::FORBIDDEN, "ACCOUNT_LOCKED"),
        ErrorKind::AccountDisabled => (StatusCode::FORBIDDEN, "ACCOUNT_DISABLED"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::ServiceUnavailable => (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE"),
        ErrorKind::StoreUnavailable
        | ErrorKind::StoreTimeout
        | ErrorKind::Configuration
        | ErrorKind::Serialization
        | ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, error_code) = status_for(err.kind);

        let message = if err.kind.is_client_facing() {
            err.message
        } else if err.kind == ErrorKind::ServiceUnavailable {
            tracing::warn!(error = %err, "Request failed on an unavailable dependency");
            GENERIC_UNAVAILABLE.to_string()
        } else {
            tracing::error!(error = %err, source = ?err.source, "Internal server error");
            GENERIC_FAILURE.to_string()
        };

        let details = (!err.violations.is_empty()).then_some(err.violations);

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}
