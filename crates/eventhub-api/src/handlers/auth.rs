//! Auth handlers: signup and login for both namespaces, and `me`.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use eventhub_auth::{LoginInput, SignupInput};
use eventhub_entity::account::Namespace;

use crate::dto::response::{AccountSummary, AuthResponse, ProfileResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, JsonBody};
use crate::state::AppState;

async fn signup(
    state: &AppState,
    namespace: Namespace,
    input: SignupInput,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let outcome = state.accounts.signup(namespace, input).await?;
    let message = match namespace {
        Namespace::Admin => "Admin registered successfully",
        Namespace::User => "User registered successfully",
    };
    Ok((StatusCode::CREATED, Json(AuthResponse::new(outcome, message))))
}

async fn login(
    state: &AppState,
    namespace: Namespace,
    input: LoginInput,
) -> Result<Json<AuthResponse>, ApiError> {
    let outcome = state.accounts.login(namespace, input).await?;
    Ok(Json(AuthResponse::new(outcome, "Login successful")))
}

/// POST /admin/signup
pub async fn admin_signup(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<SignupInput>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    signup(&state, Namespace::Admin, input).await
}

/// POST /admin/login
pub async fn admin_login(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<LoginInput>,
) -> Result<Json<AuthResponse>, ApiError> {
    login(&state, Namespace::Admin, input).await
}

/// POST /user/signup
pub async fn user_signup(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<SignupInput>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    signup(&state, Namespace::User, input).await
}

/// POST /user/login
pub async fn user_login(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<LoginInput>,
) -> Result<Json<AuthResponse>, ApiError> {
    login(&state, Namespace::User, input).await
}

/// GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let account = state.accounts.profile(&auth.claims).await?;

    Ok(Json(ProfileResponse {
        user: AccountSummary::new(&account, auth.claims.role),
        last_login_at: account.last_login_at,
        created_at: account.created_at,
    }))
}
