//! Bearer-token extractors.
//!
//! [`AuthUser`] accepts any valid token. [`Authenticated<R>`] additionally
//! requires the role named by `R`, so a handler's signature states who may
//! call it.

use std::marker::PhantomData;
use std::ops::Deref;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use eventhub_auth::Claims;
use eventhub_entity::account::Role;
use eventhub_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// A role a route requires.
pub trait RequiredRole: Send + Sync + 'static {
    /// The required role.
    const ROLE: Role;
}

/// Marker for admin-only routes.
#[derive(Debug, Clone, Copy)]
pub struct AdminOnly;

impl RequiredRole for AdminOnly {
    const ROLE: Role = Role::Admin;
}

/// Marker for user-only routes.
#[derive(Debug, Clone, Copy)]
pub struct UserOnly;

impl RequiredRole for UserOnly {
    const ROLE: Role = Role::User;
}

fn authorization(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
}

/// Any authenticated caller.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Verified token claims.
    pub claims: Claims,
    /// Context built from the claims.
    pub context: RequestContext,
}

impl Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.context
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = state.gate.authenticate(authorization(parts))?;
        let context = RequestContext::from_claims(&claims);
        Ok(Self { claims, context })
    }
}

/// A caller holding the role `R` requires.
#[derive(Debug, Clone)]
pub struct Authenticated<R: RequiredRole> {
    context: RequestContext,
    _role: PhantomData<R>,
}

impl<R: RequiredRole> Authenticated<R> {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.context
    }
}

impl<R: RequiredRole> Deref for Authenticated<R> {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.context
    }
}

impl<R: RequiredRole> FromRequestParts<AppState> for Authenticated<R> {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = state.gate.authorize(authorization(parts), R::ROLE)?;
        Ok(Self {
            context: RequestContext::from_claims(&claims),
            _role: PhantomData,
        })
    }
}
