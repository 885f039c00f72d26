//! Authentication extractors
//!
//! Bearer-token verification happens in the extractors themselves, so a
//! handler opts into authentication simply by taking [`AuthenticatedUser`]
//! (or [`OptionalAuth`] where an invalid token should degrade rather than
//! fail the request).

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{error::AppError, services::AuthService, state::AppState};

/// Authenticated user extracted from a verified JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
}

/// Pull the bearer token out of the Authorization header
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

fn authenticate(parts: &Parts, state: &AppState) -> Result<AuthenticatedUser, AppError> {
    let token = bearer_token(parts).ok_or(AppError::Unauthorized)?;

    let claims = AuthService::verify_token(token, &state.config().jwt.secret)?;

    let id = Uuid::parse_str(&claims.sub).map_err(|e| {
        debug!(sub = %claims.sub, error = ?e, "Auth failed: invalid user ID in token");
        AppError::InvalidToken
    })?;

    Ok(AuthenticatedUser { id })
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate(parts, state).map_err(|e| {
            debug!(path = %parts.uri.path(), error = %e, "Authentication failed");
            e
        })
    }
}

/// Optional authenticated user wrapper (never fails)
pub struct OptionalAuth(pub Option<AuthenticatedUser>);

impl FromRequestParts<AppState> for OptionalAuth {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(authenticate(parts, state).ok()))
    }
}
