//! Authentication handler implementations

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::{AuthService, UserService},
    state::AppState,
};

use super::{
    request::{GoogleLoginRequest, LoginRequest, RegisterRequest},
    response::{AuthResponse, CurrentUserResponse, UserResponse},
};

/// Register a new account with email and password
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    payload.validate()?;

    let user = AuthService::register(
        state.db(),
        &payload.email,
        &payload.password,
        &payload.full_name,
        payload.dob,
        payload.leetcode_profile.as_deref(),
    )
    .await?;

    let (token, expires_in) = AuthService::generate_token(&user.id, &state.config().jwt)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_in,
            user: user.into(),
        }),
    ))
}

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let user = AuthService::login(state.db(), &payload.email, &payload.password).await?;

    let (token, expires_in) = AuthService::generate_token(&user.id, &state.config().jwt)?;

    Ok(Json(AuthResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in,
        user: user.into(),
    }))
}

/// Login (or sign up) by exchanging a Google ID token for a local session
pub async fn google_login(
    State(state): State<AppState>,
    Json(payload): Json<GoogleLoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let user = AuthService::google_login(state.db(), state.google(), &payload.token).await?;

    let (token, expires_in) = AuthService::generate_token(&user.id, &state.config().jwt)?;

    Ok(Json(AuthResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in,
        user: user.into(),
    }))
}

/// Current user profile
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<CurrentUserResponse>> {
    let user = UserService::get_user(state.db(), &auth_user.id).await?;

    Ok(Json(CurrentUserResponse {
        user: UserResponse::from(user),
    }))
}
