//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod auth;
pub mod health;
pub mod leaderboard;
pub mod problems;
pub mod submissions;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(leaderboard::routes())
        .nest("/auth", auth::routes())
        .nest("/problems", problems::routes())
        .nest("/submissions", submissions::routes())
        .nest("/user", users::routes())
}
