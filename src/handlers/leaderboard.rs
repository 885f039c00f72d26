//! Leaderboard handler

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::{
    error::AppResult,
    services::{LinearScoring, StatsService},
    state::AppState,
};

/// One ranked user on the leaderboard
#[derive(Debug, Serialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub email: String,
    pub solved: i64,
    pub rating: i64,
    pub rank: i64,
}

/// Leaderboard response
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// Full computed ranking, public
async fn get_leaderboard(State(state): State<AppState>) -> AppResult<Json<LeaderboardResponse>> {
    let leaderboard = StatsService::leaderboard(state.db(), &LinearScoring::default()).await?;

    Ok(Json(LeaderboardResponse { leaderboard }))
}

/// Leaderboard routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/leaderboard", get(get_leaderboard))
}
