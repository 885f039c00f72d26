//! Current-user handler implementations

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::AppResult,
    handlers::auth::response::UserResponse,
    handlers::problems::request::HistoryQuery,
    handlers::submissions::response::SubmissionsListResponse,
    middleware::auth::AuthenticatedUser,
    services::{StatsService, SubmissionService, UserService},
    state::AppState,
};

use super::{request::UpdateProfileRequest, response::UserStatsResponse};

/// The calling user's submission history across all problems
pub async fn list_submissions(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<SubmissionsListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let (submissions, total) =
        SubmissionService::list_for_user(state.db(), &auth_user.id, None, page, per_page).await?;

    Ok(Json(SubmissionsListResponse {
        submissions,
        total,
        page,
        per_page,
    }))
}

/// Total, solved, and remaining problem counts
pub async fn statistics(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<UserStatsResponse>> {
    let stats = StatsService::statistics(state.db(), &auth_user.id).await?;
    Ok(Json(stats))
}

/// Partial profile update
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<Json<UserResponse>> {
    payload.validate()?;

    let user = UserService::update_profile(state.db(), &auth_user.id, payload).await?;

    Ok(Json(UserResponse::from(user)))
}
