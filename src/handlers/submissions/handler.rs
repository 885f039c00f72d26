//! Submission handler implementations

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult, middleware::auth::AuthenticatedUser, services::SubmissionService,
    state::AppState,
};

use super::response::SubmissionDetailResponse;

/// Full detail of one submission; owner-only
pub async fn get_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SubmissionDetailResponse>> {
    let submission = SubmissionService::get_submission(state.db(), &auth_user.id, &id).await?;
    Ok(Json(submission))
}
