//! Problem handler implementations

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::AppResult,
    middleware::auth::{AuthenticatedUser, OptionalAuth},
    services::{ProblemService, SubmissionService},
    state::AppState,
};

use super::{
    request::{HistoryQuery, ListProblemsQuery, RunCodeRequest},
    response::{
        ProblemResponse, ProblemStatusResponse, ProblemsListResponse, RunResponse,
        SampleCaseResponse, SubmitResponse,
    },
};
use crate::handlers::submissions::response::SubmissionsListResponse;

/// List problems
///
/// The `solved` filter needs a caller identity; with a missing or invalid
/// token it is ignored rather than failing the listing.
pub async fn list_problems(
    State(state): State<AppState>,
    OptionalAuth(auth_user): OptionalAuth,
    Query(query): Query<ListProblemsQuery>,
) -> AppResult<Json<ProblemsListResponse>> {
    let user_id = auth_user.map(|u| u.id);

    let problems = ProblemService::list_problems(
        state.db(),
        query.difficulty.as_deref(),
        query.solved,
        user_id.as_ref(),
    )
    .await?;

    let total = problems.len();

    Ok(Json(ProblemsListResponse { problems, total }))
}

/// Get a single problem with its sample cases
pub async fn get_problem(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ProblemResponse>> {
    let problem = ProblemService::get_problem(state.db(), &id).await?;
    Ok(Json(problem))
}

/// List the public sample cases of a problem
pub async fn list_sample_cases(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<SampleCaseResponse>>> {
    let cases = ProblemService::list_sample_cases(state.db(), &id).await?;
    Ok(Json(cases))
}

/// Run code against the sample cases; no authentication, nothing recorded
pub async fn run_code(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RunCodeRequest>,
) -> AppResult<Json<RunResponse>> {
    payload.validate()?;

    let response = SubmissionService::run_samples(
        state.db(),
        state.judge(),
        &id,
        &payload.code,
        payload.language.as_deref(),
    )
    .await?;

    Ok(Json(response))
}

/// Grade code against the full suite and record the attempt
pub async fn submit_code(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<RunCodeRequest>,
) -> AppResult<Json<SubmitResponse>> {
    payload.validate()?;

    let response = SubmissionService::submit(
        state.db(),
        state.judge(),
        &auth_user.id,
        &id,
        &payload.code,
        payload.language.as_deref(),
    )
    .await?;

    Ok(Json(response))
}

/// Judged status of the problem for the calling user
pub async fn problem_status(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ProblemStatusResponse>> {
    let status = SubmissionService::problem_status(state.db(), &auth_user.id, &id).await?;
    Ok(Json(status))
}

/// The calling user's attempts on this problem
pub async fn list_problem_submissions(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<SubmissionsListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    let (submissions, total) =
        SubmissionService::list_for_user(state.db(), &auth_user.id, Some(&id), page, per_page)
            .await?;

    Ok(Json(SubmissionsListResponse {
        submissions,
        total,
        page,
        per_page,
    }))
}
