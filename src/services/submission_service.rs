//! Submission service
//!
//! Orchestrates the judging pipeline for the "run" and "submit" actions and
//! serves submission history. Recording a graded attempt is best-effort:
//! storage failures are logged and the computed verdict is returned anyway.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::DEFAULT_LANGUAGE,
    db::repositories::{ProblemRepository, SubmissionRepository},
    error::{AppError, AppResult},
    handlers::problems::response::{ProblemStatusResponse, RunResponse, SubmitResponse},
    handlers::submissions::response::{SubmissionDetailResponse, SubmissionSummaryResponse},
    judge::{select_cases, JudgeEngine, JudgeMode, JudgeVerdict},
    models::SubmissionStatus,
    utils::validation,
};

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// Evaluate code against a problem's sample cases without recording
    pub async fn run_samples(
        pool: &PgPool,
        judge: &JudgeEngine,
        problem_id: &Uuid,
        code: &str,
        language: Option<&str>,
    ) -> AppResult<RunResponse> {
        let language = Self::validated_language(language)?;
        validation::validate_source_code(code).map_err(|e| AppError::Validation(e.to_string()))?;

        let verdict = Self::judge_problem(pool, judge, problem_id, code, language, JudgeMode::Sample)
            .await?;

        Ok(RunResponse {
            results: verdict.results,
        })
    }

    /// Grade code against the full suite and record the attempt
    pub async fn submit(
        pool: &PgPool,
        judge: &JudgeEngine,
        user_id: &Uuid,
        problem_id: &Uuid,
        code: &str,
        language: Option<&str>,
    ) -> AppResult<SubmitResponse> {
        let language = Self::validated_language(language)?;
        validation::validate_source_code(code).map_err(|e| AppError::Validation(e.to_string()))?;

        let verdict =
            Self::judge_problem(pool, judge, problem_id, code, language, JudgeMode::Full).await?;

        // Every attempt is appended as its own row; solved-ness is derived
        // at read time, so a later failure never un-solves the pair.
        let status = if verdict.all_passed {
            SubmissionStatus::Submitted
        } else {
            SubmissionStatus::Failed
        };

        if let Err(err) = SubmissionRepository::create(
            pool,
            user_id,
            problem_id,
            language,
            code,
            status.as_str(),
            &verdict.results,
        )
        .await
        {
            // Persistence is auxiliary bookkeeping; the caller still gets
            // the verdict that was computed.
            tracing::error!(
                user_id = %user_id,
                problem_id = %problem_id,
                error = %err,
                "Failed to record submission"
            );
        }

        Ok(SubmitResponse {
            results: verdict.results,
            all_passed: verdict.all_passed,
        })
    }

    /// Report the judged status of a (user, problem) pair
    pub async fn problem_status(
        pool: &PgPool,
        user_id: &Uuid,
        problem_id: &Uuid,
    ) -> AppResult<ProblemStatusResponse> {
        if !ProblemRepository::exists(pool, problem_id).await? {
            return Err(AppError::NotFound("Problem not found".to_string()));
        }

        let has_accepted = SubmissionRepository::has_accepted(pool, user_id, problem_id).await?;
        let latest =
            SubmissionRepository::find_latest_for_user_problem(pool, user_id, problem_id).await?;

        let latest_status = latest
            .as_ref()
            .and_then(|s| SubmissionStatus::from_str(&s.status));
        let effective = SubmissionStatus::effective(has_accepted, latest_status);

        Ok(ProblemStatusResponse {
            status: effective.as_str().to_string(),
            last_status: latest.as_ref().map(|s| s.status.clone()),
            last_submission_id: latest.as_ref().map(|s| s.id),
            last_submitted_at: latest.as_ref().map(|s| s.created_at),
            has_successful_submission: has_accepted,
        })
    }

    /// List a user's attempts, newest first, optionally scoped to a problem
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: &Uuid,
        problem_id: Option<&Uuid>,
        page: u32,
        per_page: u32,
    ) -> AppResult<(Vec<SubmissionSummaryResponse>, i64)> {
        if let Some(id) = problem_id {
            if !ProblemRepository::exists(pool, id).await? {
                return Err(AppError::NotFound("Problem not found".to_string()));
            }
        }

        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        let submissions = sqlx::query_as::<_, SubmissionSummaryResponse>(
            r#"
            SELECT s.id, s.problem_id, p.title AS problem_title, s.language, s.status, s.created_at
            FROM submissions s
            JOIN problems p ON s.problem_id = p.id
            WHERE s.user_id = $1 AND ($2::uuid IS NULL OR s.problem_id = $2)
            ORDER BY s.created_at DESC
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(user_id)
        .bind(problem_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM submissions
            WHERE user_id = $1 AND ($2::uuid IS NULL OR problem_id = $2)
            "#,
        )
        .bind(user_id)
        .bind(problem_id)
        .fetch_one(pool)
        .await?;

        Ok((submissions, total))
    }

    /// Full detail of a single submission; owner-only
    pub async fn get_submission(
        pool: &PgPool,
        user_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<SubmissionDetailResponse> {
        let submission = SubmissionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

        if submission.user_id != *user_id {
            return Err(AppError::Forbidden(
                "Cannot view other users' submissions".to_string(),
            ));
        }

        let problem_title: Option<String> =
            sqlx::query_scalar(r#"SELECT title FROM problems WHERE id = $1"#)
                .bind(submission.problem_id)
                .fetch_optional(pool)
                .await?;

        Ok(SubmissionDetailResponse {
            id: submission.id,
            problem_id: submission.problem_id,
            problem_title: problem_title.unwrap_or_default(),
            language: submission.language,
            status: submission.status,
            test_results: submission.test_results.0,
            source_code: submission.source_code,
            created_at: submission.created_at,
        })
    }

    /// Fetch, select, and judge in one step
    async fn judge_problem(
        pool: &PgPool,
        judge: &JudgeEngine,
        problem_id: &Uuid,
        code: &str,
        language: &str,
        mode: JudgeMode,
    ) -> AppResult<JudgeVerdict> {
        if !ProblemRepository::exists(pool, problem_id).await? {
            return Err(AppError::NotFound("Problem not found".to_string()));
        }

        let cases = ProblemRepository::get_test_cases(pool, problem_id).await?;
        let selected = select_cases(&cases, mode);

        Ok(judge.judge(code, language, &selected).await)
    }

    fn validated_language(language: Option<&str>) -> AppResult<&str> {
        let language = language.unwrap_or(DEFAULT_LANGUAGE);
        validation::validate_language(language)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(language)
    }
}
