//! Submission repository

use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::statuses,
    error::AppResult,
    models::{Submission, TestResult},
};

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Record a graded attempt as a new row
    pub async fn create(
        pool: &PgPool,
        user_id: &Uuid,
        problem_id: &Uuid,
        language: &str,
        source_code: &str,
        status: &str,
        test_results: &[TestResult],
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (user_id, problem_id, language, source_code, status, test_results)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(problem_id)
        .bind(language)
        .bind(source_code)
        .bind(status)
        .bind(Json(test_results))
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }

    /// Find submission by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Submission>> {
        let submission =
            sqlx::query_as::<_, Submission>(r#"SELECT * FROM submissions WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(submission)
    }

    /// Latest attempt for a (user, problem) pair
    pub async fn find_latest_for_user_problem(
        pool: &PgPool,
        user_id: &Uuid,
        problem_id: &Uuid,
    ) -> AppResult<Option<Submission>> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            SELECT * FROM submissions
            WHERE user_id = $1 AND problem_id = $2
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(problem_id)
        .fetch_optional(pool)
        .await?;

        Ok(submission)
    }

    /// Whether the pair has ever had a fully passing attempt
    pub async fn has_accepted(
        pool: &PgPool,
        user_id: &Uuid,
        problem_id: &Uuid,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM submissions
                WHERE user_id = $1 AND problem_id = $2 AND status = $3
            )
            "#,
        )
        .bind(user_id)
        .bind(problem_id)
        .bind(statuses::SUBMITTED)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Distinct problems the user has solved
    pub async fn solved_problem_ids(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<Uuid>> {
        let ids: Vec<Uuid> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT problem_id FROM submissions
            WHERE user_id = $1 AND status = $2
            "#,
        )
        .bind(user_id)
        .bind(statuses::SUBMITTED)
        .fetch_all(pool)
        .await?;

        Ok(ids)
    }

    /// Count of distinct problems the user has solved
    pub async fn count_distinct_solved(pool: &PgPool, user_id: &Uuid) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(DISTINCT problem_id) FROM submissions
            WHERE user_id = $1 AND status = $2
            "#,
        )
        .bind(user_id)
        .bind(statuses::SUBMITTED)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

}
