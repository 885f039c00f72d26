//! Problem repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Problem, TestCase},
};

/// Repository for problem database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Create a new problem
    pub async fn create(
        pool: &PgPool,
        title: &str,
        description: &str,
        constraints: &str,
        difficulty: &str,
    ) -> AppResult<Problem> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            INSERT INTO problems (title, description, constraints, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(constraints)
        .bind(difficulty)
        .fetch_one(pool)
        .await?;

        Ok(problem)
    }

    /// Find problem by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(problem)
    }

    /// Find problem by title (used by the seeding binary)
    pub async fn find_by_title(pool: &PgPool, title: &str) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE title = $1"#)
            .bind(title)
            .fetch_optional(pool)
            .await?;

        Ok(problem)
    }

    /// Check whether a problem exists
    pub async fn exists(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM problems WHERE id = $1)"#)
                .bind(id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }

    /// List problems, optionally filtered by difficulty
    pub async fn list(pool: &PgPool, difficulty: Option<&str>) -> AppResult<Vec<Problem>> {
        let problems = sqlx::query_as::<_, Problem>(
            r#"
            SELECT * FROM problems
            WHERE ($1::text IS NULL OR difficulty = $1)
            ORDER BY created_at
            "#,
        )
        .bind(difficulty)
        .fetch_all(pool)
        .await?;

        Ok(problems)
    }

    /// Count total problems
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM problems"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Create test case
    pub async fn create_test_case(
        pool: &PgPool,
        problem_id: &Uuid,
        input: &str,
        expected_output: &str,
        is_sample: bool,
        position: i32,
    ) -> AppResult<TestCase> {
        let test_case = sqlx::query_as::<_, TestCase>(
            r#"
            INSERT INTO test_cases (problem_id, input, expected_output, is_sample, position)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(problem_id)
        .bind(input)
        .bind(expected_output)
        .bind(is_sample)
        .bind(position)
        .fetch_one(pool)
        .await?;

        Ok(test_case)
    }

    /// Get test cases for problem in authored order
    pub async fn get_test_cases(pool: &PgPool, problem_id: &Uuid) -> AppResult<Vec<TestCase>> {
        let test_cases = sqlx::query_as::<_, TestCase>(
            r#"SELECT * FROM test_cases WHERE problem_id = $1 ORDER BY position"#,
        )
        .bind(problem_id)
        .fetch_all(pool)
        .await?;

        Ok(test_cases)
    }
}
