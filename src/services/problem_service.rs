//! Problem service

use std::collections::HashSet;

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{ProblemRepository, SubmissionRepository},
    error::{AppError, AppResult},
    handlers::problems::response::{ProblemResponse, ProblemSummaryResponse, SampleCaseResponse},
    models::Difficulty,
};

/// Problem service for business logic
pub struct ProblemService;

impl ProblemService {
    /// List problems with optional difficulty and solved filters
    ///
    /// The solved filter only applies when a caller identity is known; an
    /// anonymous or invalid-token request gets the unfiltered listing with
    /// no per-problem solved flags.
    pub async fn list_problems(
        pool: &PgPool,
        difficulty: Option<&str>,
        solved_filter: Option<bool>,
        user_id: Option<&Uuid>,
    ) -> AppResult<Vec<ProblemSummaryResponse>> {
        if let Some(d) = difficulty {
            Difficulty::from_str(d)
                .ok_or_else(|| AppError::Validation(format!("Unknown difficulty: {d}")))?;
        }

        let problems = ProblemRepository::list(pool, difficulty).await?;

        let solved_ids: Option<HashSet<Uuid>> = match user_id {
            Some(id) => Some(
                SubmissionRepository::solved_problem_ids(pool, id)
                    .await?
                    .into_iter()
                    .collect(),
            ),
            None => None,
        };

        let mut summaries: Vec<ProblemSummaryResponse> = problems
            .into_iter()
            .map(|p| {
                let solved = solved_ids.as_ref().map(|ids| ids.contains(&p.id));
                ProblemSummaryResponse {
                    id: p.id,
                    title: p.title,
                    difficulty: p.difficulty,
                    solved,
                }
            })
            .collect();

        if let (Some(filter), Some(_)) = (solved_filter, solved_ids.as_ref()) {
            summaries.retain(|p| p.solved == Some(filter));
        }

        Ok(summaries)
    }

    /// Get a problem with its sample cases; hidden cases stay hidden
    pub async fn get_problem(pool: &PgPool, id: &Uuid) -> AppResult<ProblemResponse> {
        let problem = ProblemRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;

        let sample_test_cases = Self::list_sample_cases(pool, id).await?;

        Ok(ProblemResponse {
            id: problem.id,
            title: problem.title,
            description: problem.description,
            constraints: problem.constraints,
            difficulty: problem.difficulty,
            sample_test_cases,
            created_at: problem.created_at,
        })
    }

    /// List the public sample cases of a problem
    pub async fn list_sample_cases(
        pool: &PgPool,
        problem_id: &Uuid,
    ) -> AppResult<Vec<SampleCaseResponse>> {
        if !ProblemRepository::exists(pool, problem_id).await? {
            return Err(AppError::NotFound("Problem not found".to_string()));
        }

        let cases = ProblemRepository::get_test_cases(pool, problem_id).await?;

        Ok(cases
            .into_iter()
            .filter(|c| c.is_sample)
            .map(|c| SampleCaseResponse {
                input: c.input,
                expected_output: c.expected_output,
            })
            .collect())
    }
}
