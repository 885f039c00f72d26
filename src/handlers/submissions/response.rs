//! Submission response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::TestResult;

/// One row of a submission history listing
#[derive(Debug, Serialize, FromRow)]
pub struct SubmissionSummaryResponse {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub problem_title: String,
    pub language: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Paginated submission history
#[derive(Debug, Serialize)]
pub struct SubmissionsListResponse {
    pub submissions: Vec<SubmissionSummaryResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Full detail of a single submission, including per-case results
#[derive(Debug, Serialize)]
pub struct SubmissionDetailResponse {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub problem_title: String,
    pub language: String,
    pub status: String,
    pub test_results: Vec<TestResult>,
    pub source_code: String,
    pub created_at: DateTime<Utc>,
}
