//! Problem response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::TestResult;

/// One row of the problem listing
#[derive(Debug, Serialize)]
pub struct ProblemSummaryResponse {
    pub id: Uuid,
    pub title: String,
    pub difficulty: String,
    /// Present only when the caller is authenticated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solved: Option<bool>,
}

/// Problem listing response
#[derive(Debug, Serialize)]
pub struct ProblemsListResponse {
    pub problems: Vec<ProblemSummaryResponse>,
    pub total: usize,
}

/// A public sample case
#[derive(Debug, Serialize)]
pub struct SampleCaseResponse {
    pub input: String,
    pub expected_output: String,
}

/// Full problem detail; hidden cases are never included
#[derive(Debug, Serialize)]
pub struct ProblemResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub constraints: String,
    pub difficulty: String,
    pub sample_test_cases: Vec<SampleCaseResponse>,
    pub created_at: DateTime<Utc>,
}

/// Outcome of the pre-submission run action
#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub results: Vec<TestResult>,
}

/// Outcome of the graded submit action
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub results: Vec<TestResult>,
    pub all_passed: bool,
}

/// Judged state of a (user, problem) pair
#[derive(Debug, Serialize)]
pub struct ProblemStatusResponse {
    /// Effective status: Submitted once any attempt succeeded
    pub status: String,
    pub last_status: Option<String>,
    pub last_submission_id: Option<Uuid>,
    pub last_submitted_at: Option<DateTime<Utc>>,
    pub has_successful_submission: bool,
}
