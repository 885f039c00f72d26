//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Submission database model
///
/// Every graded attempt inserts a new row; the solved state of a
/// (user, problem) pair is derived at read time from the presence of a
/// `Submitted` row, never stored as a mutable flag.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub user_id: Uuid,
    pub problem_id: Uuid,
    pub language: String,
    #[serde(skip_serializing)]
    pub source_code: String,
    pub status: String,
    pub test_results: Json<Vec<TestResult>>,
    pub created_at: DateTime<Utc>,
}

/// Submission status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Submitted,
    Failed,
    NotAttempted,
}

impl SubmissionStatus {
    /// Get status as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::Failed => "Failed",
            Self::NotAttempted => "Not Attempted",
        }
    }

    /// Parse status from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Submitted" => Some(Self::Submitted),
            "Failed" => Some(Self::Failed),
            "Not Attempted" => Some(Self::NotAttempted),
            _ => None,
        }
    }

    /// Derive the effective status of a (user, problem) pair from its
    /// submission history: once any attempt succeeded the pair stays
    /// `Submitted`, otherwise the latest attempt's status applies, and a
    /// pair with no history is `Not Attempted`.
    pub fn effective(has_accepted: bool, latest: Option<SubmissionStatus>) -> SubmissionStatus {
        if has_accepted {
            SubmissionStatus::Submitted
        } else {
            latest.unwrap_or(SubmissionStatus::NotAttempted)
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-test-case outcome of a judging run
///
/// Produced by the judge engine and persisted inside the owning submission
/// for later inspection; not independently addressable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub input: String,
    pub expected_output: String,
    pub user_output: String,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for s in [
            SubmissionStatus::Submitted,
            SubmissionStatus::Failed,
            SubmissionStatus::NotAttempted,
        ] {
            assert_eq!(SubmissionStatus::from_str(s.as_str()), Some(s));
        }
        assert_eq!(SubmissionStatus::from_str("pending"), None);
    }

    #[test]
    fn test_effective_status_prefers_any_success() {
        // History [Failed, Submitted, Failed]: latest is Failed but the pair
        // counts as solved forever.
        let effective = SubmissionStatus::effective(true, Some(SubmissionStatus::Failed));
        assert_eq!(effective, SubmissionStatus::Submitted);
    }

    #[test]
    fn test_effective_status_falls_back_to_latest() {
        let effective = SubmissionStatus::effective(false, Some(SubmissionStatus::Failed));
        assert_eq!(effective, SubmissionStatus::Failed);
    }

    #[test]
    fn test_effective_status_without_history() {
        let effective = SubmissionStatus::effective(false, None);
        assert_eq!(effective, SubmissionStatus::NotAttempted);
    }
}
