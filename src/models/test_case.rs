//! Test case model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Test case database model
///
/// `position` preserves the authored order within the problem; hidden cases
/// are the rows with `is_sample = false`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TestCase {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub input: String,
    pub expected_output: String,
    pub is_sample: bool,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}
