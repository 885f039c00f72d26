//! Problem request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_SOURCE_CODE_SIZE;

/// Query parameters for the problem listing
#[derive(Debug, Deserialize)]
pub struct ListProblemsQuery {
    pub difficulty: Option<String>,
    /// Filter by solved state; needs a valid bearer token to take effect
    pub solved: Option<bool>,
}

/// Body of the run and submit actions
#[derive(Debug, Deserialize, Validate)]
pub struct RunCodeRequest {
    #[validate(length(min = 1, max = MAX_SOURCE_CODE_SIZE))]
    pub code: String,

    /// Defaults to cpp when omitted
    pub language: Option<String>,
}

/// Pagination for submission history listings
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}
