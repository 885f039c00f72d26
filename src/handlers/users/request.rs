//! Current-user request DTOs

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_FULL_NAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

/// Partial profile update; absent fields are left unchanged
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = MAX_FULL_NAME_LENGTH))]
    pub full_name: Option<String>,

    pub dob: Option<NaiveDate>,

    #[validate(length(max = 256))]
    pub leetcode_profile: Option<String>,

    /// Required when changing the password of a password account
    pub current_password: Option<String>,

    #[validate(length(min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH))]
    pub new_password: Option<String>,
}
