//! Authentication request DTOs

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_FULL_NAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

/// User registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH))]
    pub password: String,

    #[validate(length(min = 1, max = MAX_FULL_NAME_LENGTH))]
    pub full_name: String,

    pub dob: Option<NaiveDate>,

    #[validate(length(max = 256))]
    pub leetcode_profile: Option<String>,
}

/// User login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Federated login request carrying a Google ID token
#[derive(Debug, Deserialize, Validate)]
pub struct GoogleLoginRequest {
    #[validate(length(min = 1))]
    pub token: String,
}
