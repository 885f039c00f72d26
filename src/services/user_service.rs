//! User service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    handlers::users::request::UpdateProfileRequest,
    models::User,
    services::AuthService,
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Get user by ID
    pub async fn get_user(pool: &PgPool, id: &Uuid) -> AppResult<User> {
        UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Partial profile update
    ///
    /// Changing the password requires the current one when the account has
    /// a password; federated-only accounts may set their first password
    /// without it.
    pub async fn update_profile(
        pool: &PgPool,
        user_id: &Uuid,
        payload: UpdateProfileRequest,
    ) -> AppResult<User> {
        let user = Self::get_user(pool, user_id).await?;

        let password_hash = if let Some(new_password) = payload.new_password.as_deref() {
            if let Some(existing_hash) = user.password_hash.as_deref() {
                let current = payload
                    .current_password
                    .as_deref()
                    .ok_or_else(|| AppError::Validation("Current password required".to_string()))?;

                if !AuthService::verify_password(current, existing_hash)? {
                    return Err(AppError::InvalidCredentials);
                }
            }

            Some(AuthService::hash_password(new_password)?)
        } else {
            None
        };

        UserRepository::update_profile(
            pool,
            user_id,
            payload.full_name.as_deref(),
            payload.dob,
            payload.leetcode_profile.as_deref(),
            password_hash.as_deref(),
        )
        .await
    }
}
