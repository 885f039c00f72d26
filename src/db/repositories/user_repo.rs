//! User repository

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::User};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    ///
    /// `password_hash` is `None` for accounts created through federated
    /// login; `google_id` is `None` for password accounts.
    pub async fn create(
        pool: &PgPool,
        email: &str,
        password_hash: Option<&str>,
        full_name: &str,
        dob: Option<NaiveDate>,
        leetcode_profile: Option<&str>,
        google_id: Option<&str>,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, full_name, dob, leetcode_profile, google_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(full_name)
        .bind(dob)
        .bind(leetcode_profile)
        .bind(google_id)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Attach a federated identity to an existing account
    pub async fn link_google_id(pool: &PgPool, id: &Uuid, google_id: &str) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET google_id = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(google_id)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Partial profile update; absent fields keep their current value
    pub async fn update_profile(
        pool: &PgPool,
        id: &Uuid,
        full_name: Option<&str>,
        dob: Option<NaiveDate>,
        leetcode_profile: Option<&str>,
        password_hash: Option<&str>,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET
                full_name = COALESCE($2, full_name),
                dob = COALESCE($3, dob),
                leetcode_profile = COALESCE($4, leetcode_profile),
                password_hash = COALESCE($5, password_hash),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(full_name)
        .bind(dob)
        .bind(leetcode_profile)
        .bind(password_hash)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }
}
