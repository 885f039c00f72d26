//! Authentication service

use std::time::Duration;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{NaiveDate, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::{GoogleConfig, JwtConfig},
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
};

/// Google tokeninfo endpoint used to validate federated ID tokens
const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Timeout for tokeninfo lookups, in seconds
const TOKENINFO_TIMEOUT_SECONDS: u64 = 10;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user with email and password
    pub async fn register(
        pool: &PgPool,
        email: &str,
        password: &str,
        full_name: &str,
        dob: Option<NaiveDate>,
        leetcode_profile: Option<&str>,
    ) -> AppResult<User> {
        // Pre-check for a friendlier message; the unique constraint still
        // backs this up under concurrent registration.
        if UserRepository::find_by_email(pool, email).await?.is_some() {
            return Err(AppError::AlreadyExists("User already exists".to_string()));
        }

        let password_hash = Self::hash_password(password)?;

        let user = UserRepository::create(
            pool,
            email,
            Some(&password_hash),
            full_name,
            dob,
            leetcode_profile,
            None,
        )
        .await?;

        Ok(user)
    }

    /// Login with email and password
    pub async fn login(pool: &PgPool, email: &str, password: &str) -> AppResult<User> {
        let user = UserRepository::find_by_email(pool, email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        // Federated-only accounts have no password to check against.
        let hash = user
            .password_hash
            .as_deref()
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::verify_password(password, hash)? {
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Login (or sign up) with a Google ID token
    ///
    /// An existing account with the token's email gets the federated
    /// identity linked on first use; otherwise a new account is created
    /// with no password.
    pub async fn google_login(
        pool: &PgPool,
        verifier: &GoogleTokenVerifier,
        id_token: &str,
    ) -> AppResult<User> {
        let identity = verifier.verify(id_token).await?;

        if let Some(user) = UserRepository::find_by_email(pool, &identity.email).await? {
            if user.google_id.is_none() {
                return UserRepository::link_google_id(pool, &user.id, &identity.sub).await;
            }
            return Ok(user);
        }

        let full_name = identity.name.unwrap_or_else(|| identity.email.clone());
        UserRepository::create(
            pool,
            &identity.email,
            None,
            &full_name,
            None,
            None,
            Some(&identity.sub),
        )
        .await
    }

    /// Generate a bearer token for the user; returns (token, expires_in)
    pub fn generate_token(user_id: &Uuid, config: &JwtConfig) -> AppResult<(String, i64)> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::hours(config.expiry_hours);
        let expires_in = config.expiry_hours * 3600;

        let claims = Claims {
            sub: user_id.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok((token, expires_in))
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Hash password using Argon2
    pub(crate) fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    pub(crate) fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

/// Federated identity extracted from a verified Google ID token
#[derive(Debug)]
pub struct GoogleIdentity {
    pub sub: String,
    pub email: String,
    pub name: Option<String>,
}

/// Shape of the tokeninfo response fields we care about
#[derive(Debug, Deserialize)]
struct GoogleTokenInfo {
    aud: String,
    sub: String,
    email: String,
    name: Option<String>,
}

/// Validates Google ID tokens against the tokeninfo endpoint
#[derive(Debug, Clone)]
pub struct GoogleTokenVerifier {
    http: reqwest::Client,
    client_id: Option<String>,
}

impl GoogleTokenVerifier {
    /// Create a verifier for the configured OAuth client id
    pub fn new(config: &GoogleConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(TOKENINFO_TIMEOUT_SECONDS))
            .build()
            .map_err(|e| AppError::Configuration(format!("google verifier: {e}")))?;

        Ok(Self {
            http,
            client_id: config.client_id.clone(),
        })
    }

    /// Verify an ID token and extract the subject identity
    pub async fn verify(&self, id_token: &str) -> AppResult<GoogleIdentity> {
        let client_id = self
            .client_id
            .as_deref()
            .ok_or_else(|| AppError::Configuration("GOOGLE_CLIENT_ID is not set".to_string()))?;

        let response = self
            .http
            .get(TOKENINFO_URL)
            .query(&[("id_token", id_token)])
            .send()
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("tokeninfo request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::InvalidToken);
        }

        let info: GoogleTokenInfo = response
            .json()
            .await
            .map_err(|_| AppError::InvalidToken)?;

        // The token must have been issued for this application.
        if info.aud != client_id {
            return Err(AppError::InvalidToken);
        }

        Ok(GoogleIdentity {
            sub: info.sub,
            email: info.email,
            name: info.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            expiry_hours: 24,
        }
    }

    #[test]
    fn test_password_hash_round_trip() {
        let hash = AuthService::hash_password("Sup3rSecret").unwrap();
        assert_ne!(hash, "Sup3rSecret");
        assert!(AuthService::verify_password("Sup3rSecret", &hash).unwrap());
        assert!(!AuthService::verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_token_round_trip() {
        let user_id = Uuid::new_v4();
        let config = jwt_config();

        let (token, expires_in) = AuthService::generate_token(&user_id, &config).unwrap();
        assert_eq!(expires_in, 24 * 3600);

        let claims = AuthService::verify_token(&token, &config.secret).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
    }

    #[test]
    fn test_token_with_wrong_secret_is_rejected() {
        let user_id = Uuid::new_v4();
        let (token, _) = AuthService::generate_token(&user_id, &jwt_config()).unwrap();

        let err = AuthService::verify_token(&token, "other-secret").unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let now = Utc::now();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            exp: (now - chrono::Duration::hours(2)).timestamp(),
            iat: (now - chrono::Duration::hours(3)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let err = AuthService::verify_token(&token, "test-secret").unwrap_err();
        assert!(matches!(err, AppError::TokenExpired));
    }
}
