//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{config::Config, judge::JudgeEngine, services::GoogleTokenVerifier};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    pub db: PgPool,

    /// Judge engine bound to the external execution service
    pub judge: JudgeEngine,

    /// Google ID-token verifier for federated login
    pub google: GoogleTokenVerifier,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(db: PgPool, judge: JudgeEngine, google: GoogleTokenVerifier, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                db,
                judge,
                google,
                config,
            }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get a reference to the judge engine
    pub fn judge(&self) -> &JudgeEngine {
        &self.inner.judge
    }

    /// Get a reference to the Google token verifier
    pub fn google(&self) -> &GoogleTokenVerifier {
        &self.inner.google
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
