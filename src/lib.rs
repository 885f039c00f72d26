//! CodeArena - Coding Judge Backend
//!
//! This library provides the core functionality for the CodeArena platform,
//! a coding-judge backend that evaluates user submissions against problem
//! test suites through an external execution service.
//!
//! # Features
//!
//! - Problems with sample and hidden test cases
//! - Concurrent per-test-case judging with deterministic aggregation
//! - Append-only submission history with derived solved state
//! - Password and Google federated authentication
//! - Leaderboard and per-user statistics
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs
//! - **Judge**: Execution client, test-case selection, verdict aggregation

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod judge;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
