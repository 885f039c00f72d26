//! Judging pipeline
//!
//! Everything between a (code, language) pair and a verdict: the client for
//! the external execution service, the test-case selector, and the engine
//! that fans evaluation out and aggregates the results.

pub mod engine;
pub mod executor;
pub mod selector;

pub use engine::{JudgeEngine, JudgeVerdict};
pub use executor::{CodeExecutor, ExecutionClient, ExecutionError};
pub use selector::{select_cases, JudgeMode};
