//! Domain models
//!
//! Database-backed models and their associated enums.

pub mod problem;
pub mod submission;
pub mod test_case;
pub mod user;

pub use problem::{Difficulty, Problem};
pub use submission::{Submission, SubmissionStatus, TestResult};
pub use test_case::TestCase;
pub use user::User;
