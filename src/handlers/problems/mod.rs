//! Problem and judging handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Problem routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_problems))
        .route("/{id}", get(handler::get_problem))
        .route("/{id}/testcases", get(handler::list_sample_cases))
        .route("/{id}/run", post(handler::run_code))
        .route("/{id}/submit", post(handler::submit_code))
        .route("/{id}/status", get(handler::problem_status))
        .route("/{id}/submissions", get(handler::list_problem_submissions))
}
