//! Current-user handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, put},
    Router,
};

use crate::state::AppState;

/// Current-user routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/submissions", get(handler::list_submissions))
        .route("/statistics", get(handler::statistics))
        .route("/profile", put(handler::update_profile))
}
