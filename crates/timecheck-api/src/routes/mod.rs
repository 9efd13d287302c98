//! Route definitions

use axum::{routing::get, Router};

use crate::handlers::time;
use crate::state::AppState;

/// Path of the time endpoint
pub const TIME_PATH: &str = "/api";

/// Create the main router
pub fn create_router() -> Router<AppState> {
    Router::new().route(TIME_PATH, get(time::get_time))
}
