//! Database time handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use timecheck_core::{DomainError, ServerTime};
use tokio::time::timeout;

use crate::response::ApiResult;
use crate::state::AppState;

/// Fixed greeting returned with every successful response
pub const GREETING: &str = "Hello from Node";

/// Success envelope for `GET /api`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeResponse {
    pub message: String,
    pub time: ServerTime,
}

impl TimeResponse {
    pub fn new(time: ServerTime) -> Self {
        Self {
            message: GREETING.to_string(),
            time,
        }
    }
}

/// Report the database server's current time
///
/// GET /api
pub async fn get_time(State(state): State<AppState>) -> ApiResult<Json<TimeResponse>> {
    let limit = state.request_timeout();
    let time = timeout(limit, state.clock().current_time())
        .await
        .map_err(|_| {
            DomainError::database_failure(format!(
                "database did not respond within {}ms",
                limit.as_millis()
            ))
        })??;

    Ok(Json(TimeResponse::new(time)))
}
