//! Application state
//!
//! Holds the clock repository and per-request limits shared by all handlers.

use std::sync::Arc;
use std::time::Duration;

use timecheck_core::ClockRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Source of the database time
    clock: Arc<dyn ClockRepository>,
    /// Upper bound on a single request
    request_timeout: Duration,
}

impl AppState {
    /// Create a new AppState
    pub fn new(clock: Arc<dyn ClockRepository>, request_timeout: Duration) -> Self {
        Self {
            clock,
            request_timeout,
        }
    }

    /// Get the clock repository
    pub fn clock(&self) -> &dyn ClockRepository {
        self.clock.as_ref()
    }

    /// Get the request timeout
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("clock", &"ClockRepository")
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
