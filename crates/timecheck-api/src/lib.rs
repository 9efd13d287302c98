//! # timecheck-api
//!
//! HTTP server built with Axum that reports the database server's clock.

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{bind_listener, create_app, create_app_state, run, run_server, serve_until};
pub use state::AppState;
