//! Integration test utilities for the timecheck server
//!
//! Spawns the real router on a TCP listener and talks to it over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
