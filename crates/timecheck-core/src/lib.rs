//! # timecheck-core
//!
//! Domain layer containing the server time entity, the clock repository port,
//! and domain errors. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::ServerTime;
pub use error::DomainError;
pub use traits::{ClockRepository, RepoResult};
