//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::ServerTime;
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Clock Repository
// ============================================================================

#[async_trait]
pub trait ClockRepository: Send + Sync {
    /// Ask the database for its current timestamp
    async fn current_time(&self) -> RepoResult<ServerTime>;
}
