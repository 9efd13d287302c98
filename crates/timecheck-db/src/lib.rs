//! # timecheck-db
//!
//! Database layer implementing the clock repository with PostgreSQL via SQLx.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use timecheck_core::ClockRepository;
//! use timecheck_db::{create_pool, PgClockRepository, PoolConfig};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::default())?;
//!     let clock = PgClockRepository::new(pool);
//!     println!("{}", clock.current_time().await?.into_inner());
//!     Ok(())
//! }
//! ```

pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, PgPool, PoolConfig};
pub use repositories::PgClockRepository;
