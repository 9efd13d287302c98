//! PostgreSQL repository implementations

mod clock;
mod error;

pub use clock::PgClockRepository;
pub use error::map_db_error;
