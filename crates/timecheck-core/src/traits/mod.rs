//! Repository traits (ports)

mod repositories;

pub use repositories::{ClockRepository, RepoResult};
