//! Domain entities

mod server_time;

pub use server_time::ServerTime;
