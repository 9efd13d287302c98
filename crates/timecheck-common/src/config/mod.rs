//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, ServerConfig,
    DEFAULT_DATABASE_URL, DEFAULT_PORT,
};
