//! Configuration module
//!
//! Organizes configuration into logical areas:
//! - `server` - HTTP server bind configuration
//! - `database` - Database connection and pool configuration

pub mod database;
pub mod server;

use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
        }
    }
}
