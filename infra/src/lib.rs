//! # Infrastructure Layer
//!
//! Concrete persistence for the StudentPass backend: a MySQL
//! implementation of the student repository over SQLx, plus connection
//! pool management. The store carries unique indexes on `mobile` and
//! `email` so that concurrent first-time registrations cannot produce
//! duplicate records.

pub mod database;

pub use database::connection::DatabasePool;
pub use database::mysql::MySqlStudentRepository;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
