//! # StudentPass Shared
//!
//! Cross-cutting types shared by the StudentPass crates: configuration
//! structures and the common API response envelope.

pub mod config;
pub mod types;
