//! Cross-cutting request handlers

pub mod error;
