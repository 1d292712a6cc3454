//! HTTP route handlers

pub mod students;
