//! Repository interfaces for persistence

pub mod student;

pub use student::{MockStudentRepository, StudentRepository};
