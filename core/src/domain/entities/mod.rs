//! Domain entities

pub mod student;
