//! Domain value objects

pub mod identifier;
