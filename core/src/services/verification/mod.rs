//! Verification service module for the student registration workflow
//!
//! This module provides the complete OTP verification flow:
//! - Registration with idempotent OTP reissue per identifier
//! - OTP verification driving the unverified -> verified transition
//! - Display name assignment for verified students

mod otp;
mod service;
mod types;

pub use otp::{OtpGenerator, RandomOtpGenerator};
pub use service::VerificationService;
pub use types::{Registration, Verified};
