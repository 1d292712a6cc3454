//! Error type definitions for validation and OTP verification.
//!
//! Validation errors carry descriptive messages because they report
//! caller mistakes. Verification errors are deliberately vague so that
//! an unknown identifier and a wrong passcode are indistinguishable.

use thiserror::Error;

use crate::domain::entities::student::VerificationState;

/// Input validation errors
///
/// All validation happens eagerly, before any store access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Mobile number or email is required")]
    MissingIdentifier,

    #[error("Only one of mobile number or email should be provided")]
    ConflictingIdentifiers,

    #[error("Required field: {field}")]
    RequiredField { field: String },
}

/// OTP verification errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// Covers both "wrong OTP" and "unknown identifier"
    #[error("Invalid OTP or details")]
    InvalidCredentials,

    /// Informational: the record was already verified, no transition
    /// was re-triggered. Carries the current state for caller awareness.
    #[error("Student already verified")]
    AlreadyVerified { state: VerificationState },
}
