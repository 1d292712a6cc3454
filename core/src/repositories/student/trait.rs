//! Student repository trait defining the interface for student persistence.
//!
//! The trait is async-first and returns `Result` for proper error
//! handling. Implementations must enforce a unique index on each of the
//! `mobile` and `email` columns; `insert` reports a violation as
//! [`DomainError::DuplicateIdentifier`] so the caller can re-fetch and
//! treat the identifier as already registered.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::student::Student;
use crate::domain::value_objects::identifier::Identifier;
use crate::errors::DomainError;

/// Repository trait for Student entity persistence operations
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Find a student by their registration identifier
    ///
    /// # Returns
    /// * `Ok(Some(Student))` - Student found
    /// * `Ok(None)` - No student registered under the identifier
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_identifier(
        &self,
        identifier: &Identifier,
    ) -> Result<Option<Student>, DomainError>;

    /// Find a student matching both the identifier and the exact OTP
    ///
    /// A miss means either the identifier is unknown or the OTP is
    /// wrong; the two cases are indistinguishable by design.
    async fn find_by_credentials(
        &self,
        identifier: &Identifier,
        otp: &str,
    ) -> Result<Option<Student>, DomainError>;

    /// Insert a new student record
    ///
    /// # Returns
    /// * `Ok(Student)` - The created student
    /// * `Err(DomainError::DuplicateIdentifier)` - A record already
    ///   holds this mobile or email (unique index violation)
    /// * `Err(DomainError)` - Other database error
    async fn insert(&self, student: Student) -> Result<Student, DomainError>;

    /// Overwrite the OTP of an existing record, leaving everything else
    /// untouched
    async fn update_otp(&self, id: Uuid, otp: &str) -> Result<(), DomainError>;

    /// Transition a record to the verified state
    async fn mark_verified(&self, id: Uuid) -> Result<(), DomainError>;

    /// Set the display name on the record matching the identifier,
    /// only if that record is verified
    ///
    /// # Returns
    /// * `Ok(true)` - A verified record matched and was updated
    /// * `Ok(false)` - No verified record matches the identifier
    ///   (absent and unverified are indistinguishable)
    async fn set_name_if_verified(
        &self,
        identifier: &Identifier,
        name: &str,
    ) -> Result<bool, DomainError>;
}
