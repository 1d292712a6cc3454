//! Main verification service implementation

use std::sync::Arc;

use crate::domain::entities::student::Student;
use crate::domain::value_objects::identifier::Identifier;
use crate::errors::{DomainError, DomainResult, ValidationError, VerificationError};
use crate::repositories::StudentRepository;

use super::otp::OtpGenerator;
use super::types::{Registration, Verified};

/// Verification service for the student registration lifecycle
///
/// Holds no mutable state of its own; every operation is a single
/// read-modify-write cycle against the injected repository.
pub struct VerificationService<R: StudentRepository, G: OtpGenerator> {
    /// Student persistence
    repository: Arc<R>,
    /// OTP generation capability
    otp_generator: Arc<G>,
}

impl<R: StudentRepository, G: OtpGenerator> VerificationService<R, G> {
    /// Create a new verification service
    pub fn new(repository: Arc<R>, otp_generator: Arc<G>) -> Self {
        Self {
            repository,
            otp_generator,
        }
    }

    /// Register a student or reissue the OTP for an existing one
    ///
    /// Idempotent by identifier: repeated calls for the same mobile or
    /// email reuse the stored identity and only refresh the passcode.
    /// A unique-index violation on insert means a concurrent request
    /// created the record first; the identifier is then treated as
    /// existing and the reissue path runs instead.
    pub async fn register_or_reissue(&self, identifier: Identifier) -> DomainResult<Registration> {
        let otp = self.otp_generator.generate();

        if let Some(existing) = self.repository.find_by_identifier(&identifier).await? {
            return self.reissue(existing, otp).await;
        }

        let student = Student::new(identifier.clone(), otp);
        match self.repository.insert(student).await {
            Ok(student) => {
                tracing::info!(
                    student_id = %student.id,
                    event = "student_registered",
                    "Created new student record"
                );
                Ok(Registration::created(
                    student.id,
                    student.otp,
                    student.join_date,
                ))
            }
            Err(DomainError::DuplicateIdentifier { .. }) => {
                // Lost the race against a concurrent first registration
                let existing = self
                    .repository
                    .find_by_identifier(&identifier)
                    .await?
                    .ok_or_else(|| DomainError::Internal {
                        message: "Record vanished after duplicate-key insert".to_string(),
                    })?;
                let otp = self.otp_generator.generate();
                self.reissue(existing, otp).await
            }
            Err(e) => Err(e),
        }
    }

    async fn reissue(&self, existing: Student, otp: String) -> DomainResult<Registration> {
        self.repository.update_otp(existing.id, &otp).await?;
        tracing::info!(
            student_id = %existing.id,
            event = "otp_reissued",
            "Refreshed OTP for existing student"
        );
        Ok(Registration::reissued(existing.id, otp))
    }

    /// Verify an OTP and transition the record to verified
    ///
    /// The only state-transition point in the system. The lookup keys on
    /// identifier AND exact passcode, so a wrong code and an unknown
    /// identifier both surface as `InvalidCredentials`.
    pub async fn verify_otp(&self, identifier: Identifier, otp: &str) -> DomainResult<Verified> {
        if otp.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "otp".to_string(),
            }
            .into());
        }

        let student = self
            .repository
            .find_by_credentials(&identifier, otp)
            .await?
            .ok_or(VerificationError::InvalidCredentials)?;

        if student.is_verified() {
            tracing::info!(
                student_id = %student.id,
                event = "otp_verify_repeated",
                "Verification attempted on already verified student"
            );
            return Err(VerificationError::AlreadyVerified {
                state: student.state,
            }
            .into());
        }

        self.repository.mark_verified(student.id).await?;
        tracing::info!(
            student_id = %student.id,
            event = "student_verified",
            "Student transitioned to verified"
        );

        Ok(Verified {
            student_id: student.id,
        })
    }

    /// Set the display name of a verified student
    ///
    /// An unverified or unknown identifier fails with `NotFound`; the
    /// two cases are indistinguishable to the caller.
    pub async fn set_student_name(&self, identifier: Identifier, name: &str) -> DomainResult<()> {
        if name.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "studentName".to_string(),
            }
            .into());
        }

        let updated = self
            .repository
            .set_name_if_verified(&identifier, name)
            .await?;

        if !updated {
            return Err(DomainError::NotFound {
                resource: "Student".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockStudentRepository;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Deterministic generator handing out 1000, 1001, 1002, ...
    struct SequenceOtpGenerator {
        next: AtomicU32,
    }

    impl SequenceOtpGenerator {
        fn new() -> Self {
            Self {
                next: AtomicU32::new(1000),
            }
        }
    }

    impl OtpGenerator for SequenceOtpGenerator {
        fn generate(&self) -> String {
            self.next.fetch_add(1, Ordering::SeqCst).to_string()
        }
    }

    fn service() -> VerificationService<MockStudentRepository, SequenceOtpGenerator> {
        VerificationService::new(
            Arc::new(MockStudentRepository::new()),
            Arc::new(SequenceOtpGenerator::new()),
        )
    }

    fn mobile() -> Identifier {
        Identifier::Mobile("5551234".to_string())
    }

    #[tokio::test]
    async fn test_first_registration_creates_record() {
        let service = service();

        let registration = service.register_or_reissue(mobile()).await.unwrap();

        assert!(registration.created);
        assert_eq!(registration.otp, "1000");
        assert!(registration.join_date.is_some());
        assert_eq!(
            registration.state,
            Some(crate::domain::entities::student::VerificationState::Unverified)
        );
    }

    #[tokio::test]
    async fn test_repeat_registration_is_idempotent_on_identity() {
        let service = service();

        let first = service.register_or_reissue(mobile()).await.unwrap();
        let second = service.register_or_reissue(mobile()).await.unwrap();

        assert_eq!(first.student_id, second.student_id);
        assert!(!second.created);
        assert!(second.join_date.is_none());
        assert_ne!(first.otp, second.otp);
    }

    #[tokio::test]
    async fn test_verify_otp_transitions_state() {
        let service = service();
        let registration = service.register_or_reissue(mobile()).await.unwrap();

        let verified = service
            .verify_otp(mobile(), &registration.otp)
            .await
            .unwrap();

        assert_eq!(verified.student_id, registration.student_id);
    }

    #[tokio::test]
    async fn test_verify_otp_wrong_code_is_invalid_credentials() {
        let service = service();
        service.register_or_reissue(mobile()).await.unwrap();

        let result = service.verify_otp(mobile(), "0000").await;

        assert!(matches!(
            result,
            Err(DomainError::Verification(
                VerificationError::InvalidCredentials
            ))
        ));
    }

    #[tokio::test]
    async fn test_verify_otp_unknown_identifier_is_invalid_credentials() {
        let service = service();

        let result = service.verify_otp(mobile(), "1000").await;

        assert!(matches!(
            result,
            Err(DomainError::Verification(
                VerificationError::InvalidCredentials
            ))
        ));
    }

    #[tokio::test]
    async fn test_verify_otp_twice_reports_already_verified() {
        let service = service();
        let registration = service.register_or_reissue(mobile()).await.unwrap();

        service
            .verify_otp(mobile(), &registration.otp)
            .await
            .unwrap();
        // OTP is not cleared on verification, so the same code matches
        // again and the already-verified guard fires
        let result = service.verify_otp(mobile(), &registration.otp).await;

        assert!(matches!(
            result,
            Err(DomainError::Verification(
                VerificationError::AlreadyVerified { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn test_stale_otp_fails_after_reissue() {
        let service = service();
        let first = service.register_or_reissue(mobile()).await.unwrap();
        service.register_or_reissue(mobile()).await.unwrap();

        let result = service.verify_otp(mobile(), &first.otp).await;

        assert!(matches!(
            result,
            Err(DomainError::Verification(
                VerificationError::InvalidCredentials
            ))
        ));
    }

    #[tokio::test]
    async fn test_verify_otp_empty_code_is_validation_error() {
        let service = service();

        let result = service.verify_otp(mobile(), "  ").await;

        assert!(matches!(
            result,
            Err(DomainError::Validation(ValidationError::RequiredField { .. }))
        ));
    }

    #[tokio::test]
    async fn test_set_name_requires_verified_record() {
        let service = service();
        let registration = service.register_or_reissue(mobile()).await.unwrap();

        let result = service.set_student_name(mobile(), "Alice").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));

        service
            .verify_otp(mobile(), &registration.otp)
            .await
            .unwrap();
        service.set_student_name(mobile(), "Alice").await.unwrap();

        // Idempotent overwrite is allowed
        service.set_student_name(mobile(), "Alice B.").await.unwrap();
    }

    #[tokio::test]
    async fn test_set_name_unknown_identifier_is_not_found() {
        let service = service();

        let result = service
            .set_student_name(Identifier::Email("nobody@example.com".to_string()), "Bob")
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_set_name_empty_is_validation_error() {
        let service = service();

        let result = service.set_student_name(mobile(), "").await;

        assert!(matches!(
            result,
            Err(DomainError::Validation(ValidationError::RequiredField { .. }))
        ));
    }

    #[tokio::test]
    async fn test_mobile_and_email_records_are_distinct() {
        let service = service();

        let by_mobile = service.register_or_reissue(mobile()).await.unwrap();
        let by_email = service
            .register_or_reissue(Identifier::Email("alice@example.com".to_string()))
            .await
            .unwrap();

        assert_ne!(by_mobile.student_id, by_email.student_id);
        assert!(by_email.created);
    }
}
