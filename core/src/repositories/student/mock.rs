//! In-memory implementation of StudentRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::student::{Student, VerificationState};
use crate::domain::value_objects::identifier::Identifier;
use crate::errors::DomainError;

use super::trait_::StudentRepository;

/// In-memory student repository for tests
///
/// Mirrors the store-level uniqueness guarantee: `insert` rejects an
/// identifier that is already registered, like the unique indexes on
/// `mobile` and `email` do in MySQL.
pub struct MockStudentRepository {
    students: Arc<RwLock<HashMap<Uuid, Student>>>,
}

impl MockStudentRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            students: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn matches(student: &Student, identifier: &Identifier) -> bool {
        match identifier {
            Identifier::Mobile(mobile) => student.mobile.as_deref() == Some(mobile.as_str()),
            Identifier::Email(email) => student.email.as_deref() == Some(email.as_str()),
        }
    }
}

impl Default for MockStudentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentRepository for MockStudentRepository {
    async fn find_by_identifier(
        &self,
        identifier: &Identifier,
    ) -> Result<Option<Student>, DomainError> {
        let students = self.students.read().await;
        Ok(students
            .values()
            .find(|s| Self::matches(s, identifier))
            .cloned())
    }

    async fn find_by_credentials(
        &self,
        identifier: &Identifier,
        otp: &str,
    ) -> Result<Option<Student>, DomainError> {
        let students = self.students.read().await;
        Ok(students
            .values()
            .find(|s| Self::matches(s, identifier) && s.otp == otp)
            .cloned())
    }

    async fn insert(&self, student: Student) -> Result<Student, DomainError> {
        let mut students = self.students.write().await;

        let identifier = student.identifier();
        if students.values().any(|s| Self::matches(s, &identifier)) {
            return Err(DomainError::DuplicateIdentifier {
                field: if identifier.is_mobile() {
                    "mobile".to_string()
                } else {
                    "email".to_string()
                },
            });
        }

        students.insert(student.id, student.clone());
        Ok(student)
    }

    async fn update_otp(&self, id: Uuid, otp: &str) -> Result<(), DomainError> {
        let mut students = self.students.write().await;
        let student = students.get_mut(&id).ok_or_else(|| DomainError::NotFound {
            resource: "Student".to_string(),
        })?;
        student.reissue_otp(otp.to_string());
        Ok(())
    }

    async fn mark_verified(&self, id: Uuid) -> Result<(), DomainError> {
        let mut students = self.students.write().await;
        let student = students.get_mut(&id).ok_or_else(|| DomainError::NotFound {
            resource: "Student".to_string(),
        })?;
        student.verify();
        Ok(())
    }

    async fn set_name_if_verified(
        &self,
        identifier: &Identifier,
        name: &str,
    ) -> Result<bool, DomainError> {
        let mut students = self.students.write().await;
        match students
            .values_mut()
            .find(|s| Self::matches(s, identifier) && s.state == VerificationState::Verified)
        {
            Some(student) => {
                student.set_name(name.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mobile_id() -> Identifier {
        Identifier::Mobile("5551234".to_string())
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = MockStudentRepository::new();
        let student = Student::new(mobile_id(), "1234".to_string());
        let id = student.id;

        repo.insert(student).await.unwrap();

        let found = repo.find_by_identifier(&mobile_id()).await.unwrap().unwrap();
        assert_eq!(found.id, id);
    }

    #[tokio::test]
    async fn test_insert_duplicate_identifier_rejected() {
        let repo = MockStudentRepository::new();
        repo.insert(Student::new(mobile_id(), "1234".to_string()))
            .await
            .unwrap();

        let result = repo.insert(Student::new(mobile_id(), "5678".to_string())).await;
        assert!(matches!(
            result,
            Err(DomainError::DuplicateIdentifier { .. })
        ));
    }

    #[tokio::test]
    async fn test_find_by_credentials_requires_exact_otp() {
        let repo = MockStudentRepository::new();
        repo.insert(Student::new(mobile_id(), "1234".to_string()))
            .await
            .unwrap();

        assert!(repo
            .find_by_credentials(&mobile_id(), "1234")
            .await
            .unwrap()
            .is_some());
        assert!(repo
            .find_by_credentials(&mobile_id(), "0000")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_set_name_requires_verified() {
        let repo = MockStudentRepository::new();
        let student = Student::new(mobile_id(), "1234".to_string());
        let id = student.id;
        repo.insert(student).await.unwrap();

        assert!(!repo.set_name_if_verified(&mobile_id(), "Alice").await.unwrap());

        repo.mark_verified(id).await.unwrap();
        assert!(repo.set_name_if_verified(&mobile_id(), "Alice").await.unwrap());

        let found = repo.find_by_identifier(&mobile_id()).await.unwrap().unwrap();
        assert_eq!(found.student_name.as_deref(), Some("Alice"));
    }
}
