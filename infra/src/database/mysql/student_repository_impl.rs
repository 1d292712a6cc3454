//! MySQL implementation of the StudentRepository trait.
//!
//! All operations are single statements against the `students` table.
//! The unique indexes on `mobile` and `email` are the authority on
//! identifier uniqueness; `insert` translates a violation into
//! `DomainError::DuplicateIdentifier` for the service to handle.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sp_core::domain::entities::student::{Student, VerificationState};
use sp_core::domain::value_objects::identifier::Identifier;
use sp_core::errors::DomainError;
use sp_core::repositories::StudentRepository;

/// MySQL implementation of StudentRepository
pub struct MySqlStudentRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlStudentRepository {
    /// Create a new MySQL student repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Column an identifier is stored in
    fn identifier_column(identifier: &Identifier) -> &'static str {
        if identifier.is_mobile() {
            "mobile"
        } else {
            "email"
        }
    }

    /// Convert a database row to a Student entity
    fn row_to_student(row: &sqlx::mysql::MySqlRow) -> Result<Student, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get id: {}", e),
            })?;

        let state_str: String = row
            .try_get("state")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get state: {}", e),
            })?;
        let state = VerificationState::parse(&state_str).ok_or_else(|| DomainError::Database {
            message: format!("Unknown verification state: {}", state_str),
        })?;

        Ok(Student {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            mobile: row.try_get("mobile").map_err(|e| DomainError::Database {
                message: format!("Failed to get mobile: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            otp: row.try_get("otp").map_err(|e| DomainError::Database {
                message: format!("Failed to get otp: {}", e),
            })?,
            join_date: row
                .try_get::<DateTime<Utc>, _>("join_date")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get join_date: {}", e),
                })?,
            state,
            student_name: row
                .try_get("student_name")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get student_name: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl StudentRepository for MySqlStudentRepository {
    async fn find_by_identifier(
        &self,
        identifier: &Identifier,
    ) -> Result<Option<Student>, DomainError> {
        let query = format!(
            r#"
            SELECT id, mobile, email, otp, join_date, state, student_name
            FROM students
            WHERE {} = ?
            LIMIT 1
        "#,
            Self::identifier_column(identifier)
        );

        let result = sqlx::query(&query)
            .bind(identifier.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_student(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_credentials(
        &self,
        identifier: &Identifier,
        otp: &str,
    ) -> Result<Option<Student>, DomainError> {
        let query = format!(
            r#"
            SELECT id, mobile, email, otp, join_date, state, student_name
            FROM students
            WHERE {} = ? AND otp = ?
            LIMIT 1
        "#,
            Self::identifier_column(identifier)
        );

        let result = sqlx::query(&query)
            .bind(identifier.value())
            .bind(otp)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_student(&row)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, student: Student) -> Result<Student, DomainError> {
        let query = r#"
            INSERT INTO students (
                id, mobile, email, otp, join_date, state, student_name
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(student.id.to_string())
            .bind(&student.mobile)
            .bind(&student.email)
            .bind(&student.otp)
            .bind(student.join_date)
            .bind(student.state.as_str())
            .bind(&student.student_name)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if e.as_database_error()
                    .map_or(false, |db| db.is_unique_violation())
                {
                    DomainError::DuplicateIdentifier {
                        field: if student.mobile.is_some() {
                            "mobile".to_string()
                        } else {
                            "email".to_string()
                        },
                    }
                } else {
                    DomainError::Database {
                        message: format!("Failed to create student: {}", e),
                    }
                }
            })?;

        Ok(student)
    }

    async fn update_otp(&self, id: Uuid, otp: &str) -> Result<(), DomainError> {
        let query = "UPDATE students SET otp = ? WHERE id = ?";

        let result = sqlx::query(query)
            .bind(otp)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update OTP: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Student".to_string(),
            });
        }

        Ok(())
    }

    async fn mark_verified(&self, id: Uuid) -> Result<(), DomainError> {
        let query = "UPDATE students SET state = ? WHERE id = ?";

        let result = sqlx::query(query)
            .bind(VerificationState::Verified.as_str())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update state: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Student".to_string(),
            });
        }

        Ok(())
    }

    async fn set_name_if_verified(
        &self,
        identifier: &Identifier,
        name: &str,
    ) -> Result<bool, DomainError> {
        // Single conditional update: the match on state = verified makes
        // "unverified" and "nonexistent" indistinguishable here
        let query = format!(
            "UPDATE students SET student_name = ? WHERE {} = ? AND state = ?",
            Self::identifier_column(identifier)
        );

        let result = sqlx::query(&query)
            .bind(name)
            .bind(identifier.value())
            .bind(VerificationState::Verified.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to set student name: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
