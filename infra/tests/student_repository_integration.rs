//! Database-backed repository tests.
//!
//! These require a running MySQL instance (DATABASE_URL) with the
//! migrations applied, so they are ignored by default:
//!
//! ```text
//! cargo test -p sp_infra -- --ignored
//! ```

use std::sync::Arc;

use sp_core::domain::entities::student::Student;
use sp_core::domain::value_objects::identifier::Identifier;
use sp_core::errors::DomainError;
use sp_core::repositories::StudentRepository;
use sp_infra::{DatabasePool, MySqlStudentRepository};
use sp_shared::config::DatabaseConfig;

async fn repository() -> Arc<MySqlStudentRepository> {
    let pool = DatabasePool::new(DatabaseConfig::from_env())
        .await
        .expect("database pool");
    pool.run_migrations().await.expect("migrations");
    Arc::new(MySqlStudentRepository::new(pool.get_pool().clone()))
}

fn unique_mobile() -> Identifier {
    // Unique per run so repeated test invocations do not collide
    Identifier::Mobile(format!("555{}", uuid::Uuid::new_v4().simple()))
}

#[tokio::test]
#[ignore]
async fn insert_then_find_round_trips() {
    let repo = repository().await;
    let identifier = unique_mobile();
    let student = Student::new(identifier.clone(), "1234".to_string());
    let id = student.id;

    repo.insert(student).await.unwrap();

    let found = repo
        .find_by_identifier(&identifier)
        .await
        .unwrap()
        .expect("student present");
    assert_eq!(found.id, id);
    assert_eq!(found.otp, "1234");
    assert!(!found.is_verified());
}

#[tokio::test]
#[ignore]
async fn duplicate_insert_hits_unique_index() {
    let repo = repository().await;
    let identifier = unique_mobile();

    repo.insert(Student::new(identifier.clone(), "1111".to_string()))
        .await
        .unwrap();
    let result = repo
        .insert(Student::new(identifier.clone(), "2222".to_string()))
        .await;

    assert!(matches!(
        result,
        Err(DomainError::DuplicateIdentifier { .. })
    ));
}

#[tokio::test]
#[ignore]
async fn verified_name_update_matches_only_verified_rows() {
    let repo = repository().await;
    let identifier = unique_mobile();
    let student = Student::new(identifier.clone(), "1234".to_string());
    let id = student.id;
    repo.insert(student).await.unwrap();

    assert!(!repo
        .set_name_if_verified(&identifier, "Alice")
        .await
        .unwrap());

    repo.mark_verified(id).await.unwrap();
    assert!(repo
        .set_name_if_verified(&identifier, "Alice")
        .await
        .unwrap());

    let found = repo
        .find_by_identifier(&identifier)
        .await
        .unwrap()
        .expect("student present");
    assert_eq!(found.student_name.as_deref(), Some("Alice"));
}
