//! Types for verification service results

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::student::VerificationState;

/// Result of a registration request
///
/// `join_date` and `state` are populated only when the request created a
/// new record; a reissue for an existing identifier returns just the
/// identity and the fresh code.
#[derive(Debug, Clone)]
pub struct Registration {
    /// The student's stable identity
    pub student_id: Uuid,
    /// The freshly generated OTP
    pub otp: String,
    /// Join date, present only for a newly created record
    pub join_date: Option<DateTime<Utc>>,
    /// Verification state, present only for a newly created record
    pub state: Option<VerificationState>,
    /// Whether this request created the record
    pub created: bool,
}

impl Registration {
    /// Registration that created a new record
    pub fn created(student_id: Uuid, otp: String, join_date: DateTime<Utc>) -> Self {
        Self {
            student_id,
            otp,
            join_date: Some(join_date),
            state: Some(VerificationState::Unverified),
            created: true,
        }
    }

    /// Registration that refreshed the OTP of an existing record
    pub fn reissued(student_id: Uuid, otp: String) -> Self {
        Self {
            student_id,
            otp,
            join_date: None,
            state: None,
            created: false,
        }
    }
}

/// Result of a successful OTP verification
#[derive(Debug, Clone)]
pub struct Verified {
    /// The student whose record transitioned to verified
    pub student_id: Uuid,
}
