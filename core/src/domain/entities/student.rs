//! Student entity representing a registrant in the StudentPass system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::identifier::Identifier;

/// Verification status of a student record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationState {
    /// Initial state: registered but the OTP has not been verified
    Unverified,
    /// Terminal state: the OTP was verified successfully
    Verified,
}

impl VerificationState {
    /// String form used for persistence
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationState::Unverified => "unverified",
            VerificationState::Verified => "verified",
        }
    }

    /// Parse the persisted string form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "unverified" => Some(VerificationState::Unverified),
            "verified" => Some(VerificationState::Verified),
            _ => None,
        }
    }
}

/// Student entity representing a registered student
///
/// A record is identified by exactly one of `mobile` or `email`; the
/// other field stays `None` for the lifetime of the record. The state
/// machine is two-state and forward-only: `Unverified` -> `Verified`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier, generated at first registration
    pub id: Uuid,

    /// Mobile number, if the student registered by mobile
    pub mobile: Option<String>,

    /// Email address, if the student registered by email
    pub email: Option<String>,

    /// Current one-time passcode; overwritten on every re-registration
    pub otp: String,

    /// Timestamp of first registration, never updated
    pub join_date: DateTime<Utc>,

    /// Verification state
    pub state: VerificationState,

    /// Display name, settable only once verified
    pub student_name: Option<String>,
}

impl Student {
    /// Creates a new unverified Student for the given identifier
    pub fn new(identifier: Identifier, otp: String) -> Self {
        let (mobile, email) = identifier.into_parts();
        Self {
            id: Uuid::new_v4(),
            mobile,
            email,
            otp,
            join_date: Utc::now(),
            state: VerificationState::Unverified,
            student_name: None,
        }
    }

    /// Replaces the current OTP, leaving state and name untouched
    pub fn reissue_otp(&mut self, otp: String) {
        self.otp = otp;
    }

    /// Transitions the record to `Verified`
    ///
    /// The transition is monotonic; calling this on an already verified
    /// record is a no-op.
    pub fn verify(&mut self) {
        self.state = VerificationState::Verified;
    }

    /// Sets the display name
    pub fn set_name(&mut self, name: String) {
        self.student_name = Some(name);
    }

    /// Checks whether the record has been verified
    pub fn is_verified(&self) -> bool {
        self.state == VerificationState::Verified
    }

    /// The identifier this record was registered under
    pub fn identifier(&self) -> Identifier {
        match (&self.mobile, &self.email) {
            (Some(mobile), _) => Identifier::Mobile(mobile.clone()),
            (None, Some(email)) => Identifier::Email(email.clone()),
            // Unreachable for records built through `new`
            (None, None) => Identifier::Mobile(String::new()),
        }
    }
}
