//! DTOs for the student verification endpoints.
//!
//! Wire format is camelCase JSON. The identifier fields are optional at
//! the DTO level; the exactly-one rule is enforced by the domain when an
//! `Identifier` is built from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use sp_core::domain::entities::student::VerificationState;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Mobile number; exclusive with `email`
    pub mobile: Option<String>,

    /// Email address; exclusive with `mobile`
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    /// Mobile number; exclusive with `email`
    pub mobile: Option<String>,

    /// Email address; exclusive with `mobile`
    pub email: Option<String>,

    /// 4-digit one-time passcode
    #[validate(length(min = 1, message = "OTP is required"))]
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetNameRequest {
    /// Mobile number; exclusive with `email`
    pub mobile: Option<String>,

    /// Email address; exclusive with `mobile`
    pub email: Option<String>,

    /// Display name to record
    #[validate(length(min = 1, message = "Student name is required"))]
    pub student_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,

    pub student_id: Uuid,

    /// The freshly issued OTP
    ///
    /// Returned in the response because OTP delivery is out of scope
    /// for this service.
    pub otp: String,

    /// Present only when this request created the record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_date: Option<DateTime<Utc>>,

    /// Present only when this request created the record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<VerificationState>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpResponse {
    pub message: String,
    pub student_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetNameResponse {
    pub message: String,
}
