//! API response types shared across the service boundary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error response body
///
/// Every failure surfaced over HTTP uses this shape: a stable machine
/// readable `error` code, a human readable `message`, and an optional
/// `details` map for field-level information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details if available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a single detail to the error response
    pub fn with_detail(mut self, key: impl ToString, value: serde_json::Value) -> Self {
        let mut details = self.details.unwrap_or_default();
        details.insert(key.to_string(), value);
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::new("invalid_input", "Mobile number or email is required");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "invalid_input");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_error_response_with_detail() {
        let response = ErrorResponse::new("already_verified", "Student already verified")
            .with_detail("state", serde_json::json!("verified"));
        let details = response.details.unwrap();
        assert_eq!(details["state"], "verified");
    }
}
