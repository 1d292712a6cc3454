//! Identifier value object: the lookup key for a student record.
//!
//! Every operation takes exactly one of a mobile number or an email
//! address. Constructing an [`Identifier`] from the raw optional pair is
//! the single place where that rule is enforced, before any store access.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// The value a student record is registered and looked up under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Identifier {
    /// Mobile number
    Mobile(String),
    /// Email address
    Email(String),
}

impl Identifier {
    /// Build an identifier from the optional request fields
    ///
    /// Fails when both fields are present, both are absent, or the
    /// provided field is empty.
    pub fn from_parts(
        mobile: Option<String>,
        email: Option<String>,
    ) -> Result<Self, ValidationError> {
        let mobile = mobile.filter(|m| !m.trim().is_empty());
        let email = email.filter(|e| !e.trim().is_empty());

        match (mobile, email) {
            (Some(_), Some(_)) => Err(ValidationError::ConflictingIdentifiers),
            (Some(mobile), None) => Ok(Identifier::Mobile(mobile)),
            (None, Some(email)) => Ok(Identifier::Email(email)),
            (None, None) => Err(ValidationError::MissingIdentifier),
        }
    }

    /// Split into the (mobile, email) column pair for persistence
    pub fn into_parts(self) -> (Option<String>, Option<String>) {
        match self {
            Identifier::Mobile(mobile) => (Some(mobile), None),
            Identifier::Email(email) => (None, Some(email)),
        }
    }

    /// The raw identifier value
    pub fn value(&self) -> &str {
        match self {
            Identifier::Mobile(v) | Identifier::Email(v) => v,
        }
    }

    /// True if this is a mobile identifier
    pub fn is_mobile(&self) -> bool {
        matches!(self, Identifier::Mobile(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_mobile_only() {
        let identifier = Identifier::from_parts(Some("5551234".to_string()), None).unwrap();
        assert_eq!(identifier, Identifier::Mobile("5551234".to_string()));
        assert!(identifier.is_mobile());
    }

    #[test]
    fn test_from_parts_email_only() {
        let identifier =
            Identifier::from_parts(None, Some("alice@example.com".to_string())).unwrap();
        assert_eq!(identifier.value(), "alice@example.com");
        assert!(!identifier.is_mobile());
    }

    #[test]
    fn test_from_parts_both_fails() {
        let result = Identifier::from_parts(
            Some("5551234".to_string()),
            Some("alice@example.com".to_string()),
        );
        assert!(matches!(result, Err(ValidationError::ConflictingIdentifiers)));
    }

    #[test]
    fn test_from_parts_neither_fails() {
        let result = Identifier::from_parts(None, None);
        assert!(matches!(result, Err(ValidationError::MissingIdentifier)));
    }

    #[test]
    fn test_from_parts_blank_treated_as_missing() {
        let result = Identifier::from_parts(Some("   ".to_string()), None);
        assert!(matches!(result, Err(ValidationError::MissingIdentifier)));
    }

    #[test]
    fn test_into_parts() {
        let (mobile, email) = Identifier::Mobile("5551234".to_string()).into_parts();
        assert_eq!(mobile.as_deref(), Some("5551234"));
        assert_eq!(email, None);
    }
}
