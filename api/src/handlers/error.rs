//! Domain error to HTTP response mapping.
//!
//! Validation and verification failures become 400s with a stable error
//! code. Store and unexpected failures become opaque 500s: the detail is
//! logged server-side and never leaks into the response body.

use actix_web::HttpResponse;

use sp_core::errors::{DomainError, VerificationError};
use sp_shared::types::response::ErrorResponse;

/// Convert a domain error into the appropriate HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Validation(validation_error) => {
            log::warn!("Validation error: {}", validation_error);
            HttpResponse::BadRequest().json(ErrorResponse::new(
                "invalid_input",
                validation_error.to_string(),
            ))
        }
        DomainError::Verification(VerificationError::InvalidCredentials) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(
                "invalid_credentials",
                VerificationError::InvalidCredentials.to_string(),
            ))
        }
        DomainError::Verification(VerificationError::AlreadyVerified { state }) => {
            HttpResponse::BadRequest().json(
                ErrorResponse::new("already_verified", "Student already verified")
                    .with_detail("state", serde_json::json!(state)),
            )
        }
        DomainError::NotFound { .. } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            "No verified student found with provided details",
        )),
        DomainError::DuplicateIdentifier { .. }
        | DomainError::Database { .. }
        | DomainError::Internal { .. } => {
            // Never expose store details to the caller
            log::error!("Internal error: {:?}", error);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "Internal server error",
            ))
        }
    }
}
