use actix_web::{web, HttpResponse};

use crate::dto::students::{VerifyOtpRequest, VerifyOtpResponse};
use crate::handlers::error::handle_domain_error;

use sp_core::domain::value_objects::identifier::Identifier;
use sp_core::errors::ValidationError;
use sp_core::repositories::StudentRepository;
use sp_core::services::verification::OtpGenerator;

use super::{mask_identifier, AppState};

/// Handler for POST /api/v1/students/verify-otp
///
/// Verifies the OTP for an identifier. A match on an unverified record
/// transitions it to verified; a miss is reported vaguely so callers
/// cannot probe which identifiers are registered.
///
/// # Request Body
///
/// ```json
/// {
///     "mobile": "5551234",
///     "otp": "4821"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "OTP verified successfully",
///     "studentId": "550e8400-e29b-41d4-a716-446655440000"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing input, wrong OTP/unknown identifier, or
///   already verified (body carries the current state)
/// - 500 Internal Server Error: store failure
pub async fn verify_otp<R, G>(
    state: web::Data<AppState<R, G>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    R: StudentRepository + 'static,
    G: OtpGenerator + 'static,
{
    let request = request.into_inner();

    // Identifier problems are reported before a missing code
    let identifier = match Identifier::from_parts(request.mobile, request.email) {
        Ok(identifier) => identifier,
        Err(error) => return handle_domain_error(error.into()),
    };

    if request.otp.is_empty() {
        return handle_domain_error(
            ValidationError::RequiredField {
                field: "otp".to_string(),
            }
            .into(),
        );
    }

    log::info!(
        "Processing OTP verification for identifier: {}",
        mask_identifier(identifier.value())
    );

    match state
        .verification_service
        .verify_otp(identifier, &request.otp)
        .await
    {
        Ok(verified) => HttpResponse::Ok().json(VerifyOtpResponse {
            message: "OTP verified successfully".to_string(),
            student_id: verified.student_id,
        }),
        Err(error) => handle_domain_error(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_verify_request_validation() {
        let valid = VerifyOtpRequest {
            mobile: Some("5551234".to_string()),
            email: None,
            otp: "1234".to_string(),
        };
        assert!(valid.validate().is_ok());

        let missing_otp = VerifyOtpRequest {
            mobile: Some("5551234".to_string()),
            email: None,
            otp: String::new(),
        };
        assert!(missing_otp.validate().is_err());
    }
}
