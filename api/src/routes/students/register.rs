use actix_web::{web, HttpResponse};

use crate::dto::students::{RegisterRequest, RegisterResponse};
use crate::handlers::error::handle_domain_error;

use sp_core::domain::value_objects::identifier::Identifier;
use sp_core::repositories::StudentRepository;
use sp_core::services::verification::OtpGenerator;

use super::{mask_identifier, AppState};

/// Handler for POST /api/v1/students/register
///
/// Registers a student by mobile or email and issues a fresh OTP.
/// Repeated registration for a known identifier reuses the stored
/// identity and only refreshes the code.
///
/// # Request Body
///
/// ```json
/// {
///     "mobile": "5551234"
/// }
/// ```
/// or
/// ```json
/// {
///     "email": "alice@example.com"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK), first registration
/// ```json
/// {
///     "message": "Verification initiated",
///     "studentId": "550e8400-e29b-41d4-a716-446655440000",
///     "otp": "4821",
///     "joinDate": "2025-01-10T10:00:00Z",
///     "state": "unverified"
/// }
/// ```
///
/// ## Success (200 OK), repeat registration
/// ```json
/// {
///     "message": "OTP updated for existing student",
///     "studentId": "550e8400-e29b-41d4-a716-446655440000",
///     "otp": "9173"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: neither or both identifier fields provided
/// - 500 Internal Server Error: store failure
pub async fn register<R, G>(
    state: web::Data<AppState<R, G>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    R: StudentRepository + 'static,
    G: OtpGenerator + 'static,
{
    let request = request.into_inner();

    let identifier = match Identifier::from_parts(request.mobile, request.email) {
        Ok(identifier) => identifier,
        Err(error) => return handle_domain_error(error.into()),
    };

    log::info!(
        "Processing registration for identifier: {}",
        mask_identifier(identifier.value())
    );

    match state
        .verification_service
        .register_or_reissue(identifier)
        .await
    {
        Ok(registration) => {
            let message = if registration.created {
                "Verification initiated"
            } else {
                "OTP updated for existing student"
            };
            HttpResponse::Ok().json(RegisterResponse {
                message: message.to_string(),
                student_id: registration.student_id,
                otp: registration.otp,
                join_date: registration.join_date,
                state: registration.state,
            })
        }
        Err(error) => handle_domain_error(error),
    }
}
