use actix_web::{web, HttpResponse};

use crate::dto::students::{SetNameRequest, SetNameResponse};
use crate::handlers::error::handle_domain_error;

use sp_core::domain::value_objects::identifier::Identifier;
use sp_core::errors::ValidationError;
use sp_core::repositories::StudentRepository;
use sp_core::services::verification::OtpGenerator;

use super::{mask_identifier, AppState};

/// Handler for POST /api/v1/students/name
///
/// Records the display name of a verified student. An unverified or
/// unknown identifier yields the same 404.
///
/// # Request Body
///
/// ```json
/// {
///     "mobile": "5551234",
///     "studentName": "Alice"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Student name added successfully"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing input
/// - 404 Not Found: no verified student matches the identifier
/// - 500 Internal Server Error: store failure
pub async fn set_name<R, G>(
    state: web::Data<AppState<R, G>>,
    request: web::Json<SetNameRequest>,
) -> HttpResponse
where
    R: StudentRepository + 'static,
    G: OtpGenerator + 'static,
{
    let request = request.into_inner();

    // Identifier problems are reported before a missing name
    let identifier = match Identifier::from_parts(request.mobile, request.email) {
        Ok(identifier) => identifier,
        Err(error) => return handle_domain_error(error.into()),
    };

    if request.student_name.is_empty() {
        return handle_domain_error(
            ValidationError::RequiredField {
                field: "studentName".to_string(),
            }
            .into(),
        );
    }

    log::info!(
        "Recording student name for identifier: {}",
        mask_identifier(identifier.value())
    );

    match state
        .verification_service
        .set_student_name(identifier, &request.student_name)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(SetNameResponse {
            message: "Student name added successfully".to_string(),
        }),
        Err(error) => handle_domain_error(error),
    }
}
