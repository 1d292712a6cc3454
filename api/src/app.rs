//! Application factory
//!
//! Builds the Actix-web application with all routes and middleware so
//! that the binary and the integration tests share the same wiring.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::cors::create_cors;
use crate::routes::students::{register, set_name, verify_otp, AppState};

use sp_core::repositories::StudentRepository;
use sp_core::services::verification::OtpGenerator;

/// Create and configure the application with all dependencies
pub fn create_app<R, G>(
    app_state: web::Data<AppState<R, G>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: StudentRepository + 'static,
    G: OtpGenerator + 'static,
{
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/students")
                    .route("/register", web::post().to(register::<R, G>))
                    .route("/verify-otp", web::post().to(verify_otp::<R, G>))
                    .route("/name", web::post().to(set_name::<R, G>)),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "studentpass-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
