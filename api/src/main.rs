use std::sync::Arc;

use actix_web::{web, HttpServer};
use log::info;

use sp_api::app::create_app;
use sp_api::routes::students::AppState;
use sp_core::services::verification::{RandomOtpGenerator, VerificationService};
use sp_infra::{DatabasePool, MySqlStudentRepository};
use sp_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting StudentPass API server");

    // Load configuration
    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();

    // Initialize the database and run migrations
    let pool = DatabasePool::new(config.database)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    pool.run_migrations()
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    // Wire up the verification service
    let repository = Arc::new(MySqlStudentRepository::new(pool.get_pool().clone()));
    let otp_generator = Arc::new(RandomOtpGenerator);
    let verification_service = Arc::new(VerificationService::new(repository, otp_generator));

    let app_state = web::Data::new(AppState {
        verification_service,
    });

    info!("Server will bind to: {}", bind_address);

    let server = HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await;

    pool.close().await;

    server
}
