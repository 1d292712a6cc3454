//! CORS middleware configuration for cross-origin requests.
//!
//! Permissive in development; in production the allowed origins come
//! from the `ALLOWED_ORIGINS` environment variable.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

/// Creates a CORS middleware instance configured for the current environment.
pub fn create_cors() -> Cors {
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    let max_age = env::var("CORS_MAX_AGE")
        .unwrap_or_else(|_| "3600".to_string())
        .parse::<usize>()
        .unwrap_or(3600);

    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::USER_AGENT,
        ])
        .max_age(max_age);

    if environment == "production" {
        let mut cors = cors;
        if let Ok(allowed_origins) = env::var("ALLOWED_ORIGINS") {
            for origin in allowed_origins.split(',').map(|s| s.trim()) {
                if !origin.is_empty() {
                    log::info!("Adding allowed origin: {}", origin);
                    cors = cors.allowed_origin(origin);
                }
            }
        }
        cors
    } else {
        cors.allow_any_origin()
    }
}
