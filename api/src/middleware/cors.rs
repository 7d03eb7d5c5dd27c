//! CORS middleware configuration for cross-origin requests.
//!
//! Development allows any origin. Production restricts origins to the
//! comma-separated `ALLOWED_ORIGINS` list; other origins get no
//! `Access-Control-Allow-Origin` header, so browsers refuse the response.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use ud_shared::Environment;

/// Creates a CORS middleware instance configured for the current environment.
///
/// # Environment Variables
/// - `APP_ENV` / `ENVIRONMENT`: Set to "production" for production settings
/// - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins (production only)
/// - `CORS_MAX_AGE`: Max age for preflight cache (default: 3600 seconds)
pub fn create_cors() -> Cors {
    let max_age = std::env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(3600);

    if Environment::from_env().is_production() {
        let origins = std::env::var("ALLOWED_ORIGINS").unwrap_or_default();
        create_production_cors(&origins, max_age)
    } else {
        create_development_cors(max_age)
    }
}

fn create_development_cors(max_age: usize) -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(max_age)
}

fn create_production_cors(allowed_origins: &str, max_age: usize) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(max_age);

    for origin in allowed_origins.split(',').map(str::trim).filter(|o| !o.is_empty()) {
        tracing::info!(origin, "Adding allowed origin");
        cors = cors.allowed_origin(origin);
    }

    cors
}
