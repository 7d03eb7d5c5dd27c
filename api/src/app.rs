//! Application state and factory
//!
//! This module holds the state shared by every handler and builds the
//! Actix-web application with its routes and middleware.

use std::path::PathBuf;
use std::sync::Arc;

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use ud_core::services::{DirectoryService, RegistrationService, TokenStore};
use ud_shared::{ErrorResponse, HealthResponse, ServerConfig};

use crate::middleware::{cors::create_cors, RegistrationTokenGuard};
use crate::routes::{positions, token, users};

/// Services and settings shared by all handlers
pub struct AppState {
    /// Token-gated registration workflow
    pub registration: Arc<RegistrationService>,
    /// Read-only user and position queries
    pub directory: Arc<DirectoryService>,
    /// Live registration token slot
    pub tokens: Arc<dyn TokenStore>,
    /// Base URL for pagination links and photo URLs
    pub app_url: String,
    /// Directory served under `/storage`
    pub public_dir: PathBuf,
    /// Upper bound on a multipart registration body, in bytes
    pub max_payload_size: usize,
}

impl AppState {
    pub fn new(
        registration: Arc<RegistrationService>,
        directory: Arc<DirectoryService>,
        tokens: Arc<dyn TokenStore>,
        server: &ServerConfig,
        public_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            registration,
            directory,
            tokens,
            app_url: server.app_url.clone(),
            public_dir: public_dir.into(),
            max_payload_size: server.max_payload_size,
        }
    }

    /// Absolute URL of the users listing, used for pagination links
    pub fn users_url(&self) -> String {
        format!("{}/api/users", self.app_url)
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let public_dir = state.public_dir.clone();

    App::new()
        .app_data(state)
        .wrap(create_cors())
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .route("/token", web::get().to(token::issue_token))
                .route("/positions", web::get().to(positions::list_positions))
                .service(
                    web::resource("/users")
                        .route(web::get().to(users::list_users))
                        .route(
                            web::post()
                                .to(users::register_user)
                                .wrap(RegistrationTokenGuard::new()),
                        ),
                )
                .route("/users/{id}", web::get().to(users::show_user)),
        )
        .service(actix_files::Files::new("/storage", public_dir))
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "user-directory-api",
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("The requested resource was not found."))
}
