//! Registration token guard for `POST /api/users`.
//!
//! The bearer credential is checked against the live registration token
//! before the handler runs, so a rejected request never has its multipart
//! body read or its photo stored.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderMap, AUTHORIZATION},
    web, Error,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use ud_core::errors::DomainError;

use crate::app::AppState;
use crate::handlers::error::ApiError;

/// Extract the credential from an `Authorization: Bearer <token>` header
///
/// The scheme is matched case-insensitively. A missing header, another
/// scheme or an empty credential all yield `None`.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let (scheme, credential) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let credential = credential.trim();
    (!credential.is_empty()).then(|| credential.to_string())
}

/// Middleware factory admitting only holders of the live registration token
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationTokenGuard;

impl RegistrationTokenGuard {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for RegistrationTokenGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RegistrationTokenMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RegistrationTokenMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RegistrationTokenMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RegistrationTokenMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                let error = ApiError::from(DomainError::internal("application state is not configured"));
                return Ok(req.error_response(error).map_into_right_body());
            };

            let bearer = bearer_token(req.headers());
            if let Err(e) = state.registration.admit(bearer.as_deref()).await {
                tracing::info!(
                    path = %req.path(),
                    presented = bearer.is_some(),
                    "Registration token rejected"
                );
                return Ok(req.error_response(ApiError::from(e)).map_into_right_body());
            }

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}
