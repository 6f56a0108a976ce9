use crate::{errors::AppError, models::user::UserRole, services::auth::AuthService};
use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use tracing::warn;

/// The caller behind a valid bearer token. Taking this as a handler argument
/// makes the route require authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub role: UserRole,
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, AppError> {
    let auth_service = req
        .app_data::<web::Data<AuthService>>()
        .ok_or_else(|| AppError::Internal("Authentication service not configured".to_string()))?;

    let token = bearer_token(req).ok_or_else(|| AppError::unauthorized("No token"))?;

    let claims = auth_service.verify_token(token).map_err(|e| {
        warn!("Rejected bearer token on {}: {}", req.path(), e);
        AppError::unauthorized("Invalid token")
    })?;

    let user_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| AppError::unauthorized("Invalid token"))?;

    Ok(AuthenticatedUser {
        user_id,
        role: claims.role,
    })
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
