use crate::{
    database::connection::DbPool,
    errors::AppError,
    middleware::auth::AuthenticatedUser,
    models::{pickup_request::PickupRequest, user::User},
    requests::pickup_request::{PickupRequestBody, UpdateStatusRequest},
    utils::helpers::ApiResponse,
};
use actix_web::{web, HttpResponse};
use tracing::{debug, info, warn};

/// Customers get their own requests, dealers and admins get everything,
/// newest first either way.
pub async fn index(
    user: AuthenticatedUser,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, AppError> {
    let requests = if user.role.sees_all_requests() {
        PickupRequest::find_all(&pool).await?
    } else {
        PickupRequest::find_by_customer(&pool, user.user_id).await?
    };

    debug!("Listing {} pickup requests for user {}", requests.len(), user.user_id);
    Ok(HttpResponse::Ok().json(ApiResponse::success(requests)))
}

pub async fn create(
    user: AuthenticatedUser,
    pool: web::Data<DbPool>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    if !user.role.can_submit_requests() {
        warn!("User {} with role {} tried to create a pickup request", user.user_id, user.role);
        return Err(AppError::forbidden("Only customers can create pickup requests"));
    }

    // the token may outlive the account it was issued for
    match User::find_by_id(&pool, user.user_id).await? {
        Some(account) if account.role.can_submit_requests() => {}
        _ => return Err(AppError::unauthorized("Account not found")),
    }

    // parsed only after the role check so non-customers always see 403
    let request: PickupRequestBody = serde_json::from_slice(&body)
        .map_err(|e| AppError::bad_request(format!("Invalid request body: {}", e)))?;
    let create_request = request.into_create(user.user_id)?;
    let created = PickupRequest::create(&pool, create_request).await?;
    info!("Customer {} created pickup request {}", user.user_id, created.id);

    Ok(HttpResponse::Created().json(created))
}

/// Any authenticated caller may set any status on any request id. The status
/// is stored exactly as sent. Unknown ids are accepted and change nothing.
pub async fn update_status(
    user: AuthenticatedUser,
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    request: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let request_id = path.into_inner();
    let status = &request.status;

    let updated = PickupRequest::update_status(&pool, request_id, status).await?;
    if updated == 0 {
        debug!("Status update for unknown pickup request {}", request_id);
    } else {
        info!(
            "Pickup request {} set to {:?} by user {} ({})",
            request_id, status, user.user_id, user.role
        );
    }

    Ok(HttpResponse::Ok().json(ApiResponse::ok()))
}
