use crate::{
    database::connection::DbPool,
    errors::AppError,
    models::{
        auth::{AuthResponse, UserInfo},
        user::{normalize_email, CreateUser, User},
    },
    requests::auth::{LoginRequest, RegisterRequest},
    services::auth::AuthService,
};
use actix_web::{web, HttpResponse};
use tracing::{info, warn};

pub async fn register(
    pool: web::Data<DbPool>,
    auth_service: web::Data<AuthService>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let registration = request.into_inner().validate()?;

    if User::find_by_email(&pool, &registration.email).await?.is_some() {
        warn!("Registration rejected, email already taken: {}", registration.email);
        return Err(AppError::Conflict("User exists".to_string()));
    }

    let password_hash = auth_service.hash_password(registration.password).await?;

    let create_user = CreateUser {
        email: registration.email,
        password_hash,
        first_name: registration.first_name,
        last_name: registration.last_name,
        role: registration.role,
    };

    // the unique index still catches a concurrent registration of the same email
    let user = User::create(&pool, create_user).await?;
    info!("Registered user {} as {}", user.id, user.role);

    let tokens = auth_service.generate_token(&user)?;

    let response = AuthResponse {
        user: UserInfo::from(&user),
        tokens,
    };

    Ok(HttpResponse::Created().json(response))
}

pub async fn login(
    pool: web::Data<DbPool>,
    auth_service: web::Data<AuthService>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let email = normalize_email(&request.email);

    let user = auth_service
        .authenticate_user(&pool, &email, &request.password)
        .await?
        .ok_or_else(|| {
            warn!("Invalid credentials for user: {}", email);
            AppError::unauthorized("Invalid credentials")
        })?;

    let tokens = auth_service.generate_token(&user)?;
    info!("User {} logged in", user.id);

    let response = AuthResponse {
        user: UserInfo::from(&user),
        tokens,
    };
    Ok(HttpResponse::Ok().json(response))
}
