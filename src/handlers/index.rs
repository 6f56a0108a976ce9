use crate::{
    config::Settings,
    database::{connection::DbPool, seed::DEMO_PASSWORD},
    errors::AppError,
};
use actix_web::{web, HttpResponse};
use serde_json::json;

pub async fn banner(settings: web::Data<Settings>) -> HttpResponse {
    let demo = if settings.seed_demo_users {
        format!("customer@demo.com / {}", DEMO_PASSWORD)
    } else {
        "demo accounts disabled".to_string()
    };

    HttpResponse::Ok().json(json!({
        "message": "Scrap Pickup API",
        "demo": demo,
    }))
}

pub async fn health(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    sqlx::query("SELECT 1").execute(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(json!({ "status": "ok" })))
}
