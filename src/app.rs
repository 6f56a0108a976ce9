use crate::{
    config::Settings,
    database::{
        connection::{create_pool, run_migrations, DbPool},
        seed::seed_demo_users,
    },
    errors::AppError,
    routes,
    services::auth::AuthService,
};
use actix_web::{error::JsonPayloadError, error::PathError, web, HttpRequest};
use tracing::debug;

/// Everything a worker needs, handed to each handler through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub pool: web::Data<DbPool>,
    pub auth_service: web::Data<AuthService>,
    pub settings: web::Data<Settings>,
}

impl AppState {
    /// Opens the store, applies migrations and seeds demo accounts when enabled.
    pub async fn build(settings: Settings) -> anyhow::Result<Self> {
        let pool = create_pool(&settings.database).await?;
        run_migrations(&pool).await?;

        let auth_service = AuthService::new(&settings.auth);
        if settings.seed_demo_users {
            seed_demo_users(&pool, &auth_service).await?;
        }

        Ok(Self {
            pool: web::Data::new(pool),
            auth_service: web::Data::new(auth_service),
            settings: web::Data::new(settings),
        })
    }

    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.pool.clone())
            .app_data(self.auth_service.clone())
            .app_data(self.settings.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .app_data(web::PathConfig::default().error_handler(path_error))
            .configure(routes::api::configure);
    }
}

fn json_error(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected body on {}: {}", req.path(), err);
    AppError::BadRequest(format!("Invalid request body: {}", err)).into()
}

fn path_error(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected path {}: {}", req.path(), err);
    AppError::BadRequest(format!("Invalid path: {}", err)).into()
}
