use actix_web::{middleware::Logger, App, HttpServer};
use dotenv::dotenv;
use pickup::{app::AppState, config::Settings, middleware::cors::cors, telemetry};
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    telemetry::init();

    let settings = Settings::load()?;
    let bind = (settings.server.host.clone(), settings.server.port);
    let cors_settings = settings.cors.clone();

    let state = AppState::build(settings).await?;

    info!("Scrap Pickup API listening on {}:{}", bind.0, bind.1);
    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Logger::default())
            .wrap(cors(&cors_settings))
            .configure(move |cfg| state.configure(cfg))
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
