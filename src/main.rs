use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_actix_web::TracingLogger;

use scoreboard::game_management::ScoreboardService;
use scoreboard::{build_store, configure_routes, init_tracing, load_dotenv, AppConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    init_tracing();

    let config = AppConfig::from_env()?;
    info!("Starting bowling scoreboard server...");

    let store = build_store(&config).await?;
    let service = web::Data::new(ScoreboardService::new(store));

    let cors_origin = config.cors_allowed_origin.clone();
    info!("Listening on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT])
            .allowed_header(header::CONTENT_TYPE)
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .app_data(service.clone())
            .configure(configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
