pub mod bootstrap;
pub mod bowling;
pub mod dto;
pub mod entity;
pub mod error;
pub mod game_management;
pub mod store;
pub mod test_support;

pub use bootstrap::{build_store, connect_and_migrate, init_tracing, load_dotenv, AppConfig};

use actix_web::{error::InternalError, web, HttpResponse};
use serde_json::json;

use game_management::{create_game, get_game, submit_roll};

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(hello).service(
        web::scope("/api")
            .app_data(json_config())
            .service(create_game)
            .service(get_game)
            .service(submit_roll),
    );
}

/// Reject malformed bodies before they reach the engine
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let details = err.to_string();
        let response = HttpResponse::BadRequest()
            .content_type("application/json")
            .json(json!({
                "error": "Malformed request body",
                "details": details
            }));
        InternalError::from_response(err, response).into()
    })
}

#[actix_web::get("/")]
async fn hello() -> impl actix_web::Responder {
    "Hello, Bowler!"
}
