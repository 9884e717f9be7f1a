//! Game management module
//!
//! HTTP handlers for single-player bowling games. Handlers only parse input
//! and shape responses; scoring lives in `crate::bowling`.

pub mod service;

use actix_web::{get, post, web, HttpResponse, Result as ActixResult};
use serde_json::json;
use uuid::Uuid;

use crate::dto::game_snapshot::GameSnapshot;
use crate::dto::roll_request::RollRequest;

pub use service::ScoreboardService;

fn parse_game_id(raw: &str) -> Result<Uuid, HttpResponse> {
    raw.parse::<Uuid>().map_err(|_| {
        HttpResponse::BadRequest()
            .content_type("application/json")
            .json(json!({
                "error": "Invalid game ID format"
            }))
    })
}

#[post("/games")]
pub async fn create_game(service: web::Data<ScoreboardService>) -> ActixResult<HttpResponse> {
    let (game_id, scoreboard) = service.create_game().await?;

    Ok(HttpResponse::Created()
        .content_type("application/json")
        .json(GameSnapshot::new(game_id, &scoreboard)))
}

#[get("/games/{game_id}")]
pub async fn get_game(
    path: web::Path<String>,
    service: web::Data<ScoreboardService>,
) -> ActixResult<HttpResponse> {
    let game_id = match parse_game_id(&path) {
        Ok(id) => id,
        Err(response) => return Ok(response),
    };

    let scoreboard = service.fetch_scoreboard(game_id).await?;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .json(GameSnapshot::new(game_id, &scoreboard)))
}

#[post("/games/{game_id}/rolls")]
pub async fn submit_roll(
    path: web::Path<String>,
    roll: web::Json<RollRequest>,
    service: web::Data<ScoreboardService>,
) -> ActixResult<HttpResponse> {
    let game_id = match parse_game_id(&path) {
        Ok(id) => id,
        Err(response) => return Ok(response),
    };

    let scoreboard = service.submit_roll(game_id, roll.number_of_pins).await?;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .json(GameSnapshot::new(game_id, &scoreboard)))
}
