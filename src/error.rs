use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// A roll the engine refused; the scoreboard is unchanged
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RollError {
    #[error("Can not update score of a completed game")]
    GameAlreadyOver,

    #[error("Invalid number of pins; provided number: {pins}; highest possible number: {max}")]
    InvalidPinCount { pins: i32, max: u8 },
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Could not find a matching game with id: {0}")]
    GameNotFound(Uuid),

    #[error("Roll rejected for game {game_id}: {source}")]
    Rejected {
        game_id: Uuid,
        #[source]
        source: RollError,
    },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Stored scoreboard for game {game_id} is unreadable: {source}")]
    CorruptScoreboard {
        game_id: Uuid,
        #[source]
        source: serde_json::Error,
    },
}

pub type GameResult<T> = Result<T, GameError>;

impl ResponseError for GameError {
    fn status_code(&self) -> StatusCode {
        match self {
            GameError::GameNotFound(_) => StatusCode::NOT_FOUND,
            GameError::Rejected {
                source: RollError::GameAlreadyOver,
                ..
            } => StatusCode::CONFLICT,
            GameError::Rejected {
                source: RollError::InvalidPinCount { .. },
                ..
            } => StatusCode::BAD_REQUEST,
            GameError::Database(_) | GameError::CorruptScoreboard { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            GameError::GameNotFound(game_id) => json!({
                "error": self.to_string(),
                "game_id": game_id
            }),
            GameError::Rejected { game_id, source } => {
                let mut body = json!({
                    "error": source.to_string(),
                    "game_id": game_id
                });
                if let RollError::InvalidPinCount { pins, max } = source {
                    body["number_of_pins"] = json!(pins);
                    body["max_pins"] = json!(max);
                }
                body
            }
            GameError::Database(e) => {
                tracing::error!("Database error: {}", e);
                json!({ "error": "Database error" })
            }
            GameError::CorruptScoreboard { game_id, source } => {
                tracing::error!(%game_id, "Unreadable scoreboard: {}", source);
                json!({ "error": "Internal server error" })
            }
        };

        HttpResponse::build(self.status_code())
            .content_type("application/json")
            .json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pin_count_message() {
        let error = RollError::InvalidPinCount { pins: 11, max: 10 };
        assert_eq!(
            error.to_string(),
            "Invalid number of pins; provided number: 11; highest possible number: 10"
        );
    }

    #[test]
    fn test_status_codes() {
        let game_id = Uuid::new_v4();
        assert_eq!(
            GameError::GameNotFound(game_id).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            GameError::Rejected {
                game_id,
                source: RollError::GameAlreadyOver
            }
            .status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            GameError::Rejected {
                game_id,
                source: RollError::InvalidPinCount { pins: -1, max: 10 }
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
