use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bowling::GameStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub status: GameState,
    pub total_score: Option<i32>,
    #[sea_orm(column_type = "JsonBinary")]
    pub scoreboard: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum GameState {
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "game_over")]
    GameOver,
}

impl From<GameStatus> for GameState {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::InProgress => GameState::InProgress,
            GameStatus::GameOver => GameState::GameOver,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
