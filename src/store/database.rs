use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::sea_query::LockType;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QuerySelect, Set,
    TransactionTrait,
};
use tracing::debug;
use uuid::Uuid;

use crate::bowling::Scoreboard;
use crate::entity::games;
use crate::error::{GameError, GameResult};
use crate::store::{GameStore, ScoreboardUpdate};

/// Postgres-backed store; the scoreboard is kept as jsonb on the `games` row
#[derive(Clone)]
pub struct DatabaseGameStore {
    db: DatabaseConnection,
}

impl DatabaseGameStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn decode(model: &games::Model) -> GameResult<Scoreboard> {
    serde_json::from_value(model.scoreboard.clone()).map_err(|source| {
        GameError::CorruptScoreboard {
            game_id: model.id,
            source,
        }
    })
}

fn encode(game_id: Uuid, scoreboard: &Scoreboard) -> GameResult<serde_json::Value> {
    serde_json::to_value(scoreboard)
        .map_err(|source| GameError::CorruptScoreboard { game_id, source })
}

/// Write the scoreboard and its summary columns back onto an existing row
async fn persist<C: ConnectionTrait>(
    conn: &C,
    model: games::Model,
    scoreboard: &Scoreboard,
) -> GameResult<()> {
    let now: DateTime<FixedOffset> = Utc::now().into();
    let game_id = model.id;

    let mut game_update: games::ActiveModel = model.into();
    game_update.status = Set(scoreboard.status().into());
    game_update.total_score = Set(scoreboard.total_score().map(i32::from));
    game_update.scoreboard = Set(encode(game_id, scoreboard)?);
    game_update.updated_at = Set(now);
    game_update.update(conn).await?;

    Ok(())
}

#[async_trait]
impl GameStore for DatabaseGameStore {
    async fn create(&self, game_id: Uuid, scoreboard: &Scoreboard) -> GameResult<()> {
        let now: DateTime<FixedOffset> = Utc::now().into();

        let game = games::ActiveModel {
            id: Set(game_id),
            status: Set(scoreboard.status().into()),
            total_score: Set(scoreboard.total_score().map(i32::from)),
            scoreboard: Set(encode(game_id, scoreboard)?),
            created_at: Set(now),
            updated_at: Set(now),
        };
        game.insert(&self.db).await?;

        debug!(%game_id, "Inserted games row");
        Ok(())
    }

    async fn load(&self, game_id: Uuid) -> GameResult<Scoreboard> {
        let game = games::Entity::find_by_id(game_id)
            .one(&self.db)
            .await?
            .ok_or(GameError::GameNotFound(game_id))?;

        decode(&game)
    }

    async fn save(&self, game_id: Uuid, scoreboard: &Scoreboard) -> GameResult<()> {
        let game = games::Entity::find_by_id(game_id)
            .one(&self.db)
            .await?
            .ok_or(GameError::GameNotFound(game_id))?;

        persist(&self.db, game, scoreboard).await
    }

    async fn update(&self, game_id: Uuid, apply: ScoreboardUpdate<'_>) -> GameResult<Scoreboard> {
        let txn = self.db.begin().await?;

        // Lock the game row for update to prevent concurrent modifications
        let game = match games::Entity::find_by_id(game_id)
            .lock(LockType::Update)
            .one(&txn)
            .await?
        {
            Some(game) => game,
            None => {
                txn.rollback().await?;
                return Err(GameError::GameNotFound(game_id));
            }
        };

        let mut scoreboard = decode(&game)?;
        if let Err(source) = apply(&mut scoreboard) {
            txn.rollback().await?;
            return Err(GameError::Rejected { game_id, source });
        }

        persist(&txn, game, &scoreboard).await?;
        txn.commit().await?;

        debug!(%game_id, "Committed scoreboard update");
        Ok(scoreboard)
    }
}
