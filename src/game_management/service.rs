//! Scoreboard service
//!
//! Binds the game store to the scoring engine. Every roll is applied inside
//! the store's per-game lock so the whole cycle commits or nothing does.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::bowling::{submit_roll, Scoreboard};
use crate::error::{GameError, GameResult};
use crate::store::GameStore;

#[derive(Clone)]
pub struct ScoreboardService {
    store: Arc<dyn GameStore>,
}

impl ScoreboardService {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self { store }
    }

    /// Create and persist an empty scoreboard under a fresh game id
    pub async fn create_game(&self) -> GameResult<(Uuid, Scoreboard)> {
        let game_id = Uuid::new_v4();
        let scoreboard = Scoreboard::new();

        self.store.create(game_id, &scoreboard).await?;
        info!(%game_id, "Created new game scoreboard");

        Ok((game_id, scoreboard))
    }

    pub async fn fetch_scoreboard(&self, game_id: Uuid) -> GameResult<Scoreboard> {
        self.store.load(game_id).await
    }

    /// Apply one roll to a stored game and return the updated scoreboard
    pub async fn submit_roll(&self, game_id: Uuid, number_of_pins: i32) -> GameResult<Scoreboard> {
        info!(%game_id, number_of_pins, "Updating scoreboard");

        let result = self
            .store
            .update(
                game_id,
                Box::new(move |scoreboard: &mut Scoreboard| submit_roll(scoreboard, number_of_pins)),
            )
            .await;

        match &result {
            Ok(scoreboard) if scoreboard.is_game_over() => {
                info!(
                    %game_id,
                    total_score = ?scoreboard.total_score(),
                    perfect_game = scoreboard.is_perfect_game(),
                    "Game over"
                );
            }
            Ok(_) => {}
            Err(GameError::GameNotFound(_)) => warn!(%game_id, "Could not find game"),
            Err(GameError::Rejected { source, .. }) => warn!(%game_id, "Roll rejected: {source}"),
            Err(e) => warn!(%game_id, "Roll not recorded: {e}"),
        }

        result
    }
}
