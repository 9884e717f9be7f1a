//! Game store module
//!
//! Persistence collaborator for the scoring engine. A store keeps one
//! scoreboard per game id and guarantees a single writer per game while a
//! roll is applied.

pub mod database;
pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::bowling::Scoreboard;
use crate::error::{GameResult, RollError};

pub use database::DatabaseGameStore;
pub use memory::InMemoryGameStore;

/// Mutation run against a scoreboard while its game is locked
pub type ScoreboardUpdate<'a> =
    Box<dyn FnOnce(&mut Scoreboard) -> Result<(), RollError> + Send + 'a>;

#[async_trait]
pub trait GameStore: Send + Sync {
    /// Persist a new game
    async fn create(&self, game_id: Uuid, scoreboard: &Scoreboard) -> GameResult<()>;

    /// Fetch the scoreboard of a game, or `GameNotFound`
    async fn load(&self, game_id: Uuid) -> GameResult<Scoreboard>;

    /// Overwrite the scoreboard of an existing game
    async fn save(&self, game_id: Uuid, scoreboard: &Scoreboard) -> GameResult<()>;

    /// Load, mutate and save a game as one unit
    ///
    /// Concurrent updates of the same game are serialized; updates of
    /// different games do not wait on each other. When `apply` fails nothing
    /// is written and the failure is returned as `GameError::Rejected`.
    async fn update(&self, game_id: Uuid, apply: ScoreboardUpdate<'_>) -> GameResult<Scoreboard>;
}
