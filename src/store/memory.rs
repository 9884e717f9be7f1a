use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::bowling::Scoreboard;
use crate::error::{GameError, GameResult};
use crate::store::{GameStore, ScoreboardUpdate};

type GameSlot = Arc<Mutex<Scoreboard>>;

/// Process-local store; each game sits behind its own async mutex
#[derive(Default)]
pub struct InMemoryGameStore {
    games: RwLock<HashMap<Uuid, GameSlot>>,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, game_id: Uuid) -> GameResult<GameSlot> {
        let games = self.games.read().unwrap_or_else(PoisonError::into_inner);
        games
            .get(&game_id)
            .cloned()
            .ok_or(GameError::GameNotFound(game_id))
    }
}

#[async_trait]
impl GameStore for InMemoryGameStore {
    async fn create(&self, game_id: Uuid, scoreboard: &Scoreboard) -> GameResult<()> {
        let mut games = self.games.write().unwrap_or_else(PoisonError::into_inner);
        games.insert(game_id, Arc::new(Mutex::new(scoreboard.clone())));
        Ok(())
    }

    async fn load(&self, game_id: Uuid) -> GameResult<Scoreboard> {
        let slot = self.slot(game_id)?;
        let scoreboard = slot.lock().await;
        Ok(scoreboard.clone())
    }

    async fn save(&self, game_id: Uuid, scoreboard: &Scoreboard) -> GameResult<()> {
        let slot = self.slot(game_id)?;
        *slot.lock().await = scoreboard.clone();
        Ok(())
    }

    async fn update(&self, game_id: Uuid, apply: ScoreboardUpdate<'_>) -> GameResult<Scoreboard> {
        let slot = self.slot(game_id)?;
        let mut stored = slot.lock().await;

        let mut scoreboard = stored.clone();
        apply(&mut scoreboard).map_err(|source| GameError::Rejected { game_id, source })?;

        *stored = scoreboard.clone();
        Ok(scoreboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bowling::submit_roll;
    use crate::error::RollError;

    #[tokio::test]
    async fn test_load_unknown_game() {
        let store = InMemoryGameStore::new();
        let game_id = Uuid::new_v4();
        assert!(matches!(
            store.load(game_id).await,
            Err(GameError::GameNotFound(id)) if id == game_id
        ));
    }

    #[tokio::test]
    async fn test_create_then_load() {
        let store = InMemoryGameStore::new();
        let game_id = Uuid::new_v4();
        store.create(game_id, &Scoreboard::new()).await.unwrap();
        assert_eq!(store.load(game_id).await.unwrap(), Scoreboard::new());
    }

    #[tokio::test]
    async fn test_save_unknown_game() {
        let store = InMemoryGameStore::new();
        let result = store.save(Uuid::new_v4(), &Scoreboard::new()).await;
        assert!(matches!(result, Err(GameError::GameNotFound(_))));
    }

    #[tokio::test]
    async fn test_update_applies_roll() {
        let store = InMemoryGameStore::new();
        let game_id = Uuid::new_v4();
        store.create(game_id, &Scoreboard::new()).await.unwrap();

        let updated = store
            .update(
                game_id,
                Box::new(|scoreboard: &mut Scoreboard| submit_roll(scoreboard, 7)),
            )
            .await
            .unwrap();
        assert_eq!(updated.frames()[0].first_roll(), Some(7));
        assert_eq!(store.load(game_id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_rejected_update_writes_nothing() {
        let store = InMemoryGameStore::new();
        let game_id = Uuid::new_v4();
        store.create(game_id, &Scoreboard::new()).await.unwrap();

        let result = store
            .update(
                game_id,
                Box::new(|scoreboard: &mut Scoreboard| submit_roll(scoreboard, 11)),
            )
            .await;
        assert!(matches!(
            result,
            Err(GameError::Rejected {
                source: RollError::InvalidPinCount { pins: 11, max: 10 },
                ..
            })
        ));
        assert_eq!(store.load(game_id).await.unwrap(), Scoreboard::new());
    }

    #[tokio::test]
    async fn test_concurrent_updates_are_serialized() {
        let store = Arc::new(InMemoryGameStore::new());
        let game_id = Uuid::new_v4();
        store.create(game_id, &Scoreboard::new()).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..20 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .update(
                        game_id,
                        Box::new(|scoreboard: &mut Scoreboard| submit_roll(scoreboard, 1)),
                    )
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let scoreboard = store.load(game_id).await.unwrap();
        assert!(scoreboard.is_game_over());
        assert_eq!(scoreboard.total_score(), Some(20));
    }
}
