//! Scoreboard state module
//!
//! The scoreboard is the aggregate the engine operates on: the ordered frame
//! sequence, the game status and the total score.

use serde::{Deserialize, Serialize};

use crate::bowling::frame::Frame;
use crate::bowling::rules::{FINAL_FRAME, FIRST_FRAME, PERFECT_SCORE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    InProgress,
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    status: GameStatus,
    frames: Vec<Frame>,
    total_score: Option<u16>,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoreboard {
    /// Empty scoreboard for a new game
    pub fn new() -> Self {
        Self {
            status: GameStatus::InProgress,
            frames: Vec::new(),
            total_score: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn total_score(&self) -> Option<u16> {
        self.total_score
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// A finished game worth 300 points
    pub fn is_perfect_game(&self) -> bool {
        self.is_game_over() && self.total_score == Some(PERFECT_SCORE)
    }

    /// The last frame, if it still accepts rolls
    pub fn open_frame(&self) -> Option<&Frame> {
        self.frames.last().filter(|frame| !frame.rolls_complete())
    }

    /// The frame that takes the next roll, appending one when needed
    ///
    /// Appends frame 1 to an empty scoreboard, or the next frame when the last
    /// one is complete and the game is still in progress. Once the game is
    /// over the last frame is returned unchanged.
    pub(crate) fn active_frame_mut(&mut self) -> &mut Frame {
        let next_index = match self.frames.last() {
            None => Some(FIRST_FRAME),
            Some(last) if last.rolls_complete() && !self.is_game_over() => Some(last.index() + 1),
            Some(_) => None,
        };

        if let Some(index) = next_index {
            debug_assert!(index <= FINAL_FRAME, "no frame after the final frame");
            self.frames.push(Frame::new(index));
        }

        let position = self.frames.len() - 1;
        &mut self.frames[position]
    }

    /// True once the final frame exists and holds all of its rolls
    pub(crate) fn final_frame_complete(&self) -> bool {
        self.frames
            .last()
            .is_some_and(|frame| frame.is_final() && frame.rolls_complete())
    }

    pub(crate) fn frames_mut(&mut self) -> &mut [Frame] {
        &mut self.frames
    }

    pub(crate) fn set_total_score(&mut self, total_score: Option<u16>) {
        self.total_score = total_score;
    }

    pub(crate) fn mark_game_over(&mut self) {
        self.status = GameStatus::GameOver;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_scoreboard_is_empty_and_in_progress() {
        let scoreboard = Scoreboard::new();
        assert_eq!(scoreboard.status(), GameStatus::InProgress);
        assert!(scoreboard.frames().is_empty());
        assert_eq!(scoreboard.total_score(), None);
        assert!(!scoreboard.is_perfect_game());
    }

    #[test]
    fn test_active_frame_creates_first_frame() {
        let mut scoreboard = Scoreboard::new();
        assert_eq!(scoreboard.active_frame_mut().index(), 1);
        assert_eq!(scoreboard.frames().len(), 1);
    }

    #[test]
    fn test_active_frame_is_idempotent_for_incomplete_frame() {
        let mut scoreboard = Scoreboard::new();
        scoreboard.active_frame_mut().apply_roll(4);
        assert_eq!(scoreboard.active_frame_mut().index(), 1);
        assert_eq!(scoreboard.active_frame_mut().index(), 1);
        assert_eq!(scoreboard.frames().len(), 1);
    }

    #[test]
    fn test_active_frame_appends_after_complete_frame() {
        let mut scoreboard = Scoreboard::new();
        scoreboard.active_frame_mut().apply_roll(10);
        assert_eq!(scoreboard.active_frame_mut().index(), 2);
        assert_eq!(scoreboard.frames().len(), 2);
    }

    #[test]
    fn test_active_frame_after_game_over_returns_last() {
        let mut scoreboard = Scoreboard::new();
        scoreboard.active_frame_mut().apply_roll(10);
        scoreboard.mark_game_over();
        assert_eq!(scoreboard.active_frame_mut().index(), 1);
        assert_eq!(scoreboard.frames().len(), 1);
    }

    #[test]
    fn test_open_frame() {
        let mut scoreboard = Scoreboard::new();
        assert!(scoreboard.open_frame().is_none());

        scoreboard.active_frame_mut().apply_roll(2);
        assert_eq!(scoreboard.open_frame().map(Frame::index), Some(1));

        scoreboard.active_frame_mut().apply_roll(2);
        assert!(scoreboard.open_frame().is_none());
    }

    #[test]
    fn test_status_serializes_in_screaming_case() {
        let json = serde_json::to_string(&GameStatus::GameOver).unwrap();
        assert_eq!(json, "\"GAME_OVER\"");
        let json = serde_json::to_string(&GameStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
    }
}
