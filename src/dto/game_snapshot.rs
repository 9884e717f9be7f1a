use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bowling::display::{bonus_roll_mark, first_roll_mark, second_roll_mark, status_message};
use crate::bowling::{max_legal_pins, Frame, GameStatus, Scoreboard};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_id: Uuid,
    pub status: GameStatus,
    pub total_score: Option<u16>,
    pub is_perfect_game: bool,
    pub max_pins: u8,
    pub status_message: Option<String>,
    pub frames: Vec<FrameSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub index: u8,
    pub first_roll: Option<u8>,
    pub second_roll: Option<u8>,
    pub bonus_roll: Option<u8>,
    pub bonus: Option<u16>,
    pub cumulative_score: Option<u16>,
    pub marks: FrameMarks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameMarks {
    pub first: String,
    pub second: String,
    pub bonus: String,
}

impl GameSnapshot {
    pub fn new(game_id: Uuid, scoreboard: &Scoreboard) -> Self {
        Self {
            game_id,
            status: scoreboard.status(),
            total_score: scoreboard.total_score(),
            is_perfect_game: scoreboard.is_perfect_game(),
            max_pins: max_legal_pins(scoreboard),
            status_message: status_message(scoreboard),
            frames: scoreboard.frames().iter().map(FrameSnapshot::from).collect(),
        }
    }
}

impl From<&Frame> for FrameSnapshot {
    fn from(frame: &Frame) -> Self {
        Self {
            index: frame.index(),
            first_roll: frame.first_roll(),
            second_roll: frame.second_roll(),
            bonus_roll: frame.bonus_roll(),
            bonus: frame.bonus(),
            cumulative_score: frame.cumulative_score(),
            marks: FrameMarks {
                first: first_roll_mark(frame),
                second: second_roll_mark(frame),
                bonus: bonus_roll_mark(frame),
            },
        }
    }
}
