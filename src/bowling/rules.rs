//! Bowling rules module
//!
//! This module contains the constants of ten-pin bowling and the roll
//! legality check. Everything here depends only on in-memory domain types
//! and std.

use crate::bowling::state::Scoreboard;
use crate::error::RollError;

/// Pins standing on a fresh rack
pub const PINS_PER_RACK: u8 = 10;

/// Index of the first frame in a game
pub const FIRST_FRAME: u8 = 1;

/// Index of the final frame; the only frame that may carry a bonus roll
pub const FINAL_FRAME: u8 = 10;

/// Score of a perfect game (twelve consecutive strikes)
pub const PERFECT_SCORE: u16 = 300;

/// Maximum number of pins the next roll may knock down
///
/// Returns 0 once the game is over. Otherwise the next roll goes to the
/// active frame:
/// - a frame without a first roll gets a fresh rack (10)
/// - the final frame after a strike or spare gets a fresh rack (10)
/// - any other frame gets the pins left standing after its first roll
///
/// The scoreboard is not modified; a frame that would be appended by the
/// next roll is treated as an empty frame.
pub fn max_legal_pins(scoreboard: &Scoreboard) -> u8 {
    if scoreboard.is_game_over() {
        return 0;
    }

    match scoreboard.open_frame() {
        Some(frame) => frame.pins_standing(),
        None => PINS_PER_RACK,
    }
}

/// Check a caller-supplied pin count against the scoreboard
///
/// # Returns
/// * The pin count narrowed to `u8` when the roll is legal
pub fn validate_roll(scoreboard: &Scoreboard, number_of_pins: i32) -> Result<u8, RollError> {
    if scoreboard.is_game_over() {
        return Err(RollError::GameAlreadyOver);
    }

    let max = max_legal_pins(scoreboard);
    match u8::try_from(number_of_pins) {
        Ok(pins) if pins <= max => Ok(pins),
        _ => Err(RollError::InvalidPinCount {
            pins: number_of_pins,
            max,
        }),
    }
}

/// Check if a frame index is inside a game (1-10)
pub fn is_valid_frame_index(index: u8) -> bool {
    (FIRST_FRAME..=FINAL_FRAME).contains(&index)
}
