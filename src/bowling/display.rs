//! Scoreboard marks for display
//!
//! Strike is `X`, spare is `/`, a miss is `-`; anything else shows the pin
//! count. Rolls not yet made show as an empty string.

use crate::bowling::frame::Frame;
use crate::bowling::rules::PINS_PER_RACK;
use crate::bowling::state::Scoreboard;

pub const STRIKE_MARK: &str = "X";
pub const SPARE_MARK: &str = "/";
pub const MISS_MARK: &str = "-";

fn pins_mark(pins: Option<u8>) -> String {
    match pins {
        None => String::new(),
        Some(0) => MISS_MARK.to_string(),
        Some(pins) => pins.to_string(),
    }
}

pub fn first_roll_mark(frame: &Frame) -> String {
    if frame.is_strike() {
        return STRIKE_MARK.to_string();
    }
    pins_mark(frame.first_roll())
}

pub fn second_roll_mark(frame: &Frame) -> String {
    if frame.is_spare() {
        return SPARE_MARK.to_string();
    }
    // Only the final frame can see a second roll on a fresh rack
    if frame.is_final() && frame.second_roll() == Some(PINS_PER_RACK) {
        return STRIKE_MARK.to_string();
    }
    pins_mark(frame.second_roll())
}

pub fn bonus_roll_mark(frame: &Frame) -> String {
    if !frame.is_final() || !frame.has_bonus() {
        return String::new();
    }
    match frame.bonus_roll() {
        Some(PINS_PER_RACK) => STRIKE_MARK.to_string(),
        pins => pins_mark(pins),
    }
}

/// Closing message for a finished game
pub fn status_message(scoreboard: &Scoreboard) -> Option<String> {
    if !scoreboard.is_game_over() {
        return None;
    }
    if scoreboard.is_perfect_game() {
        return Some("Bravo! that was a 'Perfect Game'".to_string());
    }
    Some(format!(
        "Game over, you scored {} points",
        scoreboard.total_score().unwrap_or(0)
    ))
}
