//! Roll submission cycle
//!
//! One call validates a roll, records it into the active frame, rescoring
//! the whole frame sequence and detecting the end of the game. Either the
//! full cycle commits or the scoreboard is left untouched.
//!
//! The cycle reads and rewrites every frame, so callers must serialize
//! submissions for the same game.

use crate::bowling::rules::validate_roll;
use crate::bowling::scoring::{resolve_bonuses, resolve_cumulative};
use crate::bowling::state::Scoreboard;
use crate::error::RollError;

/// Apply one roll to the scoreboard
pub fn submit_roll(scoreboard: &mut Scoreboard, number_of_pins: i32) -> Result<(), RollError> {
    let pins = validate_roll(scoreboard, number_of_pins)?;

    scoreboard.active_frame_mut().apply_roll(pins);
    rescore(scoreboard);

    if scoreboard.final_frame_complete() {
        scoreboard.mark_game_over();
    }

    Ok(())
}

/// Recompute every derived field from the recorded rolls
fn rescore(scoreboard: &mut Scoreboard) {
    let frames = scoreboard.frames_mut();
    resolve_bonuses(frames);
    let total_score = resolve_cumulative(frames);
    scoreboard.set_total_score(total_score);
}

/// Build a scoreboard by submitting each roll in turn
pub fn replay(rolls: &[i32]) -> Result<Scoreboard, RollError> {
    let mut scoreboard = Scoreboard::new();
    for pins in rolls {
        submit_roll(&mut scoreboard, *pins)?;
    }
    Ok(scoreboard)
}
