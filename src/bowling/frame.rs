//! Frame module
//!
//! A frame holds up to two ordinary rolls, the bonus roll of the final frame
//! and the derived bonus and cumulative score.

use serde::{Deserialize, Serialize};

use crate::bowling::rules::{is_valid_frame_index, FINAL_FRAME, PINS_PER_RACK};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    index: u8,
    first_roll: Option<u8>,
    second_roll: Option<u8>,
    bonus_roll: Option<u8>,
    /// Bonus points owed to this frame; `None` while they depend on rolls not yet made
    #[serde(default)]
    bonus: Option<u16>,
    /// Running total up to and including this frame
    cumulative_score: Option<u16>,
}

impl Frame {
    pub(crate) fn new(index: u8) -> Self {
        debug_assert!(is_valid_frame_index(index), "frame index {index} out of range");
        Self {
            index,
            first_roll: None,
            second_roll: None,
            bonus_roll: None,
            bonus: None,
            cumulative_score: None,
        }
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn first_roll(&self) -> Option<u8> {
        self.first_roll
    }

    pub fn second_roll(&self) -> Option<u8> {
        self.second_roll
    }

    pub fn bonus_roll(&self) -> Option<u8> {
        self.bonus_roll
    }

    pub fn bonus(&self) -> Option<u16> {
        self.bonus
    }

    pub fn cumulative_score(&self) -> Option<u16> {
        self.cumulative_score
    }

    /// True for the tenth frame
    pub fn is_final(&self) -> bool {
        self.index == FINAL_FRAME
    }

    /// All ten pins on the first roll
    pub fn is_strike(&self) -> bool {
        self.first_roll == Some(PINS_PER_RACK)
    }

    /// All ten pins across both rolls, but not on the first
    pub fn is_spare(&self) -> bool {
        match (self.first_roll, self.second_roll) {
            (Some(first), Some(second)) if !self.is_strike() => {
                u16::from(first) + u16::from(second) == u16::from(PINS_PER_RACK)
            }
            _ => false,
        }
    }

    /// True if the frame earns bonus points from a strike or spare
    pub fn has_bonus(&self) -> bool {
        self.is_strike() || self.is_spare()
    }

    /// Whether the frame will accept no further rolls
    ///
    /// Frames 1-9 complete on a strike or a second roll. The final frame
    /// needs its bonus roll after a strike or spare.
    pub fn rolls_complete(&self) -> bool {
        if self.is_final() {
            if self.has_bonus() {
                return self.bonus_roll.is_some();
            }
            return self.second_roll.is_some();
        }
        self.is_strike() || self.second_roll.is_some()
    }

    /// Pins available to the next roll of this frame
    pub(crate) fn pins_standing(&self) -> u8 {
        match self.first_roll {
            None => PINS_PER_RACK,
            Some(_) if self.is_final() && self.has_bonus() => PINS_PER_RACK,
            Some(first) => PINS_PER_RACK.saturating_sub(first),
        }
    }

    /// Record a roll into the first unfilled slot
    ///
    /// The roll must already be validated; a roll offered to a frame with no
    /// free slot is ignored.
    pub(crate) fn apply_roll(&mut self, pins: u8) {
        if self.first_roll.is_none() {
            self.first_roll = Some(pins);
        } else if self.second_roll.is_none() {
            self.second_roll = Some(pins);
        } else if self.is_final() && self.has_bonus() && self.bonus_roll.is_none() {
            self.bonus_roll = Some(pins);
        }
    }

    /// Points this frame adds to the running total, once its bonus is known
    pub fn contribution(&self) -> Option<u16> {
        let bonus = self.bonus?;
        let first = self.first_roll?;
        Some(u16::from(first) + bonus + u16::from(self.second_roll.unwrap_or(0)))
    }

    pub(crate) fn set_bonus(&mut self, bonus: Option<u16>) {
        self.bonus = bonus;
    }

    pub(crate) fn set_cumulative_score(&mut self, score: Option<u16>) {
        self.cumulative_score = score;
    }
}
