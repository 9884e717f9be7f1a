//! Bowling scoring engine
//!
//! This module contains the ten-pin scoring rules for a single-player game:
//! the frame state machine, roll validation, bonus resolution and the running
//! total. It is pure and synchronous and performs no I/O.

pub mod bonus_window;
pub mod display;
pub mod frame;
pub mod orchestration;
pub mod rules;
pub mod scoring;
pub mod state;

pub use frame::Frame;
pub use orchestration::{replay, submit_roll};
pub use rules::max_legal_pins;
pub use state::{GameStatus, Scoreboard};
