pub mod game_snapshot;
pub mod roll_request;
