// Game rules: fighters, the match controller and fighter presentation

pub mod characters;
pub mod combat;

pub use combat::{Match, MatchEvent};
