// Character system
//
// This module contains everything related to the two fighters:
// - Fighter simulation state and its per-tick update
// - Shared fighter stats
// - Pose selection and animation playback for presentation
// - Rigs that turn poses into limb angles

pub mod animation;
pub mod fighter;
pub mod pose;
pub mod rig;
pub mod stats;

// Re-export commonly used types
pub use fighter::{Fighter, Player};
pub use rig::{FighterView, RigStyle};
pub use stats::{FighterStats, PUNCH_DAMAGE};
