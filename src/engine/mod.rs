// Engine modules: frame loop, input, stage physics

pub mod game_loop;
pub mod input;
pub mod physics;
