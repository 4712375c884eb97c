// Stage physics: platforms and the collision oracle fighters consult each tick

pub mod collision;
pub mod platform;
pub mod world;

pub use collision::{PlatformId, StageCollision};
pub use world::PlatformWorld;
