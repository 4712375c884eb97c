use glam::Vec3;

use super::platform::Platform;

/// Index of a platform inside the stage that owns it
pub type PlatformId = usize;

/// How far below a jump-through surface an actor's feet may start a move and
/// still count as arriving from above
pub const JUMP_THROUGH_TOLERANCE: f32 = 0.1;

/// Outcome of resolving one move against the stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Platform the actor now stands on, if any
    pub platform: Option<PlatformId>,
    /// Corrected center position after the move
    pub new_position: Vec3,
    /// Whether the actor ended the move supported by a platform
    pub is_grounded: bool,
    /// Whether a jump-through platform was skipped because the actor came from below
    pub can_pass_through: bool,
}

impl CollisionResult {
    /// Free movement: the projected position, unsupported
    pub fn airborne(new_position: Vec3) -> Self {
        Self {
            platform: None,
            new_position,
            is_grounded: false,
            can_pass_through: false,
        }
    }
}

/// Stage collision oracle consulted by actors once per tick
///
/// Positions are box centers; `size` is the actor's full extents.
pub trait StageCollision {
    /// Resolve a move of `velocity` from `position`.
    ///
    /// `standing_on` is the platform the actor rested on before moving. Only
    /// that platform may catch the actor regardless of where its feet start;
    /// every other jump-through surface is judged from the prior position.
    fn resolve(
        &self,
        position: Vec3,
        velocity: Vec3,
        size: Vec3,
        standing_on: Option<PlatformId>,
    ) -> CollisionResult;

    /// Look up a platform by id
    fn platform(&self, id: PlatformId) -> Option<&Platform>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airborne_result() {
        let result = CollisionResult::airborne(Vec3::new(1.0, 2.0, 0.0));
        assert!(!result.is_grounded);
        assert!(result.platform.is_none());
        assert!(!result.can_pass_through);
        assert_eq!(result.new_position, Vec3::new(1.0, 2.0, 0.0));
    }
}
