// Presentation pose selected from a fighter snapshot

use super::fighter::FighterSnapshot;

/// Horizontal speed below which a grounded fighter counts as standing still
const WALK_THRESHOLD: f32 = 0.01;

/// The single pose a fighter is drawn in this tick
///
/// Fighter state flags are independent; the pose folds them together with
/// priority attack > block > jump > walk > idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pose {
    #[default]
    Idle,
    Walk,
    Jump,
    Block,
    Attack,
}

impl Pose {
    /// Pick the pose for a snapshot
    pub fn from_snapshot(snapshot: &FighterSnapshot) -> Self {
        if snapshot.is_attacking {
            Self::Attack
        } else if snapshot.is_blocking {
            Self::Block
        } else if !snapshot.is_grounded {
            Self::Jump
        } else if snapshot.velocity.x.abs() > WALK_THRESHOLD {
            Self::Walk
        } else {
            Self::Idle
        }
    }

    /// Get the animation name for this pose
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walk => "walk",
            Self::Jump => "jump",
            Self::Block => "block",
            Self::Attack => "attack",
        }
    }

    /// Poses whose progress comes from simulation state rather than a clock
    pub fn is_driven_by_simulation(&self) -> bool {
        matches!(self, Self::Attack)
    }
}
