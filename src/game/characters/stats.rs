// Fighter stats - BOTH PLAYERS HAVE THE SAME STATS
// Movement values are per tick; timers and stamina rates are per second

use glam::Vec3;

/// Fixed fighter tuning shared by both players
#[derive(Debug, Clone, PartialEq)]
pub struct FighterStats {
    // Movement
    /// Horizontal speed while a direction is held (units/tick)
    pub move_speed: f32,
    /// Vertical velocity set by a jump (units/tick)
    pub jump_force: f32,
    /// Velocity change applied every tick (units/tick²)
    pub gravity: f32,
    /// Horizontal velocity multiplier per tick with no direction held
    pub velocity_decay: f32,
    /// Downward nudge applied when dropping through a jump-through platform
    pub drop_through_nudge: f32,

    // Stage
    /// Center height of a fighter standing on flat ground
    pub ground_y: f32,
    /// Horizontal position limit (both directions)
    pub stage_bound_x: f32,

    // Combat
    pub max_health: f32,
    pub max_stamina: f32,
    /// Distance from the fighter's center to the attack box center
    pub attack_range: f32,
    /// Full extents of the attack box
    pub attack_size: Vec3,
    /// Seconds an attack box stays active
    pub attack_duration: f32,
    /// Seconds between attack starts
    pub attack_cooldown: f32,
    pub attack_stamina_cost: f32,
    pub block_stamina_cost: f32,
    /// Stamina drained per second while blocking
    pub stamina_drain_rate: f32,
    /// Stamina regained per second while idle
    pub stamina_regen_rate: f32,
    /// Seconds of block stun after a guard break
    pub guard_break_stun: f32,
    /// Horizontal velocity of an unblocked hit
    pub knockback: f32,
    /// Upward velocity of an unblocked hit
    pub knockback_lift: f32,
    /// Horizontal velocity of a blocked hit
    pub block_pushback: f32,

    // Dimensions
    /// Full extents of the body hitbox
    pub body_size: Vec3,
}

/// The ONE set of stats used by both players
pub const BASE_STATS: FighterStats = FighterStats {
    // Movement
    move_speed: 0.15,
    jump_force: 0.4,
    gravity: -0.02,
    velocity_decay: 0.8,
    drop_through_nudge: 0.2,

    // Stage
    ground_y: 1.0,
    stage_bound_x: 14.0,

    // Combat
    max_health: 100.0,
    max_stamina: 100.0,
    attack_range: 1.0,
    attack_size: Vec3::new(1.0, 1.0, 1.0),
    attack_duration: 0.2,
    attack_cooldown: 0.8,
    attack_stamina_cost: 15.0,
    block_stamina_cost: 10.0,
    stamina_drain_rate: 25.0,
    stamina_regen_rate: 15.0,
    guard_break_stun: 1.0,
    knockback: 0.3,
    knockback_lift: 0.1,
    block_pushback: 0.1,

    // Dimensions - a 1x2x1 box standing on its feet at y = 0
    body_size: Vec3::new(1.0, 2.0, 1.0),
};

/// Damage dealt by one landed punch
pub const PUNCH_DAMAGE: f32 = 10.0;

impl Default for FighterStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl FighterStats {
    /// Get the standard fighter stats (same for both players)
    pub fn standard() -> Self {
        BASE_STATS
    }

    /// Spawn position for player 1 or player 2
    pub fn spawn_position(&self, player: u8) -> Vec3 {
        let x = if player == 1 { -3.0 } else { 3.0 };
        Vec3::new(x, self.ground_y, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = FighterStats::default();
        assert_eq!(stats.move_speed, 0.15);
        assert_eq!(stats.jump_force, 0.4);
        assert_eq!(stats.gravity, -0.02);
        assert_eq!(stats.attack_range, 1.0);
        assert_eq!(stats.attack_duration, 0.2);
        assert_eq!(stats.attack_cooldown, 0.8);
        assert_eq!(stats.stamina_drain_rate, 25.0);
        assert_eq!(stats.stamina_regen_rate, 15.0);
        assert_eq!(stats.block_stamina_cost, 10.0);
        assert_eq!(stats.attack_stamina_cost, 15.0);
        assert_eq!(stats.stage_bound_x, 14.0);
        assert_eq!(stats.max_health, 100.0);
        assert_eq!(stats.max_stamina, 100.0);
    }

    #[test]
    fn test_standard_equals_default() {
        assert_eq!(FighterStats::standard(), FighterStats::default());
    }

    #[test]
    fn test_spawn_positions_face_off() {
        let stats = FighterStats::standard();
        let p1 = stats.spawn_position(1);
        let p2 = stats.spawn_position(2);

        assert!(p1.x < p2.x);
        assert_eq!(p1.y, stats.ground_y);
        assert_eq!(p2.y, stats.ground_y);
    }

    #[test]
    fn test_standing_fighter_feet_on_ground() {
        let stats = FighterStats::standard();
        assert_eq!(stats.ground_y - stats.body_size.y / 2.0, 0.0);
    }
}
