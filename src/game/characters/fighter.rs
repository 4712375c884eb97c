// Fighter entity: physical and combat state of one player, advanced once per tick

use glam::Vec3;
use log::debug;

use crate::core::math::clamp;
use crate::core::Aabb;
use crate::engine::input::Intent;
use crate::engine::physics::{PlatformId, StageCollision};

use super::stats::FighterStats;

/// Which side of the match a fighter belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    /// Player number as shown to humans (1 or 2)
    pub fn number(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    /// Zero-based slot for array indexing
    pub fn index(&self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    /// The opponent
    pub fn other(&self) -> Player {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

/// What happened to a fighter when damage was applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageOutcome {
    /// Health actually lost
    pub health_lost: f32,
    /// The guard absorbed the hit
    pub blocked: bool,
    /// The hit broke the fighter's guard
    pub guard_broken: bool,
}

/// Notable transitions during one `update`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub attack_started: bool,
    pub guard_broken: bool,
}

/// Read-only view of a fighter for presentation and HUD code
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FighterSnapshot {
    pub player: Player,
    pub position: Vec3,
    pub velocity: Vec3,
    pub facing_right: bool,
    pub health: f32,
    pub stamina: f32,
    pub is_grounded: bool,
    pub is_attacking: bool,
    pub is_blocking: bool,
    pub block_stun: f32,
    /// 0..1 through the active attack, 0 when not attacking
    pub attack_progress: f32,
}

/// One player's fighter
///
/// Invariants kept after every public call:
/// - health and stamina stay within [0, max]
/// - an attack hitbox exists exactly while attacking
/// - blocking implies grounded, not attacking and stamina > 0
#[derive(Debug, Clone)]
pub struct Fighter {
    player: Player,
    stats: FighterStats,

    // Vitals
    health: f32,
    stamina: f32,

    // Kinematics
    position: Vec3,
    velocity: Vec3,
    facing_right: bool,
    is_grounded: bool,
    /// Platform the fighter is standing on, if any
    current_platform: Option<PlatformId>,

    // Combat
    is_attacking: bool,
    is_blocking: bool,
    has_hit_this_attack: bool,
    /// Seconds since the current attack started
    attack_timer: f32,
    attack_cooldown: f32,
    block_stun: f32,

    // Geometry
    hitbox: Aabb,
    attack_hitbox: Option<Aabb>,
}

impl Fighter {
    /// Create a fighter at its spawn point
    pub fn new(player: Player, stats: FighterStats) -> Self {
        let position = stats.spawn_position(player.number());
        let mut fighter = Self {
            player,
            health: stats.max_health,
            stamina: stats.max_stamina,
            position,
            velocity: Vec3::ZERO,
            facing_right: player == Player::One,
            is_grounded: true,
            current_platform: None,
            is_attacking: false,
            is_blocking: false,
            has_hit_this_attack: false,
            attack_timer: 0.0,
            attack_cooldown: 0.0,
            block_stun: 0.0,
            hitbox: Aabb::EMPTY,
            attack_hitbox: None,
            stats,
        };
        fighter.refresh_hitboxes();
        fighter
    }

    /// Reinitialize every field to spawn defaults in place
    pub fn reset(&mut self) {
        let player = self.player;
        let stats = std::mem::take(&mut self.stats);
        *self = Self::new(player, stats);
    }

    /// Advance the fighter one tick
    ///
    /// Without a stage the fighter falls onto flat ground at `ground_y`.
    pub fn update(
        &mut self,
        intent: &Intent,
        dt: f32,
        stage: Option<&dyn StageCollision>,
    ) -> TickOutcome {
        let mut outcome = TickOutcome {
            guard_broken: self.resolve_blocking(intent, dt),
            ..TickOutcome::default()
        };
        self.handle_movement(intent, stage);
        outcome.attack_started = self.handle_attack(intent, dt);
        self.apply_physics(stage);
        self.refresh_hitboxes();
        self.regenerate_stamina(dt);
        outcome
    }

    /// Step 1: decide whether the fighter is blocking this tick
    /// Returns true if the guard broke from stamina drain
    fn resolve_blocking(&mut self, intent: &Intent, dt: f32) -> bool {
        if self.block_stun > 0.0 {
            self.block_stun = (self.block_stun - dt).max(0.0);
            self.is_blocking = false;
            return false;
        }

        self.is_blocking =
            intent.block && !self.is_attacking && self.is_grounded && self.stamina > 0.0;

        if self.is_blocking {
            self.stamina = (self.stamina - self.stats.stamina_drain_rate * dt).max(0.0);
            if self.stamina <= 0.0 {
                self.break_guard();
                return true;
            }
        }
        false
    }

    /// Step 2: horizontal movement, facing, jumping and dropping through ledges
    fn handle_movement(&mut self, intent: &Intent, stage: Option<&dyn StageCollision>) {
        if self.is_blocking {
            self.velocity.x *= self.stats.velocity_decay;
            return;
        }

        let direction = intent.horizontal();
        if direction != 0.0 {
            self.velocity.x = direction * self.stats.move_speed;
            if !self.is_attacking {
                self.facing_right = direction > 0.0;
            }
        } else {
            self.velocity.x *= self.stats.velocity_decay;
        }

        if intent.jump && self.is_grounded {
            self.velocity.y = self.stats.jump_force;
            self.is_grounded = false;
            self.current_platform = None;
        } else if intent.down && self.is_grounded && self.on_jump_through(stage) {
            debug!("Player {} dropping through platform", self.player.number());
            self.position.y -= self.stats.drop_through_nudge;
            self.current_platform = None;
            self.is_grounded = false;
        }
    }

    fn on_jump_through(&self, stage: Option<&dyn StageCollision>) -> bool {
        match (stage, self.current_platform) {
            (Some(stage), Some(id)) => stage
                .platform(id)
                .is_some_and(|platform| platform.kind.is_jump_through()),
            _ => false,
        }
    }

    /// Step 3: attack timers and attack initiation
    /// Returns true if an attack started this tick
    fn handle_attack(&mut self, intent: &Intent, dt: f32) -> bool {
        if self.attack_cooldown > 0.0 {
            self.attack_cooldown = (self.attack_cooldown - dt).max(0.0);
        }

        if self.is_attacking {
            self.attack_timer += dt;
            if self.attack_timer >= self.stats.attack_duration {
                self.is_attacking = false;
                self.has_hit_this_attack = false;
            }
        }

        let can_attack = self.attack_cooldown <= 0.0
            && !self.is_attacking
            && !self.is_blocking
            && self.stamina >= self.stats.attack_stamina_cost
            && self.block_stun <= 0.0;

        if intent.punch && can_attack {
            self.is_attacking = true;
            self.attack_timer = 0.0;
            self.attack_cooldown = self.stats.attack_cooldown;
            self.has_hit_this_attack = false;
            self.stamina -= self.stats.attack_stamina_cost;
            debug!(
                "Player {} attacks (stamina {:.1})",
                self.player.number(),
                self.stamina
            );
            return true;
        }
        false
    }

    /// Step 4: gravity, stage collision and stage bounds
    fn apply_physics(&mut self, stage: Option<&dyn StageCollision>) {
        self.velocity.y += self.stats.gravity;

        match stage {
            Some(stage) => {
                let standing_on = self.current_platform.filter(|_| self.is_grounded);
                let result = stage.resolve(
                    self.position,
                    self.velocity,
                    self.stats.body_size,
                    standing_on,
                );
                self.position = result.new_position;

                if result.is_grounded {
                    if !self.is_grounded {
                        debug!(
                            "Player {} landed on platform {:?}",
                            self.player.number(),
                            result.platform
                        );
                    }
                    self.velocity.y = 0.0;
                    self.is_grounded = true;
                    self.current_platform = result.platform;
                } else {
                    self.is_grounded = false;
                    self.current_platform = None;
                }
            }
            None => {
                self.position += self.velocity;
                if self.position.y <= self.stats.ground_y {
                    self.position.y = self.stats.ground_y;
                    self.velocity.y = 0.0;
                    self.is_grounded = true;
                } else {
                    self.is_grounded = false;
                }
                self.current_platform = None;
            }
        }

        let bound = self.stats.stage_bound_x;
        self.position.x = clamp(self.position.x, -bound, bound);

        // Blocking needs footing
        if !self.is_grounded {
            self.is_blocking = false;
        }
    }

    /// Step 5: recompute body and attack boxes from the current pose
    fn refresh_hitboxes(&mut self) {
        self.hitbox = Aabb::from_center_size(self.position, self.stats.body_size);

        self.attack_hitbox = self.is_attacking.then(|| {
            let offset = if self.facing_right {
                self.stats.attack_range
            } else {
                -self.stats.attack_range
            };
            let center = self.position + Vec3::new(offset, 0.0, 0.0);
            Aabb::from_center_size(center, self.stats.attack_size)
        });
    }

    /// Step 6: regain stamina while neither blocking, attacking nor stunned
    fn regenerate_stamina(&mut self, dt: f32) {
        if !self.is_blocking && !self.is_attacking && self.block_stun <= 0.0 {
            self.stamina =
                (self.stamina + self.stats.stamina_regen_rate * dt).min(self.stats.max_stamina);
        }
    }

    fn break_guard(&mut self) {
        debug!("Player {} guard broken", self.player.number());
        self.is_blocking = false;
        self.block_stun = self.stats.guard_break_stun;
    }

    /// Apply an incoming hit
    ///
    /// A guard with enough stamina absorbs the hit for a stamina cost. A
    /// guard without enough stamina breaks and the hit lands in full.
    pub fn take_damage(&mut self, amount: f32) -> DamageOutcome {
        let amount = amount.max(0.0);
        let away = if self.facing_right { -1.0 } else { 1.0 };

        if self.is_blocking && self.stamina >= self.stats.block_stamina_cost {
            self.stamina = (self.stamina - self.stats.block_stamina_cost).max(0.0);
            self.velocity.x = away * self.stats.block_pushback;

            let guard_broken = self.stamina <= 0.0;
            if guard_broken {
                self.break_guard();
            }
            return DamageOutcome {
                health_lost: 0.0,
                blocked: true,
                guard_broken,
            };
        }

        let guard_broken = self.is_blocking;
        if guard_broken {
            self.break_guard();
        }

        let before = self.health;
        self.health = clamp(self.health - amount, 0.0, self.stats.max_health);
        self.velocity.x = away * self.stats.knockback;
        self.velocity.y = self.stats.knockback_lift;

        DamageOutcome {
            health_lost: before - self.health,
            blocked: false,
            guard_broken,
        }
    }

    /// Mark the current swing as having connected
    pub fn register_hit(&mut self) {
        self.has_hit_this_attack = true;
    }

    pub fn snapshot(&self) -> FighterSnapshot {
        FighterSnapshot {
            player: self.player,
            position: self.position,
            velocity: self.velocity,
            facing_right: self.facing_right,
            health: self.health,
            stamina: self.stamina,
            is_grounded: self.is_grounded,
            is_attacking: self.is_attacking,
            is_blocking: self.is_blocking,
            block_stun: self.block_stun,
            attack_progress: if self.is_attacking {
                (self.attack_timer / self.stats.attack_duration).min(1.0)
            } else {
                0.0
            },
        }
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn stamina(&self) -> f32 {
        self.stamina
    }

    /// Health as a percentage of max (0-100)
    pub fn health_percent(&self) -> f32 {
        self.health / self.stats.max_health * 100.0
    }

    /// Stamina as a percentage of max (0-100)
    pub fn stamina_percent(&self) -> f32 {
        self.stamina / self.stats.max_stamina * 100.0
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn facing_right(&self) -> bool {
        self.facing_right
    }

    pub fn has_hit_this_attack(&self) -> bool {
        self.has_hit_this_attack
    }

    pub fn hitbox(&self) -> &Aabb {
        &self.hitbox
    }

    /// Active attack box; `None` unless attacking
    pub fn attack_hitbox(&self) -> Option<&Aabb> {
        self.attack_hitbox.as_ref()
    }
}

#[cfg(test)]
impl Fighter {
    pub fn player(&self) -> Player {
        self.player
    }

    pub fn stats(&self) -> &FighterStats {
        &self.stats
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn is_grounded(&self) -> bool {
        self.is_grounded
    }

    pub fn current_platform(&self) -> Option<PlatformId> {
        self.current_platform
    }

    pub fn is_attacking(&self) -> bool {
        self.is_attacking
    }

    pub fn is_blocking(&self) -> bool {
        self.is_blocking
    }

    pub fn attack_cooldown(&self) -> f32 {
        self.attack_cooldown
    }

    pub fn block_stun(&self) -> f32 {
        self.block_stun
    }

    /// Teleport (velocity is zeroed and hitboxes follow)
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::ZERO;
        self.refresh_hitboxes();
    }

    /// Turn the fighter around (refused mid-attack)
    pub fn set_facing_right(&mut self, facing_right: bool) {
        if !self.is_attacking {
            self.facing_right = facing_right;
            self.refresh_hitboxes();
        }
    }

    /// Override stamina, clamped to [0, max]
    pub fn set_stamina(&mut self, stamina: f32) {
        self.stamina = clamp(stamina, 0.0, self.stats.max_stamina);
        if self.stamina <= 0.0 {
            self.is_blocking = false;
        }
    }
}
