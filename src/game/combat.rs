// Match controller: runs both fighters, resolves hits and decides the winner

use glam::Vec3;
use log::{debug, info};

use crate::engine::input::Intent;
use crate::engine::physics::PlatformWorld;

use super::characters::{Fighter, FighterStats, Player, PUNCH_DAMAGE};

/// Seconds after game over before the restart prompt shows
pub const RESTART_PROMPT_DELAY: f32 = 1.0;

/// Something the presentation layer may want to react to
#[derive(Debug, Clone, PartialEq)]
pub enum MatchEvent {
    /// A punch started; `origin` is where the fist effect spawns
    AttackStarted {
        player: Player,
        origin: Vec3,
        facing_right: bool,
    },
    /// A punch connected with the other fighter
    Hit {
        attacker: Player,
        defender: Player,
        position: Vec3,
        blocked: bool,
    },
    GuardBreak {
        player: Player,
    },
    GameOver {
        winner: Player,
    },
    Restarted,
}

/// Everything the HUD draws
#[derive(Debug, Clone, PartialEq)]
pub struct HudState {
    /// Health per player, 0-100
    pub health_percent: [f32; 2],
    /// Stamina per player, 0-100
    pub stamina_percent: [f32; 2],
    /// Game-over banner, `None` while the match runs
    pub message: Option<String>,
}

/// One best-of-one bout between two fighters on a stage
#[derive(Debug)]
pub struct Match {
    fighters: [Fighter; 2],
    stage: PlatformWorld,
    game_over: bool,
    winner: Option<Player>,
    /// Seconds spent on the game-over screen
    game_over_time: f32,
    events: Vec<MatchEvent>,
    tick_count: u64,
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

impl Match {
    /// New match on the street stage
    pub fn new() -> Self {
        Self::with_stage(PlatformWorld::street_stage())
    }

    pub fn with_stage(stage: PlatformWorld) -> Self {
        let stats = FighterStats::standard();
        Self {
            fighters: [
                Fighter::new(Player::One, stats.clone()),
                Fighter::new(Player::Two, stats),
            ],
            stage,
            game_over: false,
            winner: None,
            game_over_time: 0.0,
            events: Vec::new(),
            tick_count: 0,
        }
    }

    /// Advance the match by one tick
    ///
    /// Fighter 1 updates before fighter 2, then hits resolve in that same
    /// order. A finished match only advances its game-over clock.
    pub fn tick(&mut self, dt: f32, intents: [Intent; 2]) {
        if self.game_over {
            self.game_over_time += dt;
            return;
        }
        self.tick_count += 1;

        for player in Player::BOTH {
            let fighter = &mut self.fighters[player.index()];
            let outcome = fighter.update(&intents[player.index()], dt, Some(&self.stage));

            if outcome.guard_broken {
                self.events.push(MatchEvent::GuardBreak { player });
            }
            if outcome.attack_started {
                let facing_right = fighter.facing_right();
                let reach = if facing_right { 1.0 } else { -1.0 };
                self.events.push(MatchEvent::AttackStarted {
                    player,
                    origin: fighter.position() + Vec3::new(reach, 0.5, 0.0),
                    facing_right,
                });
            }
        }

        self.resolve_hits();
        self.check_winner();
    }

    /// Apply damage for every connecting swing, at most once per swing
    fn resolve_hits(&mut self) {
        for attacker_id in Player::BOTH {
            let defender_id = attacker_id.other();
            let (attacker, defender) = self.pair_mut(attacker_id);

            let Some(attack_box) = attacker.attack_hitbox().copied() else {
                continue;
            };
            if attacker.has_hit_this_attack() || !attack_box.intersects(defender.hitbox()) {
                continue;
            }

            let outcome = defender.take_damage(PUNCH_DAMAGE);
            attacker.register_hit();
            let position = defender.position() + Vec3::Y;

            if outcome.blocked {
                info!(
                    "Player {} blocked a punch from player {} (stamina {:.0})",
                    defender_id.number(),
                    attacker_id.number(),
                    defender.stamina()
                );
            } else {
                info!(
                    "Player {} hit player {} (health {:.0})",
                    attacker_id.number(),
                    defender_id.number(),
                    defender.health()
                );
            }

            self.events.push(MatchEvent::Hit {
                attacker: attacker_id,
                defender: defender_id,
                position,
                blocked: outcome.blocked,
            });
            if outcome.guard_broken {
                self.events.push(MatchEvent::GuardBreak {
                    player: defender_id,
                });
            }
        }
    }

    fn check_winner(&mut self) {
        // Player 1 is checked first, so a double KO goes to player 2
        let winner = if self.fighters[0].health() <= 0.0 {
            Player::Two
        } else if self.fighters[1].health() <= 0.0 {
            Player::One
        } else {
            return;
        };

        self.game_over = true;
        self.winner = Some(winner);
        self.game_over_time = 0.0;
        info!("Game over: player {} wins", winner.number());
        self.events.push(MatchEvent::GameOver { winner });
    }

    /// Mutable attacker and defender at once
    fn pair_mut(&mut self, attacker: Player) -> (&mut Fighter, &mut Fighter) {
        let [first, second] = &mut self.fighters;
        match attacker {
            Player::One => (first, second),
            Player::Two => (second, first),
        }
    }

    /// Restart trigger for the UI, honoured only once the match is over
    pub fn request_restart(&mut self) -> bool {
        if !self.game_over {
            debug!("Restart ignored while the match is running");
            return false;
        }
        self.restart();
        true
    }

    /// Put both fighters back on their spawn points and clear the result
    pub fn restart(&mut self) {
        for fighter in &mut self.fighters {
            fighter.reset();
        }
        self.game_over = false;
        self.winner = None;
        self.game_over_time = 0.0;
        self.tick_count = 0;
        self.events.clear();
        self.events.push(MatchEvent::Restarted);
        info!("Match restarted");
    }

    /// Take every event produced since the last drain
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn hud(&self) -> HudState {
        let message = self.winner.map(|winner| {
            let mut message = format!("Player {} Wins!", winner.number());
            if self.game_over_time >= RESTART_PROMPT_DELAY {
                message.push_str("\nPress R to restart");
            }
            message
        });

        HudState {
            health_percent: [
                self.fighters[0].health_percent(),
                self.fighters[1].health_percent(),
            ],
            stamina_percent: [
                self.fighters[0].stamina_percent(),
                self.fighters[1].stamina_percent(),
            ],
            message,
        }
    }

    pub fn fighter(&self, player: Player) -> &Fighter {
        &self.fighters[player.index()]
    }

    /// Simulation ticks run since the match (re)started
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

#[cfg(test)]
impl Match {
    pub fn fighter_mut(&mut self, player: Player) -> &mut Fighter {
        &mut self.fighters[player.index()]
    }

    pub fn fighters(&self) -> &[Fighter; 2] {
        &self.fighters
    }

    pub fn stage(&self) -> &PlatformWorld {
        &self.stage
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;
    const IDLE: [Intent; 2] = [Intent::idle(), Intent::idle()];

    /// Fighters facing each other at punching distance
    fn close_quarters() -> Match {
        let mut brawl = Match::new();
        face_off(&mut brawl);
        brawl
    }

    /// Place both fighters at punching distance (also cancels knockback)
    fn face_off(brawl: &mut Match) {
        brawl.fighter_mut(Player::One).set_position(Vec3::new(0.0, 1.0, 0.0));
        brawl.fighter_mut(Player::Two).set_position(Vec3::new(1.5, 1.0, 0.0));
        brawl.drain_events();
    }

    fn count_hits(events: &[MatchEvent]) -> usize {
        events
            .iter()
            .filter(|event| matches!(event, MatchEvent::Hit { .. }))
            .count()
    }

    #[test]
    fn test_single_punch_damages_once() {
        let mut brawl = close_quarters();
        brawl.tick(DT, [Intent::punch(), Intent::idle()]);
        assert_eq!(brawl.fighter(Player::Two).health(), 90.0);

        let events = brawl.drain_events();
        assert!(matches!(
            events[0],
            MatchEvent::AttackStarted {
                player: Player::One,
                facing_right: true,
                ..
            }
        ));
        assert_eq!(count_hits(&events), 1);

        // Overlap persists for the whole swing and the cooldown after it
        for _ in 0..48 {
            brawl.tick(DT, IDLE);
            assert_eq!(brawl.fighter(Player::Two).health(), 90.0);
        }
        assert_eq!(count_hits(&brawl.drain_events()), 0);
        assert!(!brawl.is_game_over());
    }

    #[test]
    fn test_held_punch_without_overlap_never_hits() {
        let mut brawl = Match::new();
        for _ in 0..120 {
            brawl.tick(DT, [Intent::punch(), Intent::punch()]);
        }
        assert_eq!(brawl.fighter(Player::One).health(), 100.0);
        assert_eq!(brawl.fighter(Player::Two).health(), 100.0);
    }

    #[test]
    fn test_blocked_punch() {
        let mut brawl = close_quarters();
        brawl.tick(DT, [Intent::punch(), Intent::block()]);

        let defender = brawl.fighter(Player::Two);
        assert_eq!(defender.health(), 100.0);
        assert!(defender.stamina() < 90.0);

        let events = brawl.drain_events();
        assert!(events.iter().any(|event| matches!(
            event,
            MatchEvent::Hit {
                defender: Player::Two,
                blocked: true,
                ..
            }
        )));
    }

    #[test]
    fn test_guard_break_from_punch() {
        let mut brawl = close_quarters();
        brawl.fighter_mut(Player::Two).set_stamina(5.0);
        brawl.tick(DT, [Intent::punch(), Intent::block()]);

        let defender = brawl.fighter(Player::Two);
        assert_eq!(defender.health(), 90.0);
        assert!(!defender.is_blocking());
        assert_eq!(defender.block_stun(), 1.0);

        let events = brawl.drain_events();
        assert!(events.contains(&MatchEvent::GuardBreak {
            player: Player::Two
        }));
    }

    #[test]
    fn test_knockout_ends_match() {
        let mut brawl = Match::new();
        brawl.fighter_mut(Player::Two).take_damage(95.0);
        face_off(&mut brawl);
        brawl.tick(DT, [Intent::punch(), Intent::idle()]);

        assert!(brawl.is_game_over());
        assert_eq!(brawl.winner(), Some(Player::One));
        assert_eq!(brawl.fighter(Player::Two).health(), 0.0);
        assert!(brawl
            .drain_events()
            .contains(&MatchEvent::GameOver { winner: Player::One }));

        let hud = brawl.hud();
        assert_eq!(hud.health_percent, [100.0, 0.0]);
        assert_eq!(hud.message.as_deref(), Some("Player 1 Wins!"));

        // Simulation is frozen, the prompt appears after a second
        let position = brawl.fighter(Player::One).position();
        brawl.tick(RESTART_PROMPT_DELAY, [Intent::right(), Intent::idle()]);
        assert_eq!(brawl.fighter(Player::One).position(), position);
        assert!(brawl.drain_events().is_empty());
        assert_eq!(
            brawl.hud().message.as_deref(),
            Some("Player 1 Wins!\nPress R to restart")
        );
    }

    #[test]
    fn test_double_knockout_goes_to_player_two() {
        let mut brawl = Match::new();
        brawl.fighter_mut(Player::One).take_damage(95.0);
        brawl.fighter_mut(Player::Two).take_damage(95.0);
        face_off(&mut brawl);
        brawl.tick(DT, [Intent::punch(), Intent::punch()]);

        assert!(brawl.is_game_over());
        assert_eq!(brawl.winner(), Some(Player::Two));
    }

    #[test]
    fn test_request_restart_only_after_game_over() {
        let mut brawl = close_quarters();
        brawl.tick(DT, [Intent::punch(), Intent::idle()]);

        assert!(!brawl.request_restart());
        assert_eq!(brawl.fighter(Player::Two).health(), 90.0);

        brawl.fighter_mut(Player::Two).take_damage(90.0);
        brawl.tick(DT, IDLE);
        assert!(brawl.is_game_over());
        assert!(brawl.request_restart());
        assert!(!brawl.is_game_over());
    }

    #[test]
    fn test_restart_matches_fresh_match() {
        let mut brawl = Match::new();
        brawl.fighter_mut(Player::Two).take_damage(95.0);
        face_off(&mut brawl);
        brawl.tick(DT, [Intent::punch(), Intent::idle()]);
        assert!(brawl.is_game_over());

        brawl.restart();

        let fresh = Match::new();
        for player in Player::BOTH {
            assert_eq!(
                brawl.fighter(player).snapshot(),
                fresh.fighter(player).snapshot()
            );
            assert_eq!(brawl.fighter(player).attack_cooldown(), 0.0);
        }
        assert!(!brawl.is_game_over());
        assert_eq!(brawl.winner(), None);
        assert_eq!(brawl.hud(), fresh.hud());
        assert_eq!(brawl.drain_events(), vec![MatchEvent::Restarted]);
    }

    #[test]
    fn test_restart_mid_match() {
        let mut brawl = close_quarters();
        brawl.tick(DT, [Intent::punch(), Intent::right()]);
        brawl.restart();

        // Cooldown is gone, so a punch is available on the very next tick
        brawl.tick(DT, [Intent::punch(), Intent::idle()]);
        let events = brawl.drain_events();
        assert!(events.iter().any(|event| matches!(
            event,
            MatchEvent::AttackStarted {
                player: Player::One,
                ..
            }
        )));
        assert_eq!(brawl.tick_count(), 1);
    }

    #[test]
    fn test_hud_percentages() {
        let mut brawl = Match::new();
        brawl.fighter_mut(Player::One).take_damage(25.0);
        brawl.fighter_mut(Player::Two).set_stamina(40.0);

        let hud = brawl.hud();
        assert_eq!(hud.health_percent, [75.0, 100.0]);
        assert_eq!(hud.stamina_percent, [100.0, 40.0]);
        assert_eq!(hud.message, None);
    }

    #[test]
    fn test_fighters_spawn_on_stage() {
        let mut brawl = Match::new();
        for _ in 0..30 {
            brawl.tick(DT, IDLE);
        }
        for fighter in brawl.fighters() {
            assert!(fighter.is_grounded());
            assert_eq!(fighter.current_platform(), Some(0));
        }
    }
}
