// Character rigs: turn a pose and its progress into limb angles
//
// The simulation never looks at which rig a fighter uses. A renderer reads
// `Joints` from whatever `PoseDriver` sits behind a `FighterView`.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, PI, TAU};

use glam::Vec3;

use super::animation::AnimationPlayer;
use super::fighter::FighterSnapshot;
use super::pose::Pose;

/// Euler angles (radians) per limb plus whole-body squash and bounce
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joints {
    pub torso: Vec3,
    pub head: Vec3,
    pub left_arm: Vec3,
    pub right_arm: Vec3,
    pub left_leg: Vec3,
    pub right_leg: Vec3,
    /// Whole-body yaw sway
    pub body_yaw: f32,
    /// Vertical offset added on top of the simulated position
    pub body_offset_y: f32,
    pub body_scale: Vec3,
}

impl Joints {
    /// Rest pose: everything straight, unit scale
    pub const REST: Joints = Joints {
        torso: Vec3::ZERO,
        head: Vec3::ZERO,
        left_arm: Vec3::ZERO,
        right_arm: Vec3::ZERO,
        left_leg: Vec3::ZERO,
        right_leg: Vec3::ZERO,
        body_yaw: 0.0,
        body_offset_y: 0.0,
        body_scale: Vec3::ONE,
    };
}

impl Default for Joints {
    fn default() -> Self {
        Self::REST
    }
}

/// Anything that can pose a character model
pub trait PoseDriver: std::fmt::Debug {
    /// Pose the rig; `progress` is 0..1 through the pose's clip
    fn apply(&mut self, pose: Pose, progress: f32);

    /// Current joint angles
    fn joints(&self) -> &Joints;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

/// Which rig a fighter is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RigStyle {
    #[default]
    Cartoon,
    Realistic,
}

impl RigStyle {
    pub fn driver(&self) -> Box<dyn PoseDriver> {
        match self {
            Self::Cartoon => Box::new(CartoonRig::new()),
            Self::Realistic => Box::new(RealisticRig::new()),
        }
    }
}

/// Chunky cartoon character with squash-and-stretch
#[derive(Debug, Default)]
pub struct CartoonRig {
    joints: Joints,
}

impl CartoonRig {
    const WALK_BOUNCE: f32 = 0.08;
    const JUMP_SQUASH: f32 = 0.15;
    const LANDING_SQUASH: f32 = 0.3;
    const BREATH: f32 = 0.02;

    pub fn new() -> Self {
        Self::default()
    }
}

impl PoseDriver for CartoonRig {
    fn apply(&mut self, pose: Pose, progress: f32) {
        let mut j = Joints::REST;
        let progress = progress.clamp(0.0, 1.0);

        match pose {
            Pose::Idle => {
                let breath = (progress * TAU).sin() * Self::BREATH;
                j.body_scale.y = 1.0 + breath;
            }
            Pose::Walk => {
                let swing = (progress * TAU).sin();
                j.body_offset_y = swing * Self::WALK_BOUNCE;
                j.left_arm.x = swing * 0.3;
                j.right_arm.x = -swing * 0.3;
                j.left_leg.x = -swing * 0.4;
                j.right_leg.x = swing * 0.4;
            }
            Pose::Jump => {
                j.body_scale = if progress < 0.3 {
                    // Squash before take-off
                    let squash = 1.0 - Self::JUMP_SQUASH * (progress / 0.3);
                    Vec3::new(1.0 + Self::JUMP_SQUASH * 0.5, squash, 1.0)
                } else if progress > 0.7 {
                    // Squash into the landing
                    let land = (progress - 0.7) / 0.3;
                    let squash = 1.0 - Self::LANDING_SQUASH * (1.0 - land);
                    Vec3::new(1.0 + Self::LANDING_SQUASH * 0.5, squash, 1.0)
                } else {
                    Vec3::new(0.9, 1.1, 1.0)
                };
                j.left_arm.z = FRAC_PI_4;
                j.right_arm.z = -FRAC_PI_4;
            }
            Pose::Attack => {
                j.right_arm.x = -FRAC_PI_2;
                j.right_arm.z = -0.3;
            }
            Pose::Block => {
                j.left_arm.x = -FRAC_PI_3;
                j.right_arm.x = -FRAC_PI_3;
                j.left_arm.z = 0.5;
                j.right_arm.z = -0.5;
            }
        }

        self.joints = j;
    }

    fn joints(&self) -> &Joints {
        &self.joints
    }

    fn name(&self) -> &'static str {
        "cartoon"
    }
}

/// Human-proportioned character with smoother limb motion
#[derive(Debug, Default)]
pub struct RealisticRig {
    joints: Joints,
}

impl RealisticRig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PoseDriver for RealisticRig {
    fn apply(&mut self, pose: Pose, progress: f32) {
        let mut j = Joints::REST;
        let progress = progress.clamp(0.0, 1.0);

        match pose {
            Pose::Idle => {}
            Pose::Walk => {
                let cycle = (progress * TAU).sin();
                j.left_leg.x = cycle * 0.4;
                j.right_leg.x = -cycle * 0.4;
                j.left_arm.x = -cycle * 0.2;
                j.right_arm.x = cycle * 0.2;
                j.body_yaw = cycle * 0.05;
                j.body_offset_y = cycle.abs() * 0.02;
            }
            Pose::Jump => {
                if progress < 0.3 {
                    let crouch = progress / 0.3;
                    j.left_leg.x = crouch * 0.5;
                    j.right_leg.x = crouch * 0.5;
                    j.body_scale.y = 1.0 - crouch * 0.1;
                } else {
                    j.left_leg.x = -0.3;
                    j.right_leg.x = -0.3;
                    j.left_arm.z = -0.5;
                    j.right_arm.z = 0.5;
                    j.body_scale.y = 1.05;
                }
            }
            Pose::Attack => {
                // Extends and retracts over the swing
                let extension = (progress * PI).sin();
                j.right_arm.x = -extension * 1.5;
                j.right_arm.y = extension * 0.3;
                j.torso.y = extension * 0.2;
            }
            Pose::Block => {
                j.left_arm = Vec3::new(-0.7, 0.3, 0.0);
                j.right_arm = Vec3::new(-0.7, -0.3, 0.0);
                j.left_leg.x = 0.1;
                j.right_leg.x = 0.1;
                j.body_scale.y = 0.95;
            }
        }

        self.joints = j;
    }

    fn joints(&self) -> &Joints {
        &self.joints
    }

    fn name(&self) -> &'static str {
        "realistic"
    }
}

/// Presentation state for one fighter, fed read-only snapshots
#[derive(Debug)]
pub struct FighterView {
    driver: Box<dyn PoseDriver>,
    animation: AnimationPlayer,
    position: Vec3,
}

impl FighterView {
    pub fn new(driver: Box<dyn PoseDriver>) -> Self {
        Self {
            driver,
            animation: AnimationPlayer::with_standard_animations(),
            position: Vec3::ZERO,
        }
    }

    pub fn with_style(style: RigStyle) -> Self {
        Self::new(style.driver())
    }

    /// Follow the fighter for one frame
    pub fn sync(&mut self, snapshot: &FighterSnapshot, dt: f32) {
        let pose = Pose::from_snapshot(snapshot);
        self.animation.play(pose);
        self.animation.set_flip_horizontal(!snapshot.facing_right);

        if pose.is_driven_by_simulation() {
            self.animation.pin_progress(snapshot.attack_progress);
        } else {
            self.animation.update(dt);
        }

        self.driver.apply(pose, self.animation.progress());
        self.position = snapshot.position;
    }

    /// Freeze or resume the clock-driven animation while the game is paused
    pub fn set_paused(&mut self, paused: bool) {
        if paused {
            self.animation.pause();
        } else {
            self.animation.resume();
        }
    }

    pub fn pose(&self) -> Pose {
        self.animation.current_pose()
    }

    #[cfg(test)]
    pub fn progress(&self) -> f32 {
        self.animation.progress()
    }

    pub fn joints(&self) -> &Joints {
        self.driver.joints()
    }

    #[cfg(test)]
    pub fn is_flipped(&self) -> bool {
        self.animation.is_flipped_horizontal()
    }

    /// World position the model should be drawn at
    pub fn render_position(&self) -> Vec3 {
        self.position + Vec3::new(0.0, self.joints().body_offset_y, 0.0)
    }

    pub fn rig_name(&self) -> &'static str {
        self.driver.name()
    }
}
