// Pose animation playback

use std::collections::HashMap;

use super::pose::Pose;

/// Timing for one pose animation
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub pose: Pose,
    /// Length of one cycle in seconds
    pub duration: f32,
    /// Whether the animation loops
    pub looping: bool,
}

impl AnimationClip {
    pub fn new(pose: Pose, duration: f32, looping: bool) -> Self {
        Self {
            pose,
            duration: duration.max(f32::EPSILON),
            looping,
        }
    }

    /// Create a looping animation
    pub fn looping(pose: Pose, duration: f32) -> Self {
        Self::new(pose, duration, true)
    }

    /// Create a one-shot animation (plays once and holds the last frame)
    pub fn one_shot(pose: Pose, duration: f32) -> Self {
        Self::new(pose, duration, false)
    }
}

/// Tracks which pose clip is active and how far through it we are
#[derive(Debug)]
pub struct AnimationPlayer {
    clips: HashMap<Pose, AnimationClip>,
    current: Pose,
    /// Seconds into the current clip
    time: f32,
    /// Progress pinned by the simulation, overrides the clock
    pinned_progress: Option<f32>,
    playing: bool,
    /// Mirror the rig to face left
    flip_horizontal: bool,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self {
            clips: HashMap::new(),
            current: Pose::Idle,
            time: 0.0,
            pinned_progress: None,
            playing: true,
            flip_horizontal: false,
        }
    }

    /// Create a player with a clip for every pose
    pub fn with_standard_animations() -> Self {
        let mut player = Self::new();

        player.add_animation(AnimationClip::looping(Pose::Idle, 3.0));
        player.add_animation(AnimationClip::looping(Pose::Walk, 0.6));
        // Roughly the airtime of a full jump at 60 ticks per second
        player.add_animation(AnimationClip::one_shot(Pose::Jump, 0.66));
        player.add_animation(AnimationClip::looping(Pose::Block, 1.0));
        player.add_animation(AnimationClip::one_shot(Pose::Attack, 0.2));

        player.play(Pose::Idle);
        player
    }

    /// Add an animation clip
    pub fn add_animation(&mut self, clip: AnimationClip) {
        self.clips.insert(clip.pose, clip);
    }

    /// Switch to a pose, restarting only if it changed
    pub fn play(&mut self, pose: Pose) {
        if self.current != pose {
            self.play_from_start(pose);
        }
    }

    /// Play a pose from the beginning, even if it's the same
    pub fn play_from_start(&mut self, pose: Pose) {
        self.current = pose;
        self.time = 0.0;
        self.pinned_progress = None;
        self.playing = true;
    }

    /// Drive progress directly instead of by the clock (attack swings)
    pub fn pin_progress(&mut self, progress: f32) {
        self.pinned_progress = Some(progress.clamp(0.0, 1.0));
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn resume(&mut self) {
        self.playing = true;
    }

    pub fn set_flip_horizontal(&mut self, flip: bool) {
        self.flip_horizontal = flip;
    }

    pub fn is_flipped_horizontal(&self) -> bool {
        self.flip_horizontal
    }

    /// Advance the clock (called every frame)
    pub fn update(&mut self, dt: f32) {
        if !self.playing {
            return;
        }

        let Some(clip) = self.clips.get(&self.current) else {
            return;
        };

        self.time += dt;

        if self.time >= clip.duration {
            if clip.looping {
                self.time %= clip.duration;
            } else {
                self.time = clip.duration;
                self.playing = false;
            }
        }
    }

    pub fn current_pose(&self) -> Pose {
        self.current
    }

    /// Normalised progress through the current clip (0..1)
    pub fn progress(&self) -> f32 {
        if let Some(progress) = self.pinned_progress {
            return progress;
        }
        match self.clips.get(&self.current) {
            Some(clip) => (self.time / clip.duration).min(1.0),
            None => 0.0,
        }
    }

    #[cfg(test)]
    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_player_starts_idle() {
        let player = AnimationPlayer::with_standard_animations();
        assert_eq!(player.current_pose(), Pose::Idle);
        assert_eq!(player.progress(), 0.0);
        assert!(player.is_playing());
    }

    #[test]
    fn test_play_same_pose_keeps_time() {
        let mut player = AnimationPlayer::with_standard_animations();
        player.play(Pose::Walk);
        player.update(0.3);
        player.play(Pose::Walk);
        assert_relative_eq!(player.progress(), 0.5);

        player.play_from_start(Pose::Walk);
        assert_eq!(player.progress(), 0.0);
    }

    #[test]
    fn test_looping_wraps() {
        let mut player = AnimationPlayer::new();
        player.add_animation(AnimationClip::looping(Pose::Walk, 1.0));
        player.play(Pose::Walk);

        player.update(1.25);
        assert_relative_eq!(player.progress(), 0.25);
        assert!(player.is_playing());
    }

    #[test]
    fn test_one_shot_holds_end() {
        let mut player = AnimationPlayer::new();
        player.add_animation(AnimationClip::one_shot(Pose::Jump, 0.5));
        player.play(Pose::Jump);

        player.update(0.8);
        assert_eq!(player.progress(), 1.0);
        assert!(!player.is_playing());
    }

    #[test]
    fn test_pinned_progress_overrides_clock() {
        let mut player = AnimationPlayer::with_standard_animations();
        player.play(Pose::Attack);
        player.pin_progress(0.4);
        player.update(10.0);
        assert_relative_eq!(player.progress(), 0.4);

        player.pin_progress(3.0);
        assert_eq!(player.progress(), 1.0);

        // A new pose drops the pin
        player.play(Pose::Idle);
        assert_eq!(player.progress(), 0.0);
    }

    #[test]
    fn test_pause_stops_clock() {
        let mut player = AnimationPlayer::with_standard_animations();
        player.play(Pose::Walk);
        player.pause();
        player.update(0.3);
        assert_eq!(player.progress(), 0.0);

        player.resume();
        player.update(0.3);
        assert!(player.progress() > 0.0);
    }
}
