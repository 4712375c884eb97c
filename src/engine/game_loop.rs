/// Game loop timing and control system
///
/// Supports two stepping modes. `Variable` runs one simulation step per
/// rendered frame with the raw frame delta, which is how the combat tuning
/// was authored. `Fixed` feeds the same per-tick contracts from an
/// accumulator so results stop depending on frame rate.
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Default fixed update rate (60 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;

/// Maximum number of fixed steps per frame to prevent spiral of death
const MAX_PHYSICS_STEPS: u32 = 5;

/// Longest frame delta handed to the simulation in variable mode
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// Fixed update rates accepted from configuration (Hz)
pub const FIXED_RATE_RANGE: RangeInclusive<f32> = 1.0..=1000.0;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Timing configuration errors
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Unknown timestep mode: {0} (expected `variable`, `fixed` or `fixed:<hz>`)")]
    UnknownTimestep(String),

    #[error("Invalid fixed update rate: {0} (expected 1-1000 Hz)")]
    InvalidRate(String),
}

/// How frame time is turned into simulation steps
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimestepMode {
    /// One step per frame using the measured frame delta
    Variable,
    /// Zero or more steps of exactly this many seconds per frame
    Fixed(f32),
}

impl Default for TimestepMode {
    fn default() -> Self {
        Self::Variable
    }
}

impl FromStr for TimestepMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim().to_ascii_lowercase();
        match value.as_str() {
            "variable" => Ok(Self::Variable),
            "fixed" => Ok(Self::Fixed(FIXED_TIMESTEP)),
            other => {
                let Some(rate) = other.strip_prefix("fixed:") else {
                    return Err(ConfigError::UnknownTimestep(value.clone()));
                };
                let hz: f32 = rate
                    .parse()
                    .map_err(|_| ConfigError::InvalidRate(rate.to_string()))?;
                if !FIXED_RATE_RANGE.contains(&hz) {
                    return Err(ConfigError::InvalidRate(rate.to_string()));
                }
                Ok(Self::Fixed(1.0 / hz))
            }
        }
    }
}

/// Game loop timing state
pub struct GameLoop {
    /// Stepping mode
    mode: TimestepMode,

    /// Accumulated time for fixed timestep updates
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Whether the game is paused
    paused: bool,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Total updates executed
    update_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,

    /// Delta time for rendering (time since last frame)
    render_delta_time: f32,
}

impl GameLoop {
    /// Create a new game loop
    pub fn new(mode: TimestepMode) -> Self {
        let mode = match mode {
            TimestepMode::Fixed(step) if !FIXED_RATE_RANGE.contains(&(1.0 / step)) => {
                log::warn!(
                    "Fixed step {}s out of range, using {}s",
                    step,
                    FIXED_TIMESTEP
                );
                TimestepMode::Fixed(FIXED_TIMESTEP)
            }
            mode => mode,
        };
        Self {
            mode,
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            update_count: 0,
            current_fps: 0.0,
            render_delta_time: 0.0,
        }
    }

    /// Begin a new frame, returns the number of simulation steps to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        self.render_delta_time = frame_time.as_secs_f32();

        if self.paused {
            return 0;
        }

        let updates = match self.mode {
            TimestepMode::Variable => 1,
            TimestepMode::Fixed(step) => {
                self.accumulator += frame_time;
                let step = Duration::from_secs_f32(step);
                let mut updates = 0;
                while self.accumulator >= step && updates < MAX_PHYSICS_STEPS {
                    self.accumulator -= step;
                    updates += 1;
                }
                updates
            }
        };

        self.update_count += u64::from(updates);
        updates
    }

    /// Seconds each simulation step returned by `begin_frame` should cover
    pub fn step_dt(&self) -> f32 {
        match self.mode {
            TimestepMode::Variable => self.render_delta_time.min(MAX_FRAME_DELTA),
            TimestepMode::Fixed(step) => step,
        }
    }

    /// Current stepping mode
    pub fn mode(&self) -> TimestepMode {
        self.mode
    }

    /// Get the delta time since last render (in seconds)
    pub fn render_delta_time(&self) -> f32 {
        self.render_delta_time
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total number of frames rendered
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of updates executed
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Check if game is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the game
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    /// Resume the game
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            log::info!("Game resumed");
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Update FPS calculation
    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new(TimestepMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::default();
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.update_count(), 0);
        assert_eq!(game_loop.mode(), TimestepMode::Variable);
        assert!(!game_loop.is_paused());
    }

    #[test]
    fn test_parse_timestep_mode() {
        assert_eq!(
            "variable".parse::<TimestepMode>(),
            Ok(TimestepMode::Variable)
        );
        assert_eq!(
            " Fixed ".parse::<TimestepMode>(),
            Ok(TimestepMode::Fixed(FIXED_TIMESTEP))
        );
        assert_eq!(
            "fixed:120".parse::<TimestepMode>(),
            Ok(TimestepMode::Fixed(1.0 / 120.0))
        );
    }

    #[test]
    fn test_parse_timestep_mode_errors() {
        assert_eq!(
            "turbo".parse::<TimestepMode>(),
            Err(ConfigError::UnknownTimestep("turbo".to_string()))
        );
        assert_eq!(
            "fixed:0".parse::<TimestepMode>(),
            Err(ConfigError::InvalidRate("0".to_string()))
        );
        assert_eq!(
            "fixed:fast".parse::<TimestepMode>(),
            Err(ConfigError::InvalidRate("fast".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_extreme_rates() {
        assert_eq!(
            "fixed:1e-30".parse::<TimestepMode>(),
            Err(ConfigError::InvalidRate("1e-30".to_string()))
        );
        assert_eq!(
            "fixed:5000".parse::<TimestepMode>(),
            Err(ConfigError::InvalidRate("5000".to_string()))
        );
        assert_eq!(
            "fixed:inf".parse::<TimestepMode>(),
            Err(ConfigError::InvalidRate("inf".to_string()))
        );
        assert!("fixed:1".parse::<TimestepMode>().is_ok());
        assert!("fixed:1000".parse::<TimestepMode>().is_ok());
    }

    #[test]
    fn test_out_of_range_step_falls_back() {
        let mut game_loop = GameLoop::new(TimestepMode::Fixed(1e30));
        assert_eq!(game_loop.mode(), TimestepMode::Fixed(FIXED_TIMESTEP));
        // Must not panic converting the step to a Duration
        game_loop.begin_frame();
    }

    #[test]
    fn test_variable_mode_runs_one_step_per_frame() {
        let mut game_loop = GameLoop::new(TimestepMode::Variable);
        thread::sleep(Duration::from_millis(5));

        assert_eq!(game_loop.begin_frame(), 1);
        assert!(game_loop.step_dt() > 0.0);
        assert!(game_loop.step_dt() <= MAX_FRAME_DELTA);
    }

    #[test]
    fn test_variable_mode_clamps_long_frames() {
        let mut game_loop = GameLoop::new(TimestepMode::Variable);
        thread::sleep(Duration::from_millis(300));

        game_loop.begin_frame();
        assert_eq!(game_loop.step_dt(), MAX_FRAME_DELTA);
        assert!(game_loop.render_delta_time() >= 0.3);
    }

    #[test]
    fn test_fixed_step_dt() {
        let game_loop = GameLoop::new(TimestepMode::Fixed(FIXED_TIMESTEP));
        assert!((game_loop.step_dt() - 1.0 / 60.0).abs() < 0.0001);
    }

    #[test]
    fn test_pause_resume() {
        let mut game_loop = GameLoop::default();
        game_loop.pause();
        assert!(game_loop.is_paused());

        game_loop.resume();
        assert!(!game_loop.is_paused());
    }

    #[test]
    fn test_toggle_pause() {
        let mut game_loop = GameLoop::default();
        game_loop.toggle_pause();
        assert!(game_loop.is_paused());

        game_loop.toggle_pause();
        assert!(!game_loop.is_paused());
    }

    #[test]
    fn test_paused_no_updates() {
        let mut game_loop = GameLoop::new(TimestepMode::Fixed(FIXED_TIMESTEP));
        game_loop.pause();
        thread::sleep(Duration::from_millis(50));
        assert_eq!(game_loop.begin_frame(), 0);

        let mut variable = GameLoop::new(TimestepMode::Variable);
        variable.pause();
        assert_eq!(variable.begin_frame(), 0);
    }

    #[test]
    fn test_frame_counting() {
        let mut game_loop = GameLoop::default();
        game_loop.begin_frame();
        game_loop.begin_frame();
        assert_eq!(game_loop.frame_count(), 2);
        assert_eq!(game_loop.update_count(), 2);
    }

    #[test]
    fn test_max_physics_steps_limit() {
        let mut game_loop = GameLoop::new(TimestepMode::Fixed(FIXED_TIMESTEP));
        thread::sleep(Duration::from_millis(300));

        let updates = game_loop.begin_frame();
        // 300ms would allow 18 updates
        assert_eq!(updates, MAX_PHYSICS_STEPS);
    }
}
