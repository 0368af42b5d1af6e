/// Game loop timing and control system
///
/// Fixed timestep for movement and physics, plus one variable-rate step per
/// frame for discrete checks (attack and dodge triggering).
use std::time::{Duration, Instant};

/// Target physics/update rate (60 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of physics steps per frame to prevent spiral of death
const MAX_PHYSICS_STEPS: u32 = 5;

/// Longest frame fed to the variable step, so a stall cannot skip whole cooldowns
const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Work to run for one rendered frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStep {
    /// Seconds for the variable-rate update
    pub delta: f32,
    /// Number of fixed updates to run
    pub fixed_steps: u32,
}

/// Game loop timing state
pub struct GameLoop {
    accumulator: Duration,
    last_frame_time: Instant,
    paused: bool,
    frame_times: Vec<Duration>,
    frame_count: u64,
    update_count: u64,
    current_fps: f32,
}

impl GameLoop {
    /// Create a new game loop
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            update_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame using wall-clock time since the previous one
    pub fn begin_frame(&mut self) -> FrameStep {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Advance the loop by an explicit frame time
    pub fn advance(&mut self, frame_time: Duration) -> FrameStep {
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        // If paused, neither step runs
        if self.paused {
            return FrameStep {
                delta: 0.0,
                fixed_steps: 0,
            };
        }

        let frame_time = frame_time.min(MAX_FRAME_DELTA);
        self.accumulator += frame_time;

        let mut fixed_steps = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && fixed_steps < MAX_PHYSICS_STEPS {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            fixed_steps += 1;
        }

        // Drop whatever the step cap could not consume
        if fixed_steps == MAX_PHYSICS_STEPS {
            self.accumulator = self.accumulator.min(FIXED_TIMESTEP_DURATION);
        }

        self.update_count += fixed_steps as u64;
        FrameStep {
            delta: frame_time.as_secs_f32(),
            fixed_steps,
        }
    }

    /// Get the fixed timestep for physics updates (in seconds)
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total number of frames
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of fixed updates executed
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
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::new();
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.update_count(), 0);
        assert!(!game_loop.is_paused());
        assert!((game_loop.fixed_timestep() - 1.0 / 60.0).abs() < 0.0001);
    }

    #[test]
    fn test_toggle_pause() {
        let mut game_loop = GameLoop::new();

        game_loop.toggle_pause();
        assert!(game_loop.is_paused());

        game_loop.toggle_pause();
        assert!(!game_loop.is_paused());
    }

    #[test]
    fn test_paused_runs_nothing() {
        let mut game_loop = GameLoop::new();
        game_loop.pause();

        let step = game_loop.advance(Duration::from_millis(50));
        assert_eq!(step.fixed_steps, 0);
        assert_eq!(step.delta, 0.0);
        assert_eq!(game_loop.frame_count(), 1);
    }

    #[test]
    fn test_fixed_steps_accumulate() {
        let mut game_loop = GameLoop::new();

        // Half a step: nothing yet
        let step = game_loop.advance(Duration::from_millis(10));
        assert_eq!(step.fixed_steps, 0);
        assert!((step.delta - 0.010).abs() < 1e-6);

        // Remainder carries over
        let step = game_loop.advance(Duration::from_millis(10));
        assert_eq!(step.fixed_steps, 1);
    }

    #[test]
    fn test_max_physics_steps_limit() {
        let mut game_loop = GameLoop::new();

        // 200ms would allow 12 updates
        let step = game_loop.advance(Duration::from_millis(200));
        assert_eq!(step.fixed_steps, MAX_PHYSICS_STEPS);

        // The backlog is dropped instead of bursting next frame
        let step = game_loop.advance(Duration::ZERO);
        assert!(step.fixed_steps <= 1);
    }

    #[test]
    fn test_long_frame_delta_is_clamped() {
        let mut game_loop = GameLoop::new();
        let step = game_loop.advance(Duration::from_secs(3));
        assert!((step.delta - MAX_FRAME_DELTA.as_secs_f32()).abs() < 1e-6);
    }

    #[test]
    fn test_fps_after_ten_frames() {
        let mut game_loop = GameLoop::new();
        for _ in 0..10 {
            game_loop.advance(Duration::from_millis(20));
        }
        assert!((game_loop.fps() - 50.0).abs() < 0.5);
        assert_eq!(game_loop.update_count(), 11);
    }
}
