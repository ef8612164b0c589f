use web_time::{Duration, Instant};

/// Longest frame step handed to the camera. Longer gaps (debugger pauses,
/// window drags) would otherwise teleport a moving camera.
const DEFAULT_MAX_STEP: Duration = Duration::from_millis(250);

/// Per-frame delta time with a smoothed FPS readout.
pub struct FrameClock {
    /// Last tick timestamp
    last_tick: Instant,
    /// Upper bound on a single step
    max_step: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a clock starting now.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a clock whose first tick measures from `start`.
    pub fn starting_at(start: Instant) -> Self {
        Self {
            last_tick: start,
            max_step: DEFAULT_MAX_STEP,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Override the step clamp.
    #[must_use]
    pub fn with_max_step(mut self, max_step: Duration) -> Self {
        self.max_step = max_step;
        self
    }

    /// Seconds since the previous tick, clamped to the max step.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// [`tick`](Self::tick) against an explicit timestamp.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed.min(self.max_step).as_secs_f32()
    }

    /// Get the current FPS (smoothed)
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
