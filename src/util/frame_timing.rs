use web_time::{Duration, Instant};

/// Longest step handed to the simulation, so a stalled frame (window drag,
/// debugger pause) does not fling the camera across the scene.
const MAX_FRAME_STEP: f32 = 0.25;

/// Interval between FPS log lines.
const LOG_INTERVAL: Duration = Duration::from_secs(5);

/// Frame timing with delta-time, FPS smoothing and optional frame limiting
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// When FPS was last logged
    last_log: Instant,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        let now = Instant::now();
        Self {
            target_fps,
            min_frame_duration,
            last_frame: now,
            smoothed_fps: 60.0,
            smoothing: 0.05,
            last_log: now,
        }
    }

    /// Whether enough time has passed since the last frame to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Earliest instant the next frame may start, or `None` when unlimited.
    #[must_use]
    pub fn next_frame_at(&self) -> Option<Instant> {
        (self.target_fps > 0).then(|| self.last_frame + self.min_frame_duration)
    }

    /// Start a frame: returns the seconds elapsed since the previous one,
    /// clamped, and updates the FPS estimate.
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed.as_secs_f32());

        if now.duration_since(self.last_log) >= LOG_INTERVAL {
            self.last_log = now;
            log::debug!("{:.1} fps", self.fps());
        }

        elapsed.as_secs_f32().min(MAX_FRAME_STEP)
    }

    fn record(&mut self, frame_time: f32) {
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_always_renders() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_render());
        assert!(timing.next_frame_at().is_none());
    }

    #[test]
    fn limited_waits_for_frame_budget() {
        let timing = FrameTiming::new(1);
        assert!(!timing.should_render());
        assert!(timing.next_frame_at().is_some());
    }

    #[test]
    fn step_is_clamped() {
        let mut timing = FrameTiming::new(0);
        timing.last_frame = Instant::now() - Duration::from_secs(3);
        let dt = timing.begin_frame();
        assert!((dt - MAX_FRAME_STEP).abs() < f32::EPSILON);
    }

    #[test]
    fn fps_smooths_toward_frame_rate() {
        let mut timing = FrameTiming::new(0);
        for _ in 0..200 {
            timing.record(1.0 / 30.0);
        }
        assert!((timing.fps() - 30.0).abs() < 0.5);
    }
}
