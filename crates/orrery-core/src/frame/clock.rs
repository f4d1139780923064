/// Scene clock: accumulates frame deltas into elapsed seconds.
/// Every time-based decision in a frame (orbits, transitions, tour) reads the same `now`.
#[derive(Debug, Clone, Default)]
pub struct SceneClock {
    elapsed: f64,
    frames: u64,
}

impl SceneClock {
    /// Longest frame delta accepted; a tab coming back from the background
    /// resumes smoothly instead of teleporting every body.
    pub const MAX_FRAME_DT: f32 = 0.25;

    pub fn new() -> Self {
        Self::default()
    }

    /// Add one frame's delta. Negative or non-finite deltas count as zero.
    pub fn advance(&mut self, frame_dt: f32) -> f32 {
        let dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, Self::MAX_FRAME_DT)
        } else {
            0.0
        };
        self.elapsed += dt as f64;
        self.frames += 1;
        dt
    }

    /// Elapsed scene seconds.
    pub fn now(&self) -> f64 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_deltas() {
        let mut clock = SceneClock::new();
        for _ in 0..60 {
            clock.advance(1.0 / 60.0);
        }
        assert!((clock.now() - 1.0).abs() < 1e-5);
        assert_eq!(clock.frames(), 60);
    }

    #[test]
    fn caps_long_frames() {
        let mut clock = SceneClock::new();
        let used = clock.advance(5.0);
        assert_eq!(used, SceneClock::MAX_FRAME_DT);
        assert!((clock.now() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn ignores_negative_and_nan() {
        let mut clock = SceneClock::new();
        clock.advance(-1.0);
        clock.advance(f32::NAN);
        assert_eq!(clock.now(), 0.0);
        assert_eq!(clock.frames(), 2);
    }
}
