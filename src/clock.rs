//! Elapsed-time sources queried once per frame.

use std::time::Instant;

/// Monotonic elapsed time since the clock was created
pub trait Clock {
    /// Seconds since start; called once per frame
    fn elapsed_s(&mut self) -> f64;
}

/// Wall-clock time, reset at construction
pub struct SystemClock {
    start_time: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed_s(&mut self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}

/// Deterministic clock: the n-th query returns `n / fps`
pub struct FixedStepClock {
    fps: f64,
    frame: u64,
}

impl FixedStepClock {
    pub fn new(fps: f64) -> Self {
        Self { fps, frame: 0 }
    }

    /// Seconds per frame
    pub fn frame_duration_s(&self) -> f64 {
        1.0 / self.fps
    }
}

impl Clock for FixedStepClock {
    fn elapsed_s(&mut self) -> f64 {
        let t = self.frame as f64 / self.fps;
        self.frame += 1;
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_step_clock() {
        let mut clock = FixedStepClock::new(60.0);
        assert_eq!(clock.elapsed_s(), 0.0);
        assert!((clock.elapsed_s() - 1.0 / 60.0).abs() < 1e-12);
        for _ in 0..58 {
            clock.elapsed_s();
        }
        assert!((clock.elapsed_s() - 1.0).abs() < 1e-12);
        assert!((clock.frame_duration_s() - 1.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let mut clock = SystemClock::new();
        let a = clock.elapsed_s();
        let b = clock.elapsed_s();
        assert!(a >= 0.0);
        assert!(b >= a);
    }
}
