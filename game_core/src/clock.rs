//! Timestep source for the frame loop.
//!
//! The simulation integrates with whatever time elapsed since the previous
//! frame; there is no fixed-step accumulator. `FrameTimer` samples a [`Clock`]
//! once per frame and hands out that delta.

use std::time::Instant;

/// Monotonic time source, in seconds
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall clock backed by `Instant`
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, seconds: f64) {
        self.now += seconds;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now
    }
}

/// Turns clock samples into per-frame deltas
#[derive(Debug, Clone, Copy)]
pub struct FrameTimer {
    last: f64,
    pub frame_count: u64,
}

impl FrameTimer {
    pub fn new(clock: &impl Clock) -> Self {
        Self {
            last: clock.now(),
            frame_count: 0,
        }
    }

    /// Forget the previous sample so the next tick measures from now
    pub fn reset(&mut self, clock: &impl Clock) {
        self.last = clock.now();
    }

    /// Sample the clock and return the seconds elapsed since the last call
    pub fn tick(&mut self, clock: &impl Clock) -> f32 {
        let now = clock.now();
        let dt = now - self.last;
        self.last = now;
        self.frame_count += 1;
        dt as f32
    }
}
