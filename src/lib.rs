pub mod app;
pub mod components;
pub mod config;
pub mod factory;
pub mod game;
pub mod input;
pub mod simulation;
pub mod stats;
pub mod ui;

#[cfg(test)]
mod tests;

use std::time::{Duration, Instant};

/// Frame clock for the main loop.
///
/// Frame deltas are handed out in whole milliseconds; the sub-millisecond
/// remainder of each frame is carried into the next one so no time is lost.
#[derive(Debug, Clone)]
pub struct Time {
    delta: Duration,
    delta_ms: u64,
    carry: Duration,
    last_update: Instant,
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

impl Time {
    #[must_use]
    pub fn new() -> Self {
        Self {
            delta: Duration::default(),
            delta_ms: 0,
            carry: Duration::default(),
            last_update: Instant::now(),
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        self.advance(now.duration_since(self.last_update));
        self.last_update = now;
    }

    /// Records a frame of the given length.
    pub fn advance(&mut self, delta: Duration) {
        self.delta = delta;

        let pending = delta + self.carry;
        self.delta_ms = u64::try_from(pending.as_millis()).unwrap_or(u64::MAX);
        self.carry = pending.saturating_sub(Duration::from_millis(self.delta_ms));
    }

    #[must_use]
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Whole milliseconds to simulate for the last frame, including time
    /// carried over from earlier frames.
    #[must_use]
    pub fn delta_ms(&self) -> u64 {
        self.delta_ms
    }
}
