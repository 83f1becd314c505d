#[cfg(not(target_arch = "wasm32"))]
pub use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
pub use web_time::{Duration, Instant};

/// Timer for tracking per-frame deltas.
///
/// Hosts driving a real render loop call [`Timer::tick`]; the coordinator
/// itself uses [`Timer::tick_at`] with the timestamp it was handed, so
/// frame deltas stay deterministic under test.
#[derive(Debug, Clone)]
pub struct Timer {
    last_update: Option<Instant>,
    /// Time since the previous tick.
    pub delta: Duration,
    /// Total number of ticks.
    pub frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_update: None,
            delta: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Advances the timer to now and returns the delta.
    pub fn tick(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }

    /// Advances the timer to an externally supplied timestamp. The first
    /// tick reports a zero delta.
    pub fn tick_at(&mut self, now: Instant) -> Duration {
        self.delta = self
            .last_update
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_update = Some(now);
        self.frame_count += 1;
        self.delta
    }

    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}
