//! Monotonic fall clock.

use std::time::{Duration, Instant};

/// Measures game time since the last fall step.
///
/// The engine only compares the supplied duration against its fall interval;
/// the host restarts this clock whenever a tick reports `fall_timer_reset`.
#[derive(Debug, Clone, Copy)]
pub struct FallClock {
    last_fall: Instant,
}

impl FallClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        Self { last_fall: now }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    /// Elapsed time as seen at `now`; zero if `now` is earlier than the last reset.
    pub fn elapsed_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_fall)
    }

    pub fn reset(&mut self) {
        self.reset_at(Instant::now());
    }

    pub fn reset_at(&mut self, now: Instant) {
        self.last_fall = now;
    }
}

impl Default for FallClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_counts_from_last_reset() {
        let t0 = Instant::now();
        let mut clock = FallClock::starting_at(t0);
        assert_eq!(clock.elapsed_at(t0 + Duration::from_millis(600)), Duration::from_millis(600));

        clock.reset_at(t0 + Duration::from_millis(600));
        assert_eq!(clock.elapsed_at(t0 + Duration::from_millis(700)), Duration::from_millis(100));
    }

    #[test]
    fn elapsed_never_goes_negative() {
        let t0 = Instant::now();
        let clock = FallClock::starting_at(t0 + Duration::from_secs(1));
        assert_eq!(clock.elapsed_at(t0), Duration::ZERO);
    }
}
