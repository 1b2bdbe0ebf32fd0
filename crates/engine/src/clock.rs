//! Fixed-interval frame clock.
//!
//! Stands in for a display-refresh callback: the loop waits (while draining
//! input) until the next deadline, runs one frame, then advances the clock.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    next: Instant,
    frames: u64,
}

impl FrameClock {
    /// First frame is due immediately at `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next: now,
            frames: 0,
        }
    }

    /// Time left until the next frame is due (zero if already due).
    pub fn timeout(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Record a frame run at `now` and schedule the next one.
    ///
    /// After an overrun the next deadline is one interval from `now`, so a
    /// slow frame never causes a burst of catch-up frames.
    pub fn advance(&mut self, now: Instant) {
        self.frames += 1;
        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }
    }

    /// Frames run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn first_frame_is_due_immediately() {
        let t0 = Instant::now();
        let clock = FrameClock::new(16 * MS, t0);
        assert!(clock.is_due(t0));
        assert_eq!(clock.timeout(t0), Duration::ZERO);
    }

    #[test]
    fn on_time_frames_keep_a_fixed_cadence() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(16 * MS, t0);
        clock.advance(t0 + 2 * MS);
        assert_eq!(clock.timeout(t0 + 2 * MS), 14 * MS);
        assert!(!clock.is_due(t0 + 15 * MS));
        assert!(clock.is_due(t0 + 16 * MS));
        assert_eq!(clock.frames(), 1);
    }

    #[test]
    fn overrun_reschedules_from_now() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(16 * MS, t0);
        clock.advance(t0 + 50 * MS);
        assert!(!clock.is_due(t0 + 60 * MS));
        assert_eq!(clock.timeout(t0 + 50 * MS), 16 * MS);
    }
}
