// --- File: frame_clock.rs ---
use std::time::{Duration, Instant};

/// Fixed-cadence frame scheduler: one simulation tick and one render per due
/// frame. Frames missed while the loop was busy are dropped, not replayed.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    deadline: Instant,
}

impl FrameClock {
    pub fn new(frames_per_second: u32, now: Instant) -> Self {
        let fps = frames_per_second.max(1);
        Self {
            interval: Duration::from_secs_f64(1.0 / fps as f64),
            deadline: now,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Consumes the current frame and schedules the next one.
    pub fn advance(&mut self, now: Instant) {
        self.deadline += self.interval;
        if self.deadline <= now {
            self.deadline = now + self.interval;
        }
    }
}

/// Frames-per-second estimate refreshed every `update_interval`.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    update_interval: Duration,
    last_update: Instant,
    frames: u32,
    current: f64,
}

impl FpsCounter {
    pub fn new(update_interval_secs: f64, now: Instant) -> Self {
        Self {
            update_interval: Duration::from_secs_f64(update_interval_secs),
            last_update: now,
            frames: 0,
            current: 0.0,
        }
    }

    /// Counts one frame. Returns true when the estimate was refreshed.
    pub fn frame(&mut self, now: Instant) -> bool {
        self.frames += 1;
        let elapsed = now.duration_since(self.last_update);
        if elapsed < self.update_interval {
            return false;
        }
        self.current = self.frames as f64 / elapsed.as_secs_f64();
        self.last_update = now;
        self.frames = 0;
        true
    }

    #[inline]
    pub fn fps(&self) -> f64 {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_due_immediately() {
        let start = Instant::now();
        let clock = FrameClock::new(100, start);
        assert!(clock.is_due(start));
        assert_eq!(clock.interval(), Duration::from_millis(10));
    }

    #[test]
    fn advance_schedules_next_frame() {
        let start = Instant::now();
        let mut clock = FrameClock::new(100, start);
        clock.advance(start);
        assert!(!clock.is_due(start + Duration::from_millis(5)));
        assert!(clock.is_due(start + Duration::from_millis(10)));
    }

    #[test]
    fn missed_frames_are_skipped() {
        let start = Instant::now();
        let mut clock = FrameClock::new(100, start);
        let late = start + Duration::from_millis(95);
        clock.advance(late);
        assert_eq!(clock.deadline(), late + Duration::from_millis(10));
        assert!(!clock.is_due(late));
    }

    #[test]
    fn zero_rate_is_treated_as_one() {
        let clock = FrameClock::new(0, Instant::now());
        assert_eq!(clock.interval(), Duration::from_secs(1));
    }

    #[test]
    fn fps_counter_averages_over_window() {
        let start = Instant::now();
        let mut counter = FpsCounter::new(1.0, start);
        for i in 1..50 {
            assert!(!counter.frame(start + Duration::from_millis(i * 10)));
        }
        assert!(counter.frame(start + Duration::from_millis(1000)));
        assert!((counter.fps() - 50.0).abs() < 1e-9);
    }
}
