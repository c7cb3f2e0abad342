use std::time::{Duration, Instant};

/// A fixed-duration timer that can be checked, reset, and forced to ring.
pub struct Timer {
    duration: Duration,
    last: Instant,
    ring_manual: bool,
}

impl Timer {
    pub fn new(duration: Duration) -> Self {
        Timer {
            duration,
            last: Instant::now(),
            ring_manual: false,
        }
    }

    /// Restart the countdown from now.
    pub fn reset(&mut self) {
        self.ring_manual = false;
        self.last = Instant::now();
    }

    /// Whether the configured duration has elapsed since the last reset.
    pub fn ringing(&self) -> bool {
        self.ring_manual || Instant::now().saturating_duration_since(self.last) >= self.duration
    }

    /// Force the timer to ring on the next check, regardless of elapsed time.
    pub fn ring_manual(&mut self) {
        self.ring_manual = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_rings_immediately() {
        let timer = Timer::new(Duration::ZERO);
        assert!(timer.ringing());
    }

    #[test]
    fn long_duration_does_not_ring_until_forced() {
        let mut timer = Timer::new(Duration::from_secs(3600));
        assert!(!timer.ringing());
        timer.ring_manual();
        assert!(timer.ringing());
    }

    #[test]
    fn reset_clears_a_manual_ring() {
        let mut timer = Timer::new(Duration::from_secs(3600));
        timer.ring_manual();
        timer.reset();
        assert!(!timer.ringing());
    }
}
