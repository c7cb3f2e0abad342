//! # Resync Scheduler
//!
//! Issues a state-pull request on a fixed cadence regardless of push
//! activity, bounding the staleness window if a push message is lost. Runs
//! independently of move activity; any snapshot it triggers is processed
//! through the same reconciliation path as an unsolicited push.

use std::time::Duration;

use log::trace;

use crate::shared::Timer;

pub struct ResyncScheduler {
    timer: Timer,
    cancelled: bool,
}

impl ResyncScheduler {
    pub fn new(interval: Duration) -> Self {
        ResyncScheduler {
            timer: Timer::new(interval),
            cancelled: false,
        }
    }

    /// True when a sync request should go out now; restarts the cadence.
    /// Always false after cancellation.
    pub fn poll(&mut self) -> bool {
        if self.cancelled {
            return false;
        }
        if self.timer.ringing() {
            self.timer.reset();
            true
        } else {
            false
        }
    }

    /// Tear down the schedule. Calling this twice is a no-op, not an error.
    pub fn cancel(&mut self) {
        if self.cancelled {
            return;
        }
        self.cancelled = true;
        trace!("resync schedule cancelled");
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_interval_polls_true_every_time() {
        let mut scheduler = ResyncScheduler::new(Duration::ZERO);
        assert!(scheduler.poll());
        assert!(scheduler.poll());
    }

    #[test]
    fn long_interval_does_not_poll_true() {
        let mut scheduler = ResyncScheduler::new(Duration::from_secs(3600));
        assert!(!scheduler.poll());
    }

    #[test]
    fn cancel_is_idempotent_and_silences_the_schedule() {
        let mut scheduler = ResyncScheduler::new(Duration::ZERO);
        assert!(scheduler.poll());

        scheduler.cancel();
        scheduler.cancel();
        assert!(scheduler.is_cancelled());
        assert!(!scheduler.poll());
    }
}
