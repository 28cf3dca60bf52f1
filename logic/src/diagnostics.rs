use crate::position::Position;
use embassy_time::{Duration, Instant};

/// Snapshot of the decoder health, meant for logging.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecoderStats {
    pub position: Position,
    /// Transitions where both channels changed between two polls.
    pub skipped: u32,
}

/// Fires at most once per `period`.
///
/// If polled late the next deadline is counted from the late poll, so a stalled loop does not
/// produce a burst.
pub struct Heartbeat {
    period: Duration,
    next: Instant,
}

impl Heartbeat {
    pub fn new(start: Instant, period: Duration) -> Self {
        Self {
            period,
            next: start + period,
        }
    }

    pub fn due(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next = now + self.period;
        true
    }
}
