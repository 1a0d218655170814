//! Clock abstraction and the single-slot reset alarm.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of "now" for the navigator.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-driven clock. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Move time forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Pending deferred reset of a transition.
///
/// Holds at most one deadline. It is armed once per accepted transition and
/// lapses when fired; there is no cancel.
#[derive(Debug, Default)]
pub(crate) struct ResetAlarm {
    deadline: Option<Instant>,
}

impl ResetAlarm {
    pub(crate) fn arm(&mut self, deadline: Instant) {
        debug_assert!(self.deadline.is_none(), "reset alarm armed twice");
        self.deadline = Some(deadline);
    }

    /// Consume the alarm if its deadline has passed.
    pub(crate) fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new();
        let other = clock.clone();
        let start = clock.now();
        other.advance(Duration::from_millis(250));
        assert_eq!(clock.now() - start, Duration::from_millis(250));
    }

    #[test]
    fn test_alarm_fires_once_at_deadline() {
        let clock = ManualClock::new();
        let mut alarm = ResetAlarm::default();
        alarm.arm(clock.now() + Duration::from_millis(500));

        clock.advance(Duration::from_millis(499));
        assert!(!alarm.fire_if_due(clock.now()));
        assert_eq!(alarm.remaining(clock.now()), Some(Duration::from_millis(1)));

        clock.advance(Duration::from_millis(1));
        assert!(alarm.fire_if_due(clock.now()));
        assert!(!alarm.fire_if_due(clock.now()));
        assert_eq!(alarm.remaining(clock.now()), None);
    }

    #[test]
    fn test_unarmed_alarm_never_fires() {
        let mut alarm = ResetAlarm::default();
        assert!(!alarm.fire_if_due(Instant::now()));
        assert_eq!(alarm.remaining(Instant::now()), None);
    }
}
