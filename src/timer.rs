//! One-shot auto-advance timer.
//!
//! Time is the session clock: a `Duration` since playback started, advanced
//! by the frame loop. There is at most one scheduled advance at a time and
//! the only way to schedule one is [`AdvanceTimer::reschedule`], which drops
//! the previous one first.

use std::time::Duration;

/// Identity of one scheduled advance. Handles are never reused within a
/// session, so an old handle can always be told apart from the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    handle: TimerHandle,
    due: Duration,
}

#[derive(Debug, Default)]
pub struct AdvanceTimer {
    next_id: u64,
    scheduled: Option<Scheduled>,
}

impl AdvanceTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any pending advance, then schedules a new one `delay` after
    /// `now`.
    pub fn reschedule(&mut self, now: Duration, delay: Duration) -> TimerHandle {
        self.cancel();
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.scheduled = Some(Scheduled {
            handle,
            due: now + delay,
        });
        handle
    }

    pub fn cancel(&mut self) -> Option<TimerHandle> {
        self.scheduled.take().map(|s| s.handle)
    }

    pub fn pending(&self) -> Option<TimerHandle> {
        self.scheduled.map(|s| s.handle)
    }

    pub fn is_pending(&self) -> bool {
        self.scheduled.is_some()
    }

    pub fn due_at(&self) -> Option<Duration> {
        self.scheduled.map(|s| s.due)
    }

    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.scheduled.map(|s| s.due.saturating_sub(now))
    }

    /// The pending handle if its deadline has passed. Does not consume it.
    pub fn expired(&self, now: Duration) -> Option<TimerHandle> {
        self.scheduled
            .filter(|s| now >= s.due)
            .map(|s| s.handle)
    }

    /// Consumes the pending advance if `handle` is still the current one.
    /// Returns false for a handle that was cancelled or superseded.
    pub fn take_if_current(&mut self, handle: TimerHandle) -> bool {
        match self.scheduled {
            Some(s) if s.handle == handle => {
                self.scheduled = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE_SECONDS: Duration = Duration::from_millis(5000);

    #[test]
    fn reschedule_replaces_previous_handle() {
        let mut timer = AdvanceTimer::new();
        let first = timer.reschedule(Duration::ZERO, FIVE_SECONDS);
        let second = timer.reschedule(Duration::from_millis(1000), FIVE_SECONDS);

        assert_ne!(first, second);
        assert_eq!(timer.pending(), Some(second));
        assert_eq!(timer.due_at(), Some(Duration::from_millis(6000)));
        assert!(!timer.take_if_current(first));
        assert!(timer.is_pending());
    }

    #[test]
    fn expires_only_after_deadline() {
        let mut timer = AdvanceTimer::new();
        let handle = timer.reschedule(Duration::ZERO, FIVE_SECONDS);

        assert_eq!(timer.expired(Duration::from_millis(4999)), None);
        assert_eq!(timer.remaining(Duration::from_millis(4000)), Some(Duration::from_millis(1000)));
        assert_eq!(timer.expired(FIVE_SECONDS), Some(handle));

        assert!(timer.take_if_current(handle));
        assert!(!timer.is_pending());
        assert!(!timer.take_if_current(handle));
    }

    #[test]
    fn cancel_clears_pending() {
        let mut timer = AdvanceTimer::new();
        let handle = timer.reschedule(Duration::ZERO, FIVE_SECONDS);
        assert_eq!(timer.cancel(), Some(handle));
        assert_eq!(timer.cancel(), None);
        assert_eq!(timer.expired(Duration::from_secs(60)), None);
    }
}
