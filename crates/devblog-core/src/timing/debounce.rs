//! Quiescence delay.

use std::time::Duration;

use tokio::time::Instant;

/// Holds back the latest value until input has been quiet for a while.
///
/// Each [`schedule`](Debouncer::schedule) replaces the pending value and
/// restarts the countdown. [`poll`](Debouncer::poll) releases the value once,
/// and only when no newer input arrived before the deadline.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Record a new input, superseding any pending one.
    ///
    /// Returns the deadline at which the value settles.
    pub fn schedule(&mut self, value: T, now: Instant) -> Instant {
        let deadline = now + self.quiet;
        self.pending = Some((value, deadline));
        deadline
    }

    /// Release the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = matches!(&self.pending, Some((_, deadline)) if now >= *deadline);
        if due {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }

    /// Deadline of the pending value, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// The value waiting to settle, if any.
    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|(value, _)| value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without releasing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn releases_after_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule("rust", start);
        assert_eq!(debouncer.poll(start + Duration::from_millis(299)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(300)), Some("rust"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn releases_exactly_once() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule(1, start);
        let later = start + Duration::from_secs(1);
        assert_eq!(debouncer.poll(later), Some(1));
        assert_eq!(debouncer.poll(later), None);
    }

    #[test]
    fn newer_input_restarts_countdown() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule("r", start);
        debouncer.schedule("ru", start + Duration::from_millis(50));
        let deadline = debouncer.schedule("rus", start + Duration::from_millis(100));

        assert_eq!(deadline, start + Duration::from_millis(400));
        // The first keystroke's deadline passes without a release
        assert_eq!(debouncer.poll(start + Duration::from_millis(300)), None);
        assert_eq!(debouncer.poll(deadline), Some("rus"));
    }

    #[test]
    fn cancel_discards_pending() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(10));

        debouncer.schedule('x', start);
        assert_eq!(debouncer.cancel(), Some('x'));
        assert_eq!(debouncer.poll(start + Duration::from_secs(1)), None);
        assert_eq!(debouncer.deadline(), None);
    }
}
