//! Fixed-interval rate limiting.

use std::time::Duration;

use tokio::time::Instant;

/// Lets a handler run at most once per interval.
///
/// A call inside the interval is dropped, not queued. The first call after
/// the interval has elapsed runs immediately.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last_fired: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a call arriving at `now` is allowed to run.
    ///
    /// Returns `true` and starts a new interval when it is.
    pub fn schedule(&mut self, now: Instant) -> bool {
        let eligible = match self.last_fired {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        };
        if eligible {
            self.last_fired = Some(now);
        }
        eligible
    }

    /// Run `handler` if the throttle admits a call at `now`.
    pub fn call<R>(&mut self, now: Instant, handler: impl FnOnce() -> R) -> Option<R> {
        if self.schedule(now) {
            Some(handler())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_runs_immediately() {
        let mut throttle = Throttle::from_millis(100);
        assert!(throttle.schedule(Instant::now()));
    }

    #[test]
    fn calls_inside_interval_are_dropped() {
        let start = Instant::now();
        let mut throttle = Throttle::from_millis(100);
        let mut runs = 0;

        // Ten events 10 ms apart
        for i in 0..10 {
            let now = start + Duration::from_millis(i * 10);
            if throttle.call(now, || ()).is_some() {
                runs += 1;
            }
        }

        assert!(runs <= 2, "ran {} times", runs);
        assert_eq!(runs, 1);
    }

    #[test]
    fn next_call_after_interval_runs_without_delay() {
        let start = Instant::now();
        let mut throttle = Throttle::from_millis(16);

        assert!(throttle.schedule(start));
        assert!(!throttle.schedule(start + Duration::from_millis(15)));
        assert!(throttle.schedule(start + Duration::from_millis(16)));
        assert!(!throttle.schedule(start + Duration::from_millis(20)));
    }

    #[test]
    fn call_returns_handler_result() {
        let start = Instant::now();
        let mut throttle = Throttle::from_millis(100);
        assert_eq!(throttle.call(start, || 42), Some(42));
        assert_eq!(throttle.call(start, || 43), None);
    }
}
