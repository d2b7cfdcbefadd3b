//! Clock-driven debouncing of a rapidly changing value.
//!
//! [`Debouncer`] owns no timer. The runtime feeds it the current instant via
//! [`Debouncer::poll`] (from `Event::Tick`), which keeps it deterministic and
//! testable without sleeping.
//!
//! # Example
//!
//! ```rust
//! use recipe_explorer::app::Debouncer;
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let mut debouncer = Debouncer::new(Duration::from_millis(250));
//! debouncer.set("chicken", start);
//! debouncer.set("chicken, garlic", start + Duration::from_millis(100));
//!
//! assert_eq!(debouncer.poll(start + Duration::from_millis(300)), None);
//! assert_eq!(
//!     debouncer.poll(start + Duration::from_millis(350)),
//!     Some("chicken, garlic")
//! );
//! ```

use std::time::{Duration, Instant};

/// Delays propagation of a value until it has been quiet for `delay`.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    /// Creates an idle debouncer.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Arms the debouncer with `value`, replacing any pending value.
    pub fn set(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Returns the pending value once `delay` has elapsed since it was set.
    ///
    /// A value is yielded exactly once; afterwards the debouncer is idle again.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let (_, armed_at) = self.pending.as_ref()?;
        if now.saturating_duration_since(*armed_at) < self.delay {
            return None;
        }
        self.pending.take().map(|(value, _)| value)
    }

    /// Drops the pending value, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Instant at which the pending value becomes due.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, armed_at)| *armed_at + self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(250);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn rapid_changes_propagate_only_the_last_value_once() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        let mut propagated = Vec::new();
        for (i, value) in ["c", "ch", "chi", "chicken"].into_iter().enumerate() {
            let at = start + ms(i as u64 * 100);
            debouncer.set(value, at);
            if let Some(v) = debouncer.poll(at + ms(50)) {
                propagated.push(v);
            }
        }

        let last_set = start + ms(300);
        assert_eq!(debouncer.poll(last_set + ms(249)), None);
        if let Some(v) = debouncer.poll(last_set + DELAY) {
            propagated.push(v);
        }
        assert_eq!(debouncer.poll(last_set + ms(1000)), None);

        assert_eq!(propagated, vec!["chicken"]);
    }

    #[test]
    fn deadline_tracks_latest_set() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        assert_eq!(debouncer.deadline(), None);

        debouncer.set(1, start);
        debouncer.set(2, start + ms(10));
        assert_eq!(debouncer.deadline(), Some(start + ms(260)));
        assert!(debouncer.is_pending());
    }

    #[test]
    fn cancel_drops_pending_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.set("garlic", start);
        debouncer.cancel();

        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + ms(500)), None);
    }

    #[test]
    fn poll_with_earlier_instant_does_not_fire() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.set("lemon", start + ms(100));

        assert_eq!(debouncer.poll(start), None);
        assert!(debouncer.is_pending());
    }

    #[test]
    fn zero_delay_fires_on_next_poll() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::ZERO);
        debouncer.set("", start);
        assert_eq!(debouncer.poll(start), Some(""));
    }
}
