//! Event rate limiting
//!
//! Pure state machines over millisecond timestamps. The browser shell feeds
//! them `performance.now()` readings and timer callbacks; tests feed them
//! numbers.

/// Trailing-edge debouncer: a burst of notifications fires once, `wait_ms`
/// after the last notification of the burst.
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait_ms: u64,
    deadline: Option<u64>,
}

impl Debouncer {
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            deadline: None,
        }
    }

    /// Record an event at `now`, pushing the deadline back
    pub fn notify(&mut self, now: u64) {
        self.deadline = Some(now.saturating_add(self.wait_ms));
    }

    /// Returns true exactly once per burst, when the quiet period has elapsed
    pub fn poll(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a fire is still owed
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Milliseconds left before a pending fire is due
    pub fn remaining(&self, now: u64) -> Option<u64> {
        self.deadline.map(|deadline| deadline.saturating_sub(now))
    }

    pub fn wait_ms(&self) -> u64 {
        self.wait_ms
    }
}

/// Leading-edge throttler: admits the first event, then nothing until
/// `limit_ms` has passed.
#[derive(Debug, Clone)]
pub struct Throttler {
    limit_ms: u64,
    reopens_at: Option<u64>,
}

impl Throttler {
    pub fn new(limit_ms: u64) -> Self {
        Self {
            limit_ms,
            reopens_at: None,
        }
    }

    /// Returns true if an event at `now` should be handled
    pub fn admit(&mut self, now: u64) -> bool {
        if let Some(reopens_at) = self.reopens_at {
            if now < reopens_at {
                return false;
            }
        }
        self.reopens_at = Some(now.saturating_add(self.limit_ms));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debounce_burst_fires_once() {
        let mut debouncer = Debouncer::new(250);

        // 100 notifications spread over 0..=247 ms
        let mut fired = 0;
        for i in 0..100u64 {
            let now = i * 5 / 2;
            debouncer.notify(now);
            if debouncer.poll(now) {
                fired += 1;
            }
        }
        assert_eq!(fired, 0);
        assert!(debouncer.is_pending());

        // Quiet period not over yet
        assert!(!debouncer.poll(247 + 249));
        assert!(debouncer.poll(247 + 250));
        assert!(!debouncer.poll(247 + 251));
        assert!(!debouncer.poll(10_000));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_debounce_separate_bursts() {
        let mut debouncer = Debouncer::new(250);

        debouncer.notify(0);
        assert!(debouncer.poll(300));

        debouncer.notify(1_000);
        assert!(!debouncer.poll(1_100));
        assert!(debouncer.poll(1_250));
    }

    #[test]
    fn test_debounce_early_poll_stays_pending() {
        let mut debouncer = Debouncer::new(250);
        assert_eq!(debouncer.remaining(0), None);

        debouncer.notify(1_000);
        // A timer that fires a little early leaves the burst owed
        assert!(!debouncer.poll(1_249));
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.remaining(1_249), Some(1));
        assert_eq!(debouncer.remaining(2_000), Some(0));

        assert!(debouncer.poll(1_250));
        assert_eq!(debouncer.remaining(1_250), None);
    }

    #[test]
    fn test_debounce_poll_without_notify() {
        let mut debouncer = Debouncer::new(250);
        assert!(!debouncer.poll(0));
        assert!(!debouncer.poll(u64::MAX));
    }

    #[test]
    fn test_throttle_admits_leading_edge() {
        let mut throttler = Throttler::new(16);

        assert!(throttler.admit(0));
        assert!(!throttler.admit(1));
        assert!(!throttler.admit(15));
        assert!(throttler.admit(16));
        assert!(!throttler.admit(20));
        assert!(throttler.admit(100));
    }

    #[test]
    fn test_throttle_bounds_work_per_frame() {
        let mut throttler = Throttler::new(16);
        let admitted = (0..160u64).filter(|&t| throttler.admit(t)).count();
        assert_eq!(admitted, 10);
    }
}
