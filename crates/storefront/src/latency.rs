//! Simulated network latency.
//!
//! There is no real backend: every "network call" in the mock gateway and
//! the session store suspends for a fixed delay before resolving, so the
//! calling flow behaves like it would against real I/O. Delays are not
//! cancellable.

use std::time::Duration;

/// A fixed artificial delay standing in for network round trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockLatency(Duration);

impl MockLatency {
    /// Create a latency with the given delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self(delay)
    }

    /// Create a latency from milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// Zero delay, for tests and synchronous callers.
    #[must_use]
    pub const fn none() -> Self {
        Self(Duration::ZERO)
    }

    /// The configured delay.
    #[must_use]
    pub const fn delay(self) -> Duration {
        self.0
    }

    /// Suspend for the configured delay.
    pub async fn simulate(self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_simulate_sleeps_for_configured_delay() {
        let latency = MockLatency::from_millis(800);
        let before = tokio::time::Instant::now();
        latency.simulate().await;
        assert_eq!(before.elapsed(), Duration::from_millis(800));
    }

    #[tokio::test(start_paused = true)]
    async fn test_none_resolves_immediately() {
        let before = tokio::time::Instant::now();
        MockLatency::none().simulate().await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }
}
