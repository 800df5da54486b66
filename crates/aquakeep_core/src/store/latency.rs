//! Simulated round-trip latency applied before every store operation.

use std::time::Duration;

/// Round trip reproduced by `Latency::simulated()`.
pub const SIMULATED_ROUND_TRIP: Duration = Duration::from_millis(300);

/// Delay policy injected into each store at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Latency {
    /// Run the operation without suspending.
    #[default]
    Immediate,
    /// Suspend for a fixed duration before running the operation.
    Fixed(Duration),
}

impl Latency {
    pub fn simulated() -> Self {
        Self::Fixed(SIMULATED_ROUND_TRIP)
    }

    /// Effective delay for one operation.
    pub fn duration(self) -> Duration {
        match self {
            Self::Immediate => Duration::ZERO,
            Self::Fixed(delay) => delay,
        }
    }

    /// Suspends the calling task for this policy's delay.
    ///
    /// Requires a Tokio runtime with the time driver enabled when the delay
    /// is non-zero.
    pub async fn pause(self) {
        let delay = self.duration();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
