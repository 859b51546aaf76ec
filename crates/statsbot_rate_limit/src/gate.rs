//! Process-wide spacing of outbound calls.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument};

/// Strict FIFO throttle for outbound API calls.
///
/// Callers are admitted one at a time, each at least `min_interval` after the
/// previous one. A burst of N simultaneous callers is serialized to fire
/// `min_interval` apart rather than spread over a refill window. The gate is
/// not keyed: every lookup shares the same `last_call_at`.
///
/// The internal lock is held across the wait. Tokio's mutex queues waiters in
/// arrival order, so each queued caller resumes after its predecessor has
/// recorded its own call time and computes its wait from that.
///
/// # Example
///
/// ```rust,ignore
/// use statsbot_rate_limit::RateGate;
/// use std::time::Duration;
///
/// let gate = RateGate::new(Duration::from_secs(1));
///
/// gate.await_turn().await; // returns immediately
/// gate.await_turn().await; // returns one second later
/// ```
#[derive(Debug)]
pub struct RateGate {
    min_interval: Duration,
    last_call_at: Mutex<Option<Instant>>,
}

impl RateGate {
    /// Create a gate that has never admitted a call.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call_at: Mutex::new(None),
        }
    }

    /// Minimum spacing between admitted calls.
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Wait until an outbound call may be issued, then claim the slot.
    ///
    /// Suspends for `min_interval - (now - last_call_at)` when that is
    /// positive and returns immediately otherwise. The returned instant is the
    /// call time recorded for this caller. Never fails.
    ///
    /// Cancelling the returned future before it completes leaves
    /// `last_call_at` untouched.
    #[instrument(skip(self), fields(min_interval = ?self.min_interval))]
    pub async fn await_turn(&self) -> Instant {
        let mut last_call_at = self.last_call_at.lock().await;

        let wait = match *last_call_at {
            Some(last) => self.min_interval.saturating_sub(last.elapsed()),
            None => Duration::ZERO,
        };

        if !wait.is_zero() {
            debug!(wait = ?wait, "Waiting for rate gate");
            tokio::time::sleep(wait).await;
        }

        let now = Instant::now();
        *last_call_at = Some(now);
        debug!("Rate gate passed");
        now
    }

    /// Time recorded by the most recent admitted call, if any.
    pub async fn last_call_at(&self) -> Option<Instant> {
        *self.last_call_at.lock().await
    }
}
