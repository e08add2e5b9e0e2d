//! Per-call timing of a wrapped transport

use crate::error::TransportResult;
use crate::request::Request;
use crate::response::Response;
use crate::transport::Transport;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Forwards to an inner transport and records how long each call took
///
/// Every call emits a `tracing` event with the elapsed time and bumps the
/// counters exposed by [`TimedTransport::stats`].
#[derive(Debug, Default)]
pub struct TimedTransport<T> {
    inner: T,
    calls: AtomicU64,
    failures: AtomicU64,
    total_micros: AtomicU64,
}

/// Snapshot of a [`TimedTransport`]'s counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimingStats {
    /// Completed calls, successful or not
    pub calls: u64,
    /// Calls that returned an error
    pub failures: u64,
    /// Sum of elapsed time over all calls
    pub total: Duration,
}

impl TimingStats {
    /// Mean elapsed time per call
    #[must_use]
    pub fn average(&self) -> Option<Duration> {
        if self.calls == 0 {
            return None;
        }
        let calls = u32::try_from(self.calls).unwrap_or(u32::MAX);
        Some(self.total / calls)
    }
}

impl<T> TimedTransport<T> {
    /// Wrap a transport
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            calls: AtomicU64::new(0),
            failures: AtomicU64::new(0),
            total_micros: AtomicU64::new(0),
        }
    }

    /// The wrapped transport
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Current counters
    pub fn stats(&self) -> TimingStats {
        TimingStats {
            calls: self.calls.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            total: Duration::from_micros(self.total_micros.load(Ordering::Relaxed)),
        }
    }

    fn record(&self, elapsed: Duration, failed: bool) {
        let micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.total_micros.fetch_add(micros, Ordering::Relaxed);
        if failed {
            self.failures.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl<T: Transport> Transport for TimedTransport<T> {
    fn send(&self, request: Request) -> TransportResult<Response> {
        let url = request.url().to_string();

        let start = Instant::now();
        let result = self.inner.send(request);
        let elapsed = start.elapsed();

        self.record(elapsed, result.is_err());

        match &result {
            Ok(response) => debug!(
                url = %url,
                status = response.status(),
                elapsed_ms = elapsed.as_millis(),
                "send cost time"
            ),
            Err(e) => warn!(
                url = %url,
                error = %e,
                elapsed_ms = elapsed.as_millis(),
                "send failed"
            ),
        }

        result
    }
}
