use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use eta_core::SessionId;

/// Repeating timer that reports the session it was started for.
pub trait Ticker {
    fn start(&mut self, session: SessionId, events: mpsc::Sender<SessionId>) -> TickerHandle;
}

/// Ownership of one running ticker. Dropping it cancels the ticker.
#[derive(Debug)]
pub struct TickerHandle {
    cancelled: Arc<AtomicBool>,
}

impl TickerHandle {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Stops the ticker. Returns `true` only for the call that actually stopped it.
    pub fn cancel(&self) -> bool {
        !self.cancelled.swap(true, Ordering::SeqCst)
    }

    #[cfg(test)]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    fn flag(&self) -> Arc<AtomicBool> {
        self.cancelled.clone()
    }
}

impl Default for TickerHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Background thread that wakes every `interval` and forwards the session id.
#[derive(Debug, Clone)]
pub struct ThreadTicker {
    interval: Duration,
}

impl ThreadTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Ticker for ThreadTicker {
    fn start(&mut self, session: SessionId, events: mpsc::Sender<SessionId>) -> TickerHandle {
        let handle = TickerHandle::new();
        let cancelled = handle.flag();
        let interval = self.interval;
        thread::spawn(move || loop {
            thread::sleep(interval);
            if cancelled.load(Ordering::SeqCst) || events.send(session).is_err() {
                break;
            }
        });
        handle
    }
}

#[cfg(test)]
pub use manual::ManualTicker;
