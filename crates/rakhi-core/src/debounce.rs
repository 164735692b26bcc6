//! Cancellable debounce timer.
//!
//! Each trigger arms a fresh [`DebounceTicket`] and invalidates every ticket
//! armed before it. A ticket waits out the quiet period and then reports
//! whether it is still the latest one. Closing the debouncer (or dropping
//! it) invalidates all outstanding tickets, so nothing fires after the
//! owning widget is torn down.
//!
//! ```ignore
//! let ticket = debouncer.arm();
//! spawn(async move {
//!     if ticket.wait().await {
//!         journal.write().auto_save(&mut achievements.write());
//!     }
//! });
//! ```

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Default)]
struct DebounceState {
    generation: AtomicU64,
    closed: AtomicBool,
}

/// Delay-and-coalesce timer owned by one widget.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    state: Arc<DebounceState>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: Arc::new(DebounceState::default()),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm a new ticket, superseding any pending one.
    pub fn arm(&self) -> DebounceTicket {
        let generation = self.state.generation.fetch_add(1, Ordering::SeqCst) + 1;
        DebounceTicket {
            generation,
            delay: self.delay,
            state: Arc::clone(&self.state),
        }
    }

    /// Invalidate the pending ticket without closing.
    pub fn cancel(&self) {
        self.state.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Invalidate every ticket, now and in the future.
    pub fn close(&self) {
        self.state.closed.store(true, Ordering::SeqCst);
        self.cancel();
    }

    /// Re-open after [`close`](Self::close), e.g. when a form is reopened.
    pub fn reopen(&self) {
        self.state.closed.store(false, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.state.closed.load(Ordering::SeqCst)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.close();
    }
}

/// One armed debounce period.
#[derive(Debug)]
pub struct DebounceTicket {
    generation: u64,
    delay: Duration,
    state: Arc<DebounceState>,
}

impl DebounceTicket {
    /// Whether this ticket would fire right now
    pub fn is_current(&self) -> bool {
        !self.state.closed.load(Ordering::SeqCst)
            && self.state.generation.load(Ordering::SeqCst) == self.generation
    }

    /// Sleep through the quiet period; true if the action should run.
    pub async fn wait(self) -> bool {
        tokio::time::sleep(self.delay).await;
        self.is_current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[tokio::test(start_paused = true)]
    async fn test_rapid_triggers_fire_once() {
        let debouncer = Debouncer::new(Duration::from_millis(2000));
        let fired = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..5 {
            let ticket = debouncer.arm();
            let fired = Arc::clone(&fired);
            handles.push(tokio::spawn(async move {
                if ticket.wait().await {
                    fired.fetch_add(1, Ordering::SeqCst);
                }
            }));
            tokio::time::sleep(Duration::from_millis(500)).await;
        }

        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_quiet_periods_fire_each() {
        let debouncer = Debouncer::new(Duration::from_millis(100));

        assert!(debouncer.arm().wait().await);
        assert!(debouncer.arm().wait().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_prevents_firing() {
        let debouncer = Debouncer::new(Duration::from_millis(100));
        let ticket = debouncer.arm();

        let handle = tokio::spawn(ticket.wait());
        debouncer.close();

        assert!(!handle.await.unwrap());
        assert!(debouncer.is_closed());
        assert!(!debouncer.arm().is_current());

        debouncer.reopen();
        assert!(debouncer.arm().wait().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_invalidates_tickets() {
        let debouncer = Debouncer::new(Duration::from_millis(100));
        let ticket = debouncer.arm();
        drop(debouncer);

        assert!(!ticket.wait().await);
    }

    #[test]
    fn test_cancel_keeps_debouncer_open() {
        let debouncer = Debouncer::new(Duration::from_millis(100));
        let ticket = debouncer.arm();
        debouncer.cancel();
        assert!(!ticket.is_current());
        assert!(debouncer.arm().is_current());
    }
}
