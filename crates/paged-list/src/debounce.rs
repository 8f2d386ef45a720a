//! Debouncing
//!
//! Each keystroke arms a new ticket; only the ticket still current when the
//! window elapses is allowed to fetch. Superseded tickets are dropped, never queued.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;

/// Timer source: gloo-timers in the browser, tokio in tests
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    generation: Rc<Cell<u64>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new window, superseding every earlier ticket
    pub fn arm(&self) -> DebounceTicket {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        DebounceTicket(next)
    }

    pub fn is_current(&self, ticket: DebounceTicket) -> bool {
        self.generation.get() == ticket.0
    }

    /// Supersede any pending window without starting a new one
    pub fn cancel(&self) {
        self.arm();
    }

    /// Wait out the window; `true` if nothing superseded this call meanwhile
    pub async fn settle(&self, sleeper: &dyn Sleeper, window: Duration) -> bool {
        let ticket = self.arm();
        sleeper.sleep(window).await;
        self.is_current(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TokioSleeper;

    #[test]
    fn test_newer_ticket_supersedes() {
        let debouncer = Debouncer::new();
        let first = debouncer.arm();
        let second = debouncer.arm();
        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
        debouncer.cancel();
        assert!(!debouncer.is_current(second));
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_last_settle_fires() {
        let debouncer = Debouncer::new();
        let window = Duration::from_millis(400);
        let (first, second) = tokio::join!(debouncer.settle(&TokioSleeper, window), async {
            tokio::time::sleep(Duration::from_millis(150)).await;
            debouncer.settle(&TokioSleeper, window).await
        });
        assert!(!first);
        assert!(second);
    }
}
