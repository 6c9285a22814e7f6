//! Cancellable timer behind the success notices
//!
//! Each `schedule` hands out a fresh token. Only the most recent token is
//! accepted, so an elapsed event from a cancelled or replaced timer is a no-op.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::card_tui::events::AppEvent;

#[derive(Debug, Default)]
pub struct DismissTimer {
    handle: Option<JoinHandle<()>>,
    token: u64,
    armed: bool,
}

impl DismissTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a timer that posts `DismissElapsed(token)` after `delay`.
    /// A timer already running is cancelled first.
    pub fn schedule(&mut self, delay: Duration, tx: UnboundedSender<AppEvent>) -> u64 {
        self.cancel();
        self.token = self.token.wrapping_add(1);
        self.armed = true;
        let token = self.token;
        debug!("Scheduling dismiss timer {} in {:?}", token, delay);
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver is gone once the app shuts down
            let _ = tx.send(AppEvent::DismissElapsed(token));
        }));
        token
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!("Cancelling dismiss timer {}", self.token);
            handle.abort();
        }
        self.armed = false;
    }

    /// True once for the token of the live timer
    pub fn accepts(&mut self, token: u64) -> bool {
        if self.armed && token == self.token {
            self.armed = false;
            self.handle = None;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.armed
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_elapsed_token_is_accepted_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = DismissTimer::new();
        let token = timer.schedule(Duration::from_millis(5), tx);
        assert!(timer.is_pending());

        let event = rx.recv().await;
        assert_eq!(event, Some(AppEvent::DismissElapsed(token)));
        assert!(timer.accepts(token));
        assert!(!timer.accepts(token));
        assert!(!timer.is_pending());
    }

    #[tokio::test]
    async fn test_cancelled_timer_never_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = DismissTimer::new();
        let token = timer.schedule(Duration::from_millis(5), tx);
        timer.cancel();
        assert!(!timer.accepts(token));

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_rescheduling_invalidates_old_token() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut timer = DismissTimer::new();
        let first = timer.schedule(Duration::from_secs(60), tx.clone());
        let second = timer.schedule(Duration::from_secs(60), tx);
        assert_ne!(first, second);
        assert!(!timer.accepts(first));
        assert!(timer.accepts(second));
    }
}
