//! Fixed-tick scheduling
//!
//! The host accumulates elapsed wall time and drains whole simulation
//! ticks from it, capped per frame so a long stall cannot queue an
//! unbounded backlog. The cancel token lets a state transition that
//! leaves Running/Countdown reliably stop ticks that are already
//! scheduled to fire.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::consts::MAX_TICKS_PER_FRAME;

/// Shared cancellation flag for a tick loop
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Accumulator turning elapsed wall time into whole simulation ticks
#[derive(Debug, Clone)]
pub struct FixedTicker {
    interval: Duration,
    accumulator: Duration,
    cancel: CancelToken,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulator: Duration::ZERO,
            cancel: CancelToken::new(),
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Token to hand to whatever drives this ticker
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Credit elapsed time and return the ticks now due, capped at
    /// [`MAX_TICKS_PER_FRAME`] (excess backlog is dropped). Always zero
    /// once the token is cancelled.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.cancel.is_cancelled() {
            self.accumulator = Duration::ZERO;
            return 0;
        }
        self.accumulator += elapsed;
        let mut ticks = 0;
        while self.accumulator >= self.interval && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= self.interval;
            ticks += 1;
        }
        if ticks == MAX_TICKS_PER_FRAME {
            self.accumulator = Duration::ZERO;
        }
        ticks
    }

    /// Drop any partial accumulation (call on phase transitions)
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_ticks_with_remainder() {
        let mut ticker = FixedTicker::from_millis(100);
        assert_eq!(ticker.advance(Duration::from_millis(250)), 2);
        // 50ms carried over
        assert_eq!(ticker.advance(Duration::from_millis(50)), 1);
        assert_eq!(ticker.advance(Duration::from_millis(99)), 0);
    }

    #[test]
    fn test_backlog_is_capped() {
        let mut ticker = FixedTicker::from_millis(10);
        let ticks = ticker.advance(Duration::from_secs(10));
        assert_eq!(ticks, MAX_TICKS_PER_FRAME);
        // The dropped backlog does not leak into the next frame
        assert_eq!(ticker.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_cancel_stops_pending_ticks() {
        let mut ticker = FixedTicker::from_millis(100);
        ticker.advance(Duration::from_millis(90));
        let token = ticker.cancel_token();
        token.cancel();
        // Already-accumulated time never fires after cancellation
        assert_eq!(ticker.advance(Duration::from_millis(500)), 0);
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_reset_clears_partial_time() {
        let mut ticker = FixedTicker::from_millis(100);
        ticker.advance(Duration::from_millis(90));
        ticker.reset();
        assert_eq!(ticker.advance(Duration::from_millis(20)), 0);
    }
}
