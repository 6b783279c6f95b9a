//! Fixed-rate ticks on top of `requestAnimationFrame`
//!
//! The browser decides when we get called, so instead of blocking the
//! ticker counts how many whole tick intervals have elapsed.

use game_core::Clock;

/// Never run more than this many ticks for one animation frame
pub const MAX_CATCH_UP: u32 = 5;

#[derive(Debug, Clone)]
pub struct FrameTicker {
    interval_ms: f64,
    last_ms: Option<f64>,
    accumulator_ms: f64,
}

impl FrameTicker {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            interval_ms: 1000.0 / f64::from(tick_rate.max(1)),
            last_ms: None,
            accumulator_ms: 0.0,
        }
    }

    /// Number of ticks due at `now_ms` (a `performance.now()` timestamp)
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let Some(last) = self.last_ms.replace(now_ms) else {
            // First callback: run one tick straight away
            return 1;
        };

        self.accumulator_ms += (now_ms - last).max(0.0);
        let due = (self.accumulator_ms / self.interval_ms).floor();
        if due >= f64::from(MAX_CATCH_UP) {
            // Tab was hidden or the page stalled; drop the backlog
            self.accumulator_ms = 0.0;
            return MAX_CATCH_UP;
        }

        self.accumulator_ms -= due * self.interval_ms;
        due as u32
    }
}

/// Clock for hosts that pace frames themselves
#[derive(Debug, Default)]
pub struct HostPaced;

impl Clock for HostPaced {
    fn wait_for_next_tick(&mut self) {}
}
