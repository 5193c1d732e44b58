//! Elapsed-seconds round timer

use std::time::Duration;

/// Period between two timer ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Whole-second counter driven by logical time
///
/// Counts one second per full `TICK_PERIOD` of advanced time while running.
/// Restarting begins a fresh period, like re-arming an interval.
#[derive(Debug, Default, Clone)]
pub struct Timer {
    elapsed_seconds: u64,
    since_tick: Duration,
    running: bool,
}

impl Timer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)start periodic counting from the current value
    pub fn start(&mut self) {
        self.since_tick = Duration::ZERO;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.since_tick = Duration::ZERO;
    }

    /// Stop and zero the counter
    pub fn reset(&mut self) {
        self.stop();
        self.elapsed_seconds = 0;
    }

    /// Let `delta` of time pass
    pub fn advance(&mut self, delta: Duration) {
        if !self.running {
            return;
        }
        self.since_tick += delta;
        while self.since_tick >= TICK_PERIOD {
            self.since_tick -= TICK_PERIOD;
            self.elapsed_seconds += 1;
        }
    }

    #[must_use]
    pub const fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }
}
