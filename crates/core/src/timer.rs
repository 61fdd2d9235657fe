use serde::{Deserialize, Serialize};

const TICK_INTERVAL_MS: u64 = 1000;

/// Countdown clock. The session feeds it a monotonic `now_ms`; the timer
/// never reads a wall clock itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerState {
    pub initial_seconds: u32,
    pub remaining_seconds: u32,
    pub running: bool,
    next_tick_at_ms: Option<u64>,
}

impl TimerState {
    pub fn new(initial_seconds: u32) -> Self {
        Self {
            initial_seconds,
            remaining_seconds: initial_seconds,
            running: false,
            next_tick_at_ms: None,
        }
    }

    /// Starts ticking. Idempotent while running: a second call neither
    /// resets the countdown nor reschedules the next tick.
    pub fn start(&mut self, now_ms: u64) {
        if self.running {
            return;
        }
        self.running = true;
        self.next_tick_at_ms = Some(now_ms + TICK_INTERVAL_MS);
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.next_tick_at_ms = None;
    }

    pub fn reset(&mut self) {
        self.stop();
        self.remaining_seconds = self.initial_seconds;
    }

    /// Consumes at most one due tick, returning the new remaining value.
    /// Callers loop until `None` so a late poll catches up second by second.
    pub fn take_tick(&mut self, now_ms: u64) -> Option<u32> {
        if !self.running || self.remaining_seconds == 0 {
            return None;
        }
        let due = self.next_tick_at_ms?;
        if now_ms < due {
            return None;
        }
        self.remaining_seconds -= 1;
        if self.remaining_seconds == 0 {
            self.stop();
        } else {
            self.next_tick_at_ms = Some(due + TICK_INTERVAL_MS);
        }
        Some(self.remaining_seconds)
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// `minutes:seconds` with the seconds zero-padded to two digits.
    pub fn format_remaining(&self) -> String {
        format_seconds(self.remaining_seconds)
    }
}

pub fn format_seconds(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
