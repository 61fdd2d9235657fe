use crate::GameOutcome;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TaskKind {
    /// Hide a mismatched pair again.
    Unflip { first: usize, second: usize },
    /// Surface the end-of-game notice.
    Notify(GameOutcome),
}

/// A delayed action tagged with the session generation it belongs to.
/// Restart bumps the generation, so a task scheduled against an old board
/// can never fire against a fresh one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduledTask {
    pub due_at_ms: u64,
    pub generation: u64,
    pub kind: TaskKind,
}

impl ScheduledTask {
    pub fn new(due_at_ms: u64, generation: u64, kind: TaskKind) -> Self {
        Self {
            due_at_ms,
            generation,
            kind,
        }
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.due_at_ms
    }

    pub fn is_stale(&self, generation: u64) -> bool {
        self.generation != generation
    }
}
