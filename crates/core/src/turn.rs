use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnPhase {
    Idle,
    OneSelected,
    Resolving,
}

/// Selection bookkeeping for the current turn. Invariant: `second` is only
/// set while `first` is set, and both are cleared together.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TurnState {
    pub first: Option<usize>,
    pub second: Option<usize>,
    pub locked: bool,
}

impl TurnState {
    pub fn phase(&self) -> TurnPhase {
        if self.locked {
            TurnPhase::Resolving
        } else if self.first.is_some() {
            TurnPhase::OneSelected
        } else {
            TurnPhase::Idle
        }
    }

    pub fn holds(&self, index: usize) -> bool {
        self.first == Some(index) || self.second == Some(index)
    }

    pub fn select_first(&mut self, index: usize) {
        self.first = Some(index);
        self.second = None;
    }

    pub fn select_second(&mut self, index: usize) {
        self.second = Some(index);
        self.locked = true;
    }

    /// Clears both selections and unlocks, returning to `Idle`.
    pub fn resolve(&mut self) {
        self.first = None;
        self.second = None;
        self.locked = false;
    }

    /// Permanent lock with no held cards, used once the game is over.
    pub fn lock_out(&mut self) {
        self.first = None;
        self.second = None;
        self.locked = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_follow_selections() {
        let mut turn = TurnState::default();
        assert_eq!(turn.phase(), TurnPhase::Idle);
        turn.select_first(3);
        assert_eq!(turn.phase(), TurnPhase::OneSelected);
        assert!(turn.holds(3));
        turn.select_second(5);
        assert_eq!(turn.phase(), TurnPhase::Resolving);
        assert!(turn.holds(5));
        turn.resolve();
        assert_eq!(turn.phase(), TurnPhase::Idle);
        assert!(!turn.holds(3));
    }
}
