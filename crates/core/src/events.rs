use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    TimerStarted { remaining: u32 },
    TimerTick { remaining: u32 },
    CardFlipped { index: usize, name: String },
    TurnResolved { matched: bool, score: u32 },
    CardsHidden { first: usize, second: usize },
    GameEnded { outcome: GameOutcome },
    /// Fires after the notify delay; the front-end shows its popup on this.
    NotificationDue { outcome: GameOutcome },
    BoardReset { cards: usize },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
