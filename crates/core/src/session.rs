use crate::{
    CardDescriptor, CardInstance, CardState, Deck, Event, EventBus, GameConfig, GameOutcome,
    RngState, ScheduledTask, TaskKind, TimerState, TurnState,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("catalog has {found} cards, need at least {min}")]
    CatalogTooSmall { found: usize, min: usize },
    #[error("card index {index} out of range for deck of {len}")]
    CardOutOfRange { index: usize, len: usize },
}

/// What a selection attempt did. Invalid picks (locked board, held card,
/// already-revealed card) are deliberate no-ops, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Flipped,
    Ignored,
}

/// One play-through of the board. Owns the deck, score and countdown, and
/// delegates per-turn selection bookkeeping to [`TurnState`].
///
/// The session never reads a clock: callers pass a monotonic `now_ms` into
/// every time-sensitive operation and pump [`GameSession::advance`] so the
/// countdown and delayed tasks fire.
#[derive(Debug)]
pub struct GameSession {
    pub config: GameConfig,
    pub rng: RngState,
    pub deck: Deck,
    pub turn: TurnState,
    pub score: u32,
    pub timer: TimerState,
    catalog: Vec<CardDescriptor>,
    outcome: Option<GameOutcome>,
    generation: u64,
    pending: Vec<ScheduledTask>,
}

impl GameSession {
    pub fn new(
        catalog: Vec<CardDescriptor>,
        config: GameConfig,
        seed: u64,
    ) -> Result<Self, GameError> {
        if catalog.len() < config.min_catalog_size {
            return Err(GameError::CatalogTooSmall {
                found: catalog.len(),
                min: config.min_catalog_size,
            });
        }
        let mut rng = RngState::from_seed(seed);
        let deck = Deck::build(&catalog, &mut rng);
        let timer = TimerState::new(config.timer_seconds);
        Ok(Self {
            config,
            rng,
            deck,
            turn: TurnState::default(),
            score: 0,
            timer,
            catalog,
            outcome: None,
            generation: 0,
            pending: Vec::new(),
        })
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_pending_tasks(&self) -> bool {
        !self.pending.is_empty()
    }

    /// The player picked a card. The countdown starts lazily on the first
    /// selection of a session.
    pub fn select_card(
        &mut self,
        index: usize,
        now_ms: u64,
        events: &mut EventBus,
    ) -> Result<Selection, GameError> {
        let card = match self.deck.card(index) {
            Some(card) => card,
            None => {
                return Err(GameError::CardOutOfRange {
                    index,
                    len: self.deck.len(),
                })
            }
        };
        if self.is_over() || self.turn.locked || self.turn.holds(index) || card.is_revealed() {
            return Ok(Selection::Ignored);
        }

        if !self.timer.running {
            self.timer.start(now_ms);
            events.push(Event::TimerStarted {
                remaining: self.timer.remaining_seconds,
            });
        }

        let name = card.descriptor.name.clone();
        self.deck.set_state(index, CardState::FaceUp);
        events.push(Event::CardFlipped { index, name });

        let first = match self.turn.first {
            Some(first) => first,
            None => {
                self.turn.select_first(index);
                return Ok(Selection::Flipped);
            }
        };

        self.turn.select_second(index);
        self.score += 1;
        let matched =
            self.deck.card(first).map(CardInstance::name) == self.deck.card(index).map(CardInstance::name);
        events.push(Event::TurnResolved {
            matched,
            score: self.score,
        });

        if matched {
            self.deck.set_state(first, CardState::Matched);
            self.deck.set_state(index, CardState::Matched);
            self.turn.resolve();
            if self.deck.is_cleared() {
                self.end_game(GameOutcome::Won, now_ms, events);
            }
        } else {
            self.pending.push(ScheduledTask::new(
                now_ms + self.config.mismatch_delay_ms,
                self.generation,
                TaskKind::Unflip {
                    first,
                    second: index,
                },
            ));
        }
        Ok(Selection::Flipped)
    }

    /// Pump the countdown and any due delayed tasks. Call on every poll
    /// tick; cheap when nothing is due.
    pub fn advance(&mut self, now_ms: u64, events: &mut EventBus) {
        while let Some(remaining) = self.timer.take_tick(now_ms) {
            events.push(Event::TimerTick { remaining });
            if remaining == 0 {
                self.end_game(GameOutcome::Lost, now_ms, events);
            }
        }

        let generation = self.generation;
        let mut due = Vec::new();
        self.pending.retain(|task| {
            if task.is_stale(generation) {
                return false;
            }
            if task.is_due(now_ms) {
                due.push(*task);
                return false;
            }
            true
        });
        for task in due {
            self.run_task(task.kind, events);
        }
    }

    fn run_task(&mut self, kind: TaskKind, events: &mut EventBus) {
        match kind {
            TaskKind::Unflip { first, second } => {
                self.deck.set_state(first, CardState::FaceDown);
                self.deck.set_state(second, CardState::FaceDown);
                // A lost game keeps the board locked out.
                if self.outcome.is_none() {
                    self.turn.resolve();
                }
                events.push(Event::CardsHidden { first, second });
            }
            TaskKind::Notify(outcome) => {
                events.push(Event::NotificationDue { outcome });
            }
        }
    }

    /// Terminal transition: stop the countdown, lock further selections and
    /// schedule the user-facing notice after the configured delay.
    pub fn end_game(&mut self, outcome: GameOutcome, now_ms: u64, events: &mut EventBus) {
        if self.is_over() {
            return;
        }
        self.outcome = Some(outcome);
        self.timer.stop();
        self.turn.lock_out();
        events.push(Event::GameEnded { outcome });
        self.pending.push(ScheduledTask::new(
            now_ms + self.config.notify_delay_ms,
            self.generation,
            TaskKind::Notify(outcome),
        ));
    }

    /// Fresh board, zero score, full countdown. Bumping the generation
    /// invalidates every task scheduled against the old board, so a late
    /// unflip or notice can never touch the new one. The countdown starts
    /// lazily on the first post-restart selection.
    pub fn restart(&mut self, events: &mut EventBus) {
        self.generation += 1;
        self.pending.clear();
        self.turn = TurnState::default();
        self.score = 0;
        self.outcome = None;
        self.timer.reset();
        self.deck = Deck::build(&self.catalog, &mut self.rng);
        events.push(Event::BoardReset {
            cards: self.deck.len(),
        });
    }
}
