use anyhow::{Context, Result};
use pairup_core::{Event, EventBus, GameOutcome, GameSession};
use pairup_data::{default_catalog_path, load_catalog, load_game_config};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Instant;

const MAX_EVENT_LOG: usize = 200;

pub struct App {
    pub seed: u64,
    pub session: GameSession,
    pub events: EventBus,
    pub cursor: usize,
    pub event_log: VecDeque<String>,
    pub status_line: String,
    pub show_help: bool,
    /// End-of-game popup, set when the delayed notice fires.
    pub notice: Option<GameOutcome>,
    pub should_quit: bool,
    started_at: Instant,
}

impl App {
    pub fn bootstrap(assets_dir: &Path, cards_path: Option<PathBuf>, seed: u64) -> Result<Self> {
        let config = load_game_config(assets_dir).context("load config")?;
        let catalog_path = cards_path.unwrap_or_else(|| default_catalog_path(assets_dir));
        let catalog = load_catalog(&catalog_path).context("load catalog")?;
        let session = GameSession::new(catalog, config, seed)
            .map_err(|err| anyhow::anyhow!(err.to_string()))
            .context("start session")?;

        let mut app = Self {
            seed,
            session,
            events: EventBus::default(),
            cursor: 0,
            event_log: VecDeque::new(),
            status_line: "flip two cards to find a pair".to_string(),
            show_help: false,
            notice: None,
            should_quit: false,
            started_at: Instant::now(),
        };
        app.push_event_line(format!("board ready: {} cards", app.session.deck.len()));
        Ok(app)
    }

    pub fn now_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    /// Board width in cells, squarish for any deck size.
    pub fn columns(&self) -> usize {
        let len = self.session.deck.len();
        let mut cols = 1;
        while cols * cols < len {
            cols += 1;
        }
        cols.max(1)
    }

    pub fn on_tick(&mut self) {
        let now = self.now_ms();
        self.session.advance(now, &mut self.events);
        self.flush_events();
    }

    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let len = self.session.deck.len();
        if len == 0 {
            return;
        }
        let cols = self.columns() as isize;
        let mut col = self.cursor as isize % cols;
        let mut row = self.cursor as isize / cols;
        col += dx;
        row += dy;
        let rows = (len as isize + cols - 1) / cols;
        col = col.clamp(0, cols - 1);
        row = row.clamp(0, rows - 1);
        let target = (row * cols + col) as usize;
        if target < len {
            self.cursor = target;
        }
    }

    pub fn select_under_cursor(&mut self) {
        let now = self.now_ms();
        if let Err(err) = self.session.select_card(self.cursor, now, &mut self.events) {
            self.status_line = err.to_string();
        }
        self.flush_events();
    }

    pub fn restart(&mut self) {
        self.session.restart(&mut self.events);
        self.notice = None;
        self.cursor = 0;
        self.status_line = "restarted".to_string();
        self.flush_events();
    }

    pub fn dismiss_popup(&mut self) {
        if self.show_help {
            self.show_help = false;
        } else {
            self.notice = None;
        }
    }

    pub fn flush_events(&mut self) {
        let drained: Vec<Event> = self.events.drain().collect();
        for event in drained {
            match event {
                Event::TimerStarted { remaining } => {
                    self.push_event_line(format!(
                        "timer started: {}",
                        pairup_core::format_seconds(remaining)
                    ));
                }
                // The header shows the countdown; ticking the log every
                // second would drown everything else.
                Event::TimerTick { .. } => {}
                Event::CardFlipped { index, name } => {
                    self.push_event_line(format!("flipped #{index}: {name}"));
                }
                Event::TurnResolved { matched, score } => {
                    let verdict = if matched { "match" } else { "no match" };
                    self.push_event_line(format!("turn {score}: {verdict}"));
                    self.status_line = format!("{verdict} (score {score})");
                }
                Event::CardsHidden { first, second } => {
                    self.push_event_line(format!("hidden #{first} and #{second}"));
                }
                Event::GameEnded { outcome } => {
                    self.push_event_line(match outcome {
                        GameOutcome::Won => "all pairs found".to_string(),
                        GameOutcome::Lost => "time expired".to_string(),
                    });
                }
                Event::NotificationDue { outcome } => {
                    self.notice = Some(outcome);
                    self.status_line = match outcome {
                        GameOutcome::Won => "you won! press r to play again".to_string(),
                        GameOutcome::Lost => "time's up! press r to try again".to_string(),
                    };
                }
                Event::BoardReset { cards } => {
                    self.push_event_line(format!("board reset: {cards} cards"));
                }
            }
        }
    }

    pub fn push_event_line(&mut self, line: String) {
        if self.event_log.len() >= MAX_EVENT_LOG {
            self.event_log.pop_front();
        }
        self.event_log.push_back(line);
    }
}
