mod actions;
mod app;
mod input;
mod view;

use anyhow::{Context, Result};
use app::App;
use crossterm::event::{self, Event as CEvent, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, ExecutableCommand};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout, IsTerminal};
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub assets_dir: Option<PathBuf>,
    pub cards_path: Option<PathBuf>,
    pub seed: Option<u64>,
}

pub fn run(options: LaunchOptions) -> Result<()> {
    let assets_dir = options
        .assets_dir
        .unwrap_or_else(|| PathBuf::from("assets"));
    let seed = options.seed.unwrap_or_else(seed_from_clock);
    let mut app = App::bootstrap(&assets_dir, options.cards_path, seed)?;

    ensure_interactive_terminal()?;

    enable_raw_mode().map_err(|err| {
        anyhow::anyhow!(
            "failed to enable raw mode; ensure the process owns an interactive terminal: {err}"
        )
    })?;
    let mut stdout = stdout();
    stdout
        .execute(EnterAlternateScreen)
        .context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let run_result = run_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    run_result
}

pub fn run_with_args(args: &[String]) -> Result<()> {
    let options = parse_options(args);
    run(options)
}

fn parse_options(args: &[String]) -> LaunchOptions {
    let mut assets_dir = std::env::var("PAIRUP_ASSETS").ok().map(PathBuf::from);
    let mut cards_path = None;
    let mut seed = None;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--assets" | "-a" => {
                if let Some(value) = args.get(idx + 1) {
                    assets_dir = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            "--cards" | "-c" => {
                if let Some(value) = args.get(idx + 1) {
                    cards_path = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }
    LaunchOptions {
        assets_dir,
        cards_path,
        seed,
    }
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0xC0FFEE)
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Short poll so countdown ticks and delayed unflips land on time.
    let tick_rate = Duration::from_millis(100);
    while !app.should_quit {
        terminal.draw(|frame| view::draw(frame, app))?;
        if event::poll(tick_rate)? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let action = input::map_key(key);
                actions::dispatch(app, action);
                app.on_tick();
            }
        } else {
            app.on_tick();
        }
    }
    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")?;
    Ok(())
}

fn ensure_interactive_terminal() -> Result<()> {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        return Ok(());
    }
    anyhow::bail!(
        "pairup-cui requires an interactive TTY (run directly in a terminal, not a piped/headless shell)"
    );
}
