use crate::app::App;
use pairup_core::{CardState, GameOutcome};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Line, Modifier, Style, Stylize};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(9),
            Constraint::Length(8),
        ])
        .split(frame.area());

    draw_header(frame, root[0], app);
    draw_board(frame, root[1], app);
    draw_events(frame, root[2], app);

    if app.show_help {
        draw_help_popup(frame);
    }
    if let Some(outcome) = app.notice {
        draw_notice_popup(frame, outcome);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let pairs_found = app.session.deck.matched_count() / 2;
    let pairs_total = app.session.deck.len() / 2;
    let summary = format!(
        "Score {}  Time {}  Pairs {}/{}",
        app.session.score,
        app.session.timer.format_remaining(),
        pairs_found,
        pairs_total
    );
    let extra = format!("Seed {} | q quit | r restart | ? help", app.seed);
    let lines = vec![
        Line::from("Pairup".bold()),
        Line::from(summary),
        Line::from(extra),
        Line::from(format!("Status: {}", app.status_line)),
    ];
    let block = Block::default().borders(Borders::ALL).title("Overview");
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(paragraph, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cards = &app.session.deck.cards;
    if cards.is_empty() {
        return;
    }
    let cols = app.columns();
    let rows = (cards.len() + cols - 1) / cols;

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(inner);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cell_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, cols as u32); cols])
            .split(*row_area);
        for (col, cell_area) in cell_areas.iter().enumerate() {
            let index = row * cols + col;
            if index >= cards.len() {
                continue;
            }
            draw_cell(frame, *cell_area, app, index);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, index: usize) {
    let card = &app.session.deck.cards[index];
    let (label, style) = match card.state {
        CardState::FaceDown => ("▒▒▒".to_string(), Style::default().fg(Color::DarkGray)),
        CardState::FaceUp => (
            card.name().to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        CardState::Matched => (
            card.name().to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    };
    let mut block = Block::default().borders(Borders::ALL);
    if index == app.cursor {
        block = block.border_style(Style::default().fg(Color::Yellow));
    }
    let paragraph = Paragraph::new(Line::from(label))
        .style(style)
        .centered()
        .block(block);
    frame.render_widget(paragraph, area);
}

fn draw_events(frame: &mut Frame, area: Rect, app: &App) {
    let capacity = area.height.saturating_sub(2) as usize;
    let start = app.event_log.len().saturating_sub(capacity);
    let lines: Vec<Line<'_>> = app
        .event_log
        .iter()
        .skip(start)
        .map(|line| Line::from(line.clone()))
        .collect();
    let block = Block::default().borders(Borders::ALL).title("Events");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 50, frame.area());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from("arrows/hjkl move the cursor"),
        Line::from("enter/space flip the card under the cursor"),
        Line::from("flip two matching cards to keep them revealed"),
        Line::from("mismatched cards hide again after a second"),
        Line::from("find every pair before the countdown runs out"),
        Line::from("r restart | esc close popups | q quit"),
    ];
    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_notice_popup(frame: &mut Frame, outcome: GameOutcome) {
    let area = centered_rect(50, 30, frame.area());
    frame.render_widget(Clear, area);
    let (title, message, color) = match outcome {
        GameOutcome::Won => ("Victory", "You won! Every pair found.", Color::Green),
        GameOutcome::Lost => ("Time's Up", "Time's up! You lost.", Color::Red),
    };
    let lines = vec![
        Line::from(message),
        Line::from(""),
        Line::from("r play again | esc dismiss | q quit"),
    ];
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
