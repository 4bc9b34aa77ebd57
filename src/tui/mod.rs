//! Thin terminal adapter around the engine.
//!
//! All calculator rules live in [`crate::engine`]; this module only maps key
//! presses to [`InputEvent`]s and writes the two display lines back to the
//! screen after every one. The blocking read loop serializes input, so the
//! engine sees one event at a time.

mod keys;

pub use keys::{KeyAction, map_key};

use std::io::{self, stdout};

use anyhow::Result;
use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tracing::debug;

use crate::engine::Calculator;

const HELP_LINE: &str =
    "0-9 . type  |  + - * / operator  |  Enter =  |  Backspace delete  |  Esc clear  |  q quit";

/// Run the calculator until the user quits.
pub fn run(calculator: &mut Calculator) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = event_loop(&mut terminal, calculator);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    calculator: &mut Calculator,
) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, calculator))?;
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match map_key(key) {
                Some(KeyAction::Quit) => {
                    debug!("quit requested");
                    return Ok(());
                }
                Some(KeyAction::Input(input)) => calculator.apply(input),
                None => {}
            }
        }
    }
}

fn draw(frame: &mut ratatui::Frame, calculator: &Calculator) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let lines = calculator.display();
    let current_style = if calculator.state().is_error() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let display = Paragraph::new(vec![
        Line::from(Span::styled(
            lines.previous,
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(lines.current, current_style)),
    ])
    .alignment(Alignment::Right)
    .block(Block::default().borders(Borders::ALL).title(" deskcalc "));
    frame.render_widget(display, chunks[0]);

    let help = Paragraph::new(HELP_LINE).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);
}
