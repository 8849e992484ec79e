//! The interactive tour — ratatui presentation layer.
//!
//! One synchronous loop: draw the current epoch, block on input with a
//! tick timeout, apply at most one navigation command, draw again. Every
//! frame is rendered from scratch out of the core view models; no widget
//! retains state between frames.

mod app;
mod components;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

use app::AppState;

pub fn run() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let mut app_state = AppState::new();
    let mut should_quit = false;

    let tick_rate = Duration::from_millis(250);
    let mut last_tick = std::time::Instant::now();

    while !should_quit {
        terminal.draw(|f| {
            ui::draw(f, &app_state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        should_quit = true;
                    }
                    KeyCode::Right
                    | KeyCode::Char('l')
                    | KeyCode::Char('n')
                    | KeyCode::Char(' ') => {
                        app_state.next_epoch();
                    }
                    KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => {
                        app_state.previous_epoch();
                    }
                    KeyCode::Home => {
                        app_state.first_epoch();
                    }
                    KeyCode::End => {
                        app_state.last_epoch();
                    }
                    _ => {}
                },
                // Nothing to update: the next draw call sees the new frame
                // area and the scatter reseeds from the new dimensions.
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = std::time::Instant::now();
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
