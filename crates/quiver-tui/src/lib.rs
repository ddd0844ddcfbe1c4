//! Terminal viewer for quiver figures.
//!
//! Draws the vector diagram on a braille canvas and waits for a key to
//! close. The event loop redraws on a short poll so terminal resizes pick
//! up the new geometry.

mod canvas;
mod view;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use quiver::Figure;
use quiver_scene::Scene;
use ratatui::DefaultTerminal;

/// Build the canonical figure and display it until the user closes it.
pub fn run() -> io::Result<()> {
    let scene = Figure::demo().scene();
    let mut terminal = ratatui::init();
    let result = run_loop(&mut terminal, &scene);
    ratatui::restore();
    result
}

fn run_loop(terminal: &mut DefaultTerminal, scene: &Scene) -> io::Result<()> {
    loop {
        terminal.draw(|frame| {
            view::render(frame, scene);
        })?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Only handle key press events (not release on Windows)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match (key.modifiers, key.code) {
                (KeyModifiers::NONE, KeyCode::Char('q') | KeyCode::Esc)
                | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),
                _ => {}
            }
        }
    }
}
