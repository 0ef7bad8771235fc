//! passgauge: terminal password entropy analyzer and generator.

mod app;
mod input;
mod strength;
mod ui;

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;

use app::{App, AppConfig};

fn main() -> Result<()> {
    let terminal = ratatui::init();
    let result = run(terminal);
    ratatui::restore();
    result
}

fn run(mut terminal: DefaultTerminal) -> Result<()> {
    let mut app = App::new(AppConfig::default());

    while !app.should_quit {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key_event(key);
            }
        }

        app.tick();
    }

    Ok(())
}
