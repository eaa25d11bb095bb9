//! Interactive terminal browser for extension snapshots.
//!
//! Implements the same [`Renderer`] trait as the text renderers, but
//! takes over the terminal instead of producing output: the returned
//! string is empty after a clean interactive session and carries a
//! diagnostic when the terminal could not be initialized.

pub mod app;
mod terminal;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::event::Event;
use crossterm::event::KeyEventKind;

use hooksmith_core::Renderer;
use hooksmith_core::Snapshot;

pub use app::App;

/// How long one poll for input blocks before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Interactive snapshot browser.
#[derive(Debug, Clone, Default)]
pub struct TuiRenderer;

impl TuiRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for TuiRenderer {
    fn render(&self, snapshot: &Snapshot) -> String {
        match run(snapshot.clone()) {
            Ok(()) => String::new(),
            Err(err) => {
                tracing::debug!(error = %err, "interactive session failed");
                format!("Error: interactive terminal unavailable: {err}")
            }
        }
    }
}

fn run(snapshot: Snapshot) -> io::Result<()> {
    let mut terminal = terminal::setup_terminal()?;
    let mut app = App::new(snapshot);

    let result = event_loop(&mut terminal, &mut app);
    let restored = terminal::restore_terminal(&mut terminal);

    result.and(restored)
}

fn event_loop(terminal: &mut terminal::Tui, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        app.viewport_rows = terminal.size()?.height as usize;
        terminal.draw(|frame| ui::draw(frame, app))?;

        if crossterm::event::poll(POLL_INTERVAL)? {
            match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key.code);
                }
                // Resize is picked up on the next draw.
                _ => {}
            }
        }
    }
    Ok(())
}
