use super::App;
use crate::core::event::Key;
use crate::tui::TerminationFlag;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::io;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(30);

/// Drives draw → input → yield until quit. Must run as the root future of a `LocalSet`
/// so that suspended command handlers resume between iterations.
pub async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    termination: &TerminationFlag,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if app.should_quit() {
            tracing::info!("event loop finished");
            return Ok(());
        }
        if let Some(signal) = termination.get() {
            tracing::info!(?signal, "event loop interrupted");
            return Ok(());
        }

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    app.handle_key(Key::from(key));
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Paste(text) => app.paste_text(&text),
                _ => {}
            }
        }

        tokio::task::yield_now().await;
    }
}
