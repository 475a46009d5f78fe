use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::app::App;
use super::events::{AppEvent, EventHandler};

/// Period of the redraw timer. Every tick triggers one full repaint; input
/// handling between ticks only mutates state.
const TICK_RATE: Duration = Duration::from_millis(500);

/// Spin up the terminal backend, enter the event loop, and keep processing
/// until the user quits while browsing. The loop is the sole owner of all
/// mutable state; the input worker and the timer only send events in.
pub fn run_app(app: &mut App) -> Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode().context("failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal backend")?;

    let events = EventHandler::new(TICK_RATE);

    let mut run = || -> Result<()> {
        // First frame before any tick has fired, so the catalog is visible
        // immediately after startup.
        terminal
            .draw(|frame| app.draw(frame))
            .context("failed to draw frame")?;

        loop {
            // Exactly one event per iteration, in arrival order across both
            // sources; ticks and input events are never coalesced or dropped.
            match events.next()? {
                AppEvent::Tick => {
                    terminal
                        .draw(|frame| app.draw(frame))
                        .context("failed to draw frame")?;
                }
                AppEvent::Key(key) => {
                    if app.handle_key(key)? {
                        break Ok(());
                    }
                    // Prompt edits echo without waiting for the next tick.
                    // Only the overlay cells changed since the previous
                    // frame, so the diffed flush repaints just its
                    // rectangle.
                    if app.take_overlay_repaint() {
                        terminal
                            .draw(|frame| app.draw(frame))
                            .context("failed to draw overlay")?;
                    }
                }
                AppEvent::Resize(_, _) => {
                    // The next tick recomputes the layout from the new size.
                }
                AppEvent::Unknown => app.report_unknown_event(),
            }
        }
    };
    let result = run();

    cleanup_terminal(&mut terminal)?;
    result
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to restore cursor")?;
    Ok(())
}
