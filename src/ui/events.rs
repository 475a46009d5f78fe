//! Event sources for the interactive loop. Two producers feed one consumer:
//! a worker thread that blocks on the terminal's raw input stream, and a
//! fixed-period timer that drives full repaints. The consumer alternates
//! over both with `select!`, so events are handled in the order they become
//! available and ticks can interleave between any two input events.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossbeam_channel::{select, tick, unbounded, Receiver};
use crossterm::event::{self, Event, KeyEvent};

/// Closed set of events the loop dispatches on. Raw terminal events that do
/// not fit a known variant are carried as `Unknown` so the consumer can
/// report them instead of crashing or silently losing them.
#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Unknown,
}

/// Owns the two event sources. Dropping the handler closes the channel; the
/// input worker notices on its next send and exits with the process.
pub(crate) struct EventHandler {
    input_rx: Receiver<AppEvent>,
    ticker: Receiver<std::time::Instant>,
}

impl EventHandler {
    /// Spawn the input worker and start the redraw timer.
    pub(crate) fn new(tick_rate: Duration) -> Self {
        let (input_tx, input_rx) = unbounded();
        thread::spawn(move || loop {
            let mapped = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Resize(width, height)) => AppEvent::Resize(width, height),
                Ok(_) | Err(_) => AppEvent::Unknown,
            };
            if input_tx.send(mapped).is_err() {
                break;
            }
        });

        Self {
            input_rx,
            ticker: tick(tick_rate),
        }
    }

    /// Block until either source has an item and return exactly one event.
    /// Input events arrive in decode order; ticks are never coalesced with
    /// them or with each other.
    pub(crate) fn next(&self) -> Result<AppEvent> {
        select! {
            recv(self.input_rx) -> event => {
                event.context("input worker disconnected")
            }
            recv(self.ticker) -> instant => {
                instant.context("redraw timer stopped")?;
                Ok(AppEvent::Tick)
            }
        }
    }
}
