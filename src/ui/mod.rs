//! Ratatui front-end for the watchlist browser: the dual-pane layout
//! engine, the selection and mode state machines, the entry prompt overlay,
//! and the event loop that merges terminal input with the redraw timer.
mod app;
mod cursor;
mod events;
mod helpers;
mod layout;
mod prompt;
mod terminal;

pub use app::App;
pub use terminal::run_app;
