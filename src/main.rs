//! Binary entry point that glues the record store to the TUI: resolve the
//! watchlist directory, optionally seed a new entry from the command line or
//! a startup prompt, load the catalog, and drive the event loop until the
//! user exits.
use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use watchlist_tui::{add_entry, ensure_watchlist_dir, load_catalog, run_app, App, Entry, StoreError};

/// Dual-pane terminal browser for a personal movie watchlist.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Location of the watchlist directory (one record file per movie).
    #[arg(long, value_name = "DIR")]
    watchlist_dir: Option<PathBuf>,

    /// Movie to add before browsing; prompted for when absent.
    name: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let dir = ensure_watchlist_dir(cli.watchlist_dir)?;

    let seed = match cli.name {
        Some(name) => Some(name),
        None => prompt_for_name()?,
    };
    let mut catalog = load_catalog(&dir)?;
    if let Some(name) = seed {
        match add_entry(&dir, &Entry::new(name)) {
            Ok(()) => catalog = load_catalog(&dir)?,
            // Already on the list; just browse it.
            Err(StoreError::Duplicate(_)) => {}
            Err(err) => return Err(err.into()),
        }
    }

    let mut app = App::new(dir, catalog);
    run_app(&mut app)
}

/// Ask for a movie name on stdin before the interactive loop starts. An
/// empty line skips seeding; names with path separators are rejected the
/// same way the store would refuse them.
fn prompt_for_name() -> Result<Option<String>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("Want to add a movie to your watchlist? Give a name, or press Enter to skip.");
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line.context("failed to read from stdin")?;
        let name = line.trim();
        if name.is_empty() {
            return Ok(None);
        }
        if name.chars().any(std::path::is_separator) {
            println!("Movie names cannot contain path separators.");
            continue;
        }
        return Ok(Some(name.to_string()));
    }
}
