use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory when no watchlist
/// location is given on the command line.
const DATA_DIR_NAME: &str = ".watchlist";

/// Resolve the watchlist directory, preferring the explicit flag over the
/// default under the user's home, and create it if it does not exist yet.
pub fn ensure_watchlist_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match flag {
        Some(dir) => dir,
        None => default_watchlist_dir()?,
    };
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create watchlist directory {}", dir.display()))?;
    Ok(dir)
}

/// Absolute path of the default watchlist directory inside the user's home.
fn default_watchlist_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}
