//! File-per-entry persistence for the watchlist. Each record lives in its
//! own TOML file inside the watchlist directory, named after the movie, so
//! the catalog stays editable with any text editor.
mod paths;
mod records;

pub use paths::ensure_watchlist_dir;
pub use records::{add_entry, load_catalog, StoreError};
