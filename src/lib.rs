//! Core library surface for the watchlist TUI. The public modules expose an
//! intentionally small API so the `bin` target as well as potential external
//! tooling can reuse the same pieces.
pub mod models;
pub mod store;
pub mod ui;

/// Convenience re-exports for the persistence layer, typically used by
/// `main.rs` to resolve the watchlist directory and preload the catalog.
pub use store::{add_entry, ensure_watchlist_dir, load_catalog, StoreError};

/// The domain type every other layer manipulates.
pub use models::Entry;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
