//! Domain models shared between the record store and the TUI. These types
//! stay light-weight data holders so the other layers can focus on
//! persistence and presentation logic.

use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One watchlist record. The `name` doubles as the persistence key (the
/// record's file name), which is why it may never contain a path separator.
pub struct Entry {
    /// Unique movie name; display key and file name at the same time.
    pub name: String,
    /// Free-text genre shown at the top of the detail pane.
    pub genre: String,
    /// Free-text comment rendered under the "Other Info" header.
    pub other: String,
    /// Recommender name mapped to the date of the recommendation. Keys are
    /// unique per person; the BTreeMap keeps rendering order stable across
    /// loads.
    pub recommended_by: BTreeMap<String, String>,
}

impl Entry {
    /// Create an empty record for a freshly added movie. Detail fields start
    /// blank and get filled in later, typically by editing the record file.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            genre: String::new(),
            other: String::new(),
            recommended_by: BTreeMap::new(),
        }
    }
}

impl fmt::Display for Entry {
    /// Write the movie name to any formatter so the type plays nicely with
    /// widgets that consume strings implicitly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
