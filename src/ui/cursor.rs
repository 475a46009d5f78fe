/// The two rectangular text regions of the frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Pane {
    List,
    Detail,
}

/// Selection state: which catalog row is highlighted and which pane has
/// focus. Movement clamps against the live catalog length on every step so
/// the index can never run past the end, even if the catalog shrank since
/// the last movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Cursor {
    selected: usize,
    pane: Pane,
}

impl Cursor {
    pub(crate) fn new() -> Self {
        Self {
            selected: 0,
            pane: Pane::List,
        }
    }

    pub(crate) fn selected(&self) -> usize {
        self.selected
    }

    pub(crate) fn pane(&self) -> Pane {
        self.pane
    }

    /// Move the selection one row up. Only applies while the list pane has
    /// focus; arrows in the detail pane are deliberate no-ops.
    pub(crate) fn move_up(&mut self, catalog_len: usize) {
        if self.pane == Pane::List {
            self.selected = self.selected.saturating_sub(1);
            self.clamp(catalog_len);
        }
    }

    /// Move the selection one row down, clamped to the last catalog row.
    pub(crate) fn move_down(&mut self, catalog_len: usize) {
        if self.pane == Pane::List {
            self.selected = self.selected.saturating_add(1);
            self.clamp(catalog_len);
        }
    }

    /// Toggle focus between the two panes. Applying it twice restores the
    /// original state.
    pub(crate) fn switch_pane(&mut self) {
        self.pane = match self.pane {
            Pane::List => Pane::Detail,
            Pane::Detail => Pane::List,
        };
    }

    /// Pin the index inside `[0, len - 1]`; an empty catalog pins it at 0.
    pub(crate) fn clamp(&mut self, catalog_len: usize) {
        self.selected = self.selected.min(catalog_len.saturating_sub(1));
    }
}
