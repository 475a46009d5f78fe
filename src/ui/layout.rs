//! Pane geometry and fixed-width text rendering. The frame is two bordered
//! panes side by side: the movie list on the left, the detail view for the
//! selected movie on the right. Everything here is derived state, rebuilt
//! from the catalog, the cursor, and the terminal size on every full paint.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::Entry;

use super::cursor::{Cursor, Pane};

/// Vertical bar drawn as the outer walls and the divider between the panes.
pub(crate) const BORDER_MARKER: char = '│';
/// Rows consumed by the frame chrome: top border plus a blank row above the
/// content, and a blank row plus bottom border below it.
const CHROME_ROWS: usize = 4;
/// Narrowest field a pane can render: the border marker, one padding column
/// on each side, and one content column.
const MIN_FIELD_WIDTH: usize = 4;

/// Derived layout state for one frame. `left_lines` and `right_lines` hold
/// exactly `content_height` rows of fixed-width text, filler rows included,
/// so assembling the frame is pure concatenation.
pub(crate) struct Screen {
    width: usize,
    height: usize,
    left_width: usize,
    right_width: usize,
    left_lines: Vec<String>,
    right_lines: Vec<String>,
}

impl Screen {
    pub(crate) fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            left_width: 0,
            right_width: 0,
            left_lines: Vec::new(),
            right_lines: Vec::new(),
        }
    }

    /// Split the terminal width so the two panes plus the divider column
    /// exactly fill it: the left pane takes `width/2 - 1` when the width is
    /// even and `(width-1)/2` when it is odd; the right pane takes the
    /// remainder.
    pub(crate) fn recompute(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.left_width = if width % 2 == 0 {
            (width / 2).saturating_sub(1)
        } else {
            (width.saturating_sub(1)) / 2
        };
        self.right_width = width.saturating_sub(self.left_width + 1);
    }

    /// Whether the terminal can hold both panes plus chrome. Below this the
    /// caller reports the problem instead of rendering.
    pub(crate) fn fits(&self) -> bool {
        self.left_width >= MIN_FIELD_WIDTH
            && self.right_width >= MIN_FIELD_WIDTH
            && self.height > CHROME_ROWS
    }

    pub(crate) fn left_width(&self) -> usize {
        self.left_width
    }

    pub(crate) fn right_width(&self) -> usize {
        self.right_width
    }

    /// Rows available for pane content once the chrome is subtracted.
    pub(crate) fn content_height(&self) -> usize {
        self.height.saturating_sub(CHROME_ROWS)
    }

    /// Build the list pane: one row per entry, then blank filler rows so the
    /// pane is always exactly `content_height` rows tall. Rows past the
    /// content height are skipped rather than rendered out of range.
    pub(crate) fn render_list(&mut self, catalog: &[Entry]) {
        let rows = self.content_height();
        self.left_lines = catalog
            .iter()
            .take(rows)
            .map(|entry| pad_list_field(&entry.name, self.left_width))
            .collect();
        while self.left_lines.len() < rows {
            self.left_lines.push(pad_list_field("", self.left_width));
        }
    }

    /// Build the detail pane for the selected entry: genre, a blank
    /// separator, the recommenders, another separator, and the free-text
    /// comment. An empty catalog renders a placeholder instead.
    pub(crate) fn render_detail(&mut self, entry: Option<&Entry>) {
        let mut lines = match entry {
            Some(entry) => {
                let mut lines = vec![
                    format!("Genre: {}", entry.genre),
                    String::new(),
                    "Recommended By".to_string(),
                ];
                for (name, date) in &entry.recommended_by {
                    lines.push(format!("  {name} on {date}"));
                }
                lines.push(String::new());
                lines.push("Other Info".to_string());
                lines.push(entry.other.clone());
                lines
            }
            None => vec![
                String::new(),
                "The watchlist is empty.".to_string(),
                String::new(),
                "Press '+' to add the first movie.".to_string(),
            ],
        };

        let rows = self.content_height();
        lines.truncate(rows);
        self.right_lines = lines
            .iter()
            .map(|line| pad_detail_field(line, self.right_width))
            .collect();
        while self.right_lines.len() < rows {
            self.right_lines.push(pad_detail_field("", self.right_width));
        }
    }

    /// Assemble the complete frame, inverting exactly the row matching the
    /// cursor's selection inside the focused pane. Passing `None` (empty
    /// catalog) leaves every row at default styling.
    pub(crate) fn frame_lines(&self, cursor: Option<&Cursor>) -> Vec<Line<'static>> {
        let divider = BORDER_MARKER.to_string();
        let mut lines = Vec::with_capacity(self.height);
        lines.push(Line::from(self.horizontal_border('┌', '┬', '┐')));
        lines.push(Line::from(self.blank_row()));

        for row in 0..self.content_height() {
            let (left_style, right_style) = match cursor {
                Some(cursor) if cursor.selected() == row => match cursor.pane() {
                    Pane::List => (reversed(), Style::default()),
                    Pane::Detail => (Style::default(), reversed()),
                },
                _ => (Style::default(), Style::default()),
            };
            lines.push(Line::from(vec![
                Span::styled(self.left_lines[row].clone(), left_style),
                Span::raw(divider.clone()),
                Span::styled(self.right_lines[row].clone(), right_style),
            ]));
        }

        lines.push(Line::from(self.blank_row()));
        lines.push(Line::from(self.horizontal_border('└', '┴', '┘')));
        lines
    }

    fn horizontal_border(&self, left: char, join: char, right: char) -> String {
        let mut row = String::with_capacity(self.width * 3);
        row.push(left);
        for _ in 1..self.left_width {
            row.push('─');
        }
        row.push(join);
        for _ in 1..self.right_width {
            row.push('─');
        }
        row.push(right);
        row
    }

    fn blank_row(&self) -> String {
        let mut row = String::with_capacity(self.width * 3);
        row.push(BORDER_MARKER);
        for _ in 1..self.left_width {
            row.push(' ');
        }
        row.push(BORDER_MARKER);
        for _ in 1..self.right_width {
            row.push(' ');
        }
        row.push(BORDER_MARKER);
        row
    }
}

fn reversed() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

/// Format one list row: the border marker, a padding space, then the text
/// left-justified in a field of `width - 3` characters, and a trailing
/// space. Overlong text is truncated to fit; the marker always survives.
pub(crate) fn pad_list_field(text: &str, width: usize) -> String {
    let field = width.saturating_sub(3);
    let mut row = String::with_capacity(width * 3);
    row.push(BORDER_MARKER);
    row.push(' ');
    let mut used = 0;
    for ch in text.chars().take(field) {
        row.push(ch);
        used += 1;
    }
    for _ in used..field {
        row.push(' ');
    }
    row.push(' ');
    row
}

/// Mirror of [`pad_list_field`] for the detail pane: padding space, the
/// text in a `width - 3` field, a space, and the border marker at the end.
/// Truncation never drops the trailing marker.
pub(crate) fn pad_detail_field(text: &str, width: usize) -> String {
    let field = width.saturating_sub(3);
    let mut row = String::with_capacity(width * 3);
    row.push(' ');
    let mut used = 0;
    for ch in text.chars().take(field) {
        row.push(ch);
        used += 1;
    }
    for _ in used..field {
        row.push(' ');
    }
    row.push(' ');
    row.push(BORDER_MARKER);
    row
}
