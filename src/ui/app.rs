use std::mem;
use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::models::Entry;
use crate::store;

use super::cursor::Cursor;
use super::helpers::{overlay_rect, surface_error};
use super::layout::Screen;
use super::prompt::Prompt;

/// The two input modes. Exactly one is active and it alone decides where
/// key events are routed: navigation and commands while browsing, the text
/// prompt while editing. The prompt state lives inside the variant so it is
/// created on entry and discarded on exit.
enum Mode {
    Browsing,
    Editing(Prompt),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state. The event loop is the only mutator; rendering
/// reads it through `draw` and never observes a half-updated transition.
pub struct App {
    dir: PathBuf,
    catalog: Vec<Entry>,
    cursor: Cursor,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
    overlay_changed: bool,
    last_area: Rect,
}

impl App {
    pub fn new(dir: PathBuf, catalog: Vec<Entry>) -> Self {
        Self {
            dir,
            catalog,
            cursor: Cursor::new(),
            screen: Screen::new(),
            mode: Mode::Browsing,
            status: None,
            overlay_changed: false,
            last_area: Rect::default(),
        }
    }

    /// Route one key event according to the active mode. Returns `true` when
    /// the user asked to quit, which is only honored while browsing.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Browsing);
        self.mode = match mode {
            Mode::Browsing => self.handle_browsing_key(key.code, &mut exit),
            Mode::Editing(prompt) => self.handle_editing_key(key.code, prompt),
        };
        Ok(exit)
    }

    fn handle_browsing_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                *exit = true;
            }
            KeyCode::Up => self.cursor.move_up(self.catalog.len()),
            KeyCode::Down => self.cursor.move_down(self.catalog.len()),
            KeyCode::Tab => self.cursor.switch_pane(),
            KeyCode::Char('+') => {
                self.clear_status();
                return Mode::Editing(Prompt::open(self.prompt_capacity()));
            }
            _ => {}
        }
        Mode::Browsing
    }

    fn handle_editing_key(&mut self, code: KeyCode, mut prompt: Prompt) -> Mode {
        self.overlay_changed = true;
        match code {
            KeyCode::Enter => {
                let name = prompt.into_buffer().trim().to_string();
                self.submit_entry(name);
                return Mode::Browsing;
            }
            KeyCode::Esc => {
                self.set_status("Add cancelled.", StatusKind::Info);
                return Mode::Browsing;
            }
            KeyCode::Char(ch) => prompt.insert(ch),
            KeyCode::Left => prompt.move_left(),
            KeyCode::Right => prompt.move_right(),
            KeyCode::Home => prompt.home(),
            KeyCode::End => prompt.end(),
            KeyCode::Delete => prompt.delete(),
            KeyCode::Backspace => prompt.backspace(),
            _ => {}
        }
        Mode::Editing(prompt)
    }

    /// Persist the candidate name and append it to the catalog on success.
    /// A refused or failed add only aborts this operation; the message lands
    /// on the status line either way.
    fn submit_entry(&mut self, name: String) {
        if name.is_empty() {
            self.set_status("Entry name is empty; nothing added.", StatusKind::Error);
            return;
        }
        let entry = Entry::new(name);
        match store::add_entry(&self.dir, &entry) {
            Ok(()) => {
                self.set_status(
                    format!("Watchlist entry {:?} created.", entry.name),
                    StatusKind::Info,
                );
                self.catalog.push(entry);
            }
            Err(err) => {
                let err = anyhow::Error::new(err);
                self.set_status(surface_error(&err), StatusKind::Error);
            }
        }
    }

    /// Input events that fit no known variant are reported, never fatal.
    pub(crate) fn report_unknown_event(&mut self) {
        self.set_status("Ignored an unrecognized terminal event.", StatusKind::Error);
    }

    /// Whether the overlay mutated since the last paint. Taking the flag
    /// lets the driver echo prompt edits immediately without waiting for
    /// the next timer tick.
    pub(crate) fn take_overlay_repaint(&mut self) -> bool {
        mem::take(&mut self.overlay_changed)
    }

    fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    fn current_entry(&self) -> Option<&Entry> {
        self.catalog.get(self.cursor.selected())
    }

    /// Characters the prompt may hold, captured from the overlay rectangle
    /// at the moment editing starts: the inner width minus one cell so the
    /// cursor can sit past the last character.
    fn prompt_capacity(&self) -> usize {
        let inner = overlay_rect(self.last_area).width.saturating_sub(2);
        usize::from(inner.saturating_sub(1))
    }

    /// Paint the complete frame: both panes, the footer, and the prompt
    /// overlay when editing. Runs on every timer tick regardless of whether
    /// state changed since the last one.
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        let (frame_area, footer_area) = if area.height > 1 {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        self.screen
            .recompute(usize::from(frame_area.width), usize::from(frame_area.height));
        if !self.screen.fits() {
            let message = Paragraph::new("Terminal too small for the watchlist view.")
                .alignment(Alignment::Center);
            frame.render_widget(message, area);
            return;
        }

        self.screen.render_list(&self.catalog);
        let current = self.catalog.get(self.cursor.selected());
        self.screen.render_detail(current);

        // An empty catalog has no selectable row, so nothing is highlighted.
        let cursor = (!self.catalog.is_empty()).then_some(&self.cursor);
        let panes = Paragraph::new(self.screen.frame_lines(cursor));
        frame.render_widget(panes, frame_area);

        if area.height > 1 {
            self.draw_footer(frame, footer_area);
        }

        if let Mode::Editing(prompt) = &self.mode {
            draw_prompt(frame, area, prompt);
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.status {
            Some(status) => Line::from(Span::styled(status.text.clone(), status.kind.style())),
            None => Line::from(Span::styled(
                " ↑/↓ select   Tab switch pane   + add   q quit",
                Style::default().fg(Color::DarkGray),
            )),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Paint the entry prompt over the frame: a cleared, bordered rectangle with
/// the capture buffer and an inverted cell marking the text cursor.
fn draw_prompt(frame: &mut Frame, area: Rect, prompt: &Prompt) {
    let rect = overlay_rect(area);
    frame.render_widget(Clear, rect);
    let block = Block::default().borders(Borders::ALL).title("Add Movie");
    let inner = block.inner(rect);
    frame.render_widget(block, rect);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let before: String = prompt.buffer().chars().take(prompt.column()).collect();
    let at = prompt
        .buffer()
        .chars()
        .nth(prompt.column())
        .unwrap_or(' ')
        .to_string();
    let after: String = prompt.buffer().chars().skip(prompt.column() + 1).collect();
    let line = Line::from(vec![
        Span::raw(before),
        Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(after),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tempfile::TempDir;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(names: &[&str]) -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        let catalog = names.iter().map(|name| Entry::new(*name)).collect();
        let app = App::new(dir.path().to_path_buf(), catalog);
        (dir, app)
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    fn row_is_reversed(terminal: &Terminal<TestBackend>, y: u16) -> bool {
        let buffer = terminal.backend().buffer();
        buffer
            .cell((2, y))
            .unwrap()
            .style()
            .add_modifier
            .contains(Modifier::REVERSED)
    }

    #[test]
    fn one_draw_reflects_the_cumulative_effect_of_many_events() {
        let (_dir, mut app) = app_with(&["Alien", "Heat", "Memento"]);
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();

        // Several navigation events, no painting in between: key handling
        // mutates state only; the frame is produced by the single draw.
        for _ in 0..2 {
            app.handle_key(press(KeyCode::Down)).unwrap();
        }
        app.handle_key(press(KeyCode::Up)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        // Content rows start below the top border and its blank row.
        assert!(row_text(&terminal, 2).contains("Alien"));
        assert!(row_text(&terminal, 3).contains("Heat"));
        assert!(!row_is_reversed(&terminal, 2));
        assert!(row_is_reversed(&terminal, 3));
        assert!(!row_is_reversed(&terminal, 4));
    }

    #[test]
    fn plus_enters_editing_and_escape_discards_the_buffer() {
        let (_dir, mut app) = app_with(&["Alien"]);
        app.handle_key(press(KeyCode::Char('+'))).unwrap();
        assert!(matches!(app.mode, Mode::Editing(_)));

        for ch in "Heat".chars() {
            app.handle_key(press(KeyCode::Char(ch))).unwrap();
        }
        app.handle_key(press(KeyCode::Esc)).unwrap();
        assert!(matches!(app.mode, Mode::Browsing));
        assert_eq!(app.catalog.len(), 1);
    }

    #[test]
    fn submitting_a_name_persists_and_appends_the_entry() {
        let (dir, mut app) = app_with(&["Alien"]);
        // The prompt capacity comes from the drawn frame geometry.
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        app.handle_key(press(KeyCode::Char('+'))).unwrap();
        for ch in "Heat".chars() {
            app.handle_key(press(KeyCode::Char(ch))).unwrap();
        }
        app.handle_key(press(KeyCode::Enter)).unwrap();

        assert!(matches!(app.mode, Mode::Browsing));
        assert_eq!(app.catalog.len(), 2);
        assert_eq!(app.catalog[1].name, "Heat");
        assert!(dir.path().join("Heat").exists());
    }

    #[test]
    fn duplicate_submission_is_reported_and_changes_nothing() {
        let (dir, mut app) = app_with(&[]);
        store::add_entry(dir.path(), &Entry::new("Alien")).unwrap();
        app.catalog.push(Entry::new("Alien"));
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        app.handle_key(press(KeyCode::Char('+'))).unwrap();
        for ch in "Alien".chars() {
            app.handle_key(press(KeyCode::Char(ch))).unwrap();
        }
        app.handle_key(press(KeyCode::Enter)).unwrap();

        assert_eq!(app.catalog.len(), 1);
        assert!(matches!(
            app.status,
            Some(StatusMessage {
                kind: StatusKind::Error,
                ..
            })
        ));
    }

    #[test]
    fn arrows_edit_the_prompt_not_the_selection_while_editing() {
        let (_dir, mut app) = app_with(&["Alien", "Heat"]);
        app.handle_key(press(KeyCode::Char('+'))).unwrap();
        app.handle_key(press(KeyCode::Down)).unwrap();
        app.handle_key(press(KeyCode::Down)).unwrap();
        assert_eq!(app.cursor.selected(), 0);
    }

    #[test]
    fn quit_is_only_honored_while_browsing() {
        let (_dir, mut app) = app_with(&["Alien"]);
        app.handle_key(press(KeyCode::Char('+'))).unwrap();
        assert!(!app.handle_key(press(KeyCode::Esc)).unwrap());
        assert!(app.handle_key(press(KeyCode::Char('q'))).unwrap());
    }

    #[test]
    fn unmapped_keys_never_disturb_state() {
        let (_dir, mut app) = app_with(&["Alien", "Heat"]);
        let before_selected = app.cursor.selected();
        app.handle_key(press(KeyCode::F(5))).unwrap();
        app.handle_key(press(KeyCode::PageUp)).unwrap();
        assert_eq!(app.cursor.selected(), before_selected);
        assert_eq!(app.catalog.len(), 2);
        assert!(matches!(app.mode, Mode::Browsing));
    }

    #[test]
    fn empty_catalog_draws_a_placeholder_without_highlight() {
        let (_dir, mut app) = app_with(&[]);
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        let all_rows: String = (0..10).map(|y| row_text(&terminal, y)).collect();
        assert!(all_rows.contains("The watchlist is empty."));
    }

    #[test]
    fn undersized_terminal_degrades_to_a_message() {
        let (_dir, mut app) = app_with(&["Alien"]);
        let mut terminal = Terminal::new(TestBackend::new(8, 3)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let all_rows: String = (0..3).map(|y| row_text(&terminal, y)).collect();
        assert!(all_rows.contains("too small"));
    }
}
