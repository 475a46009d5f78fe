/// Bounded single-line text editor shown while a new entry name is typed.
/// Owns its own cursor column and capture buffer; the capacity is captured
/// from the overlay rectangle at the moment editing starts, so the buffer
/// can never outgrow the cells available to echo it.
#[derive(Debug, Clone)]
pub(crate) struct Prompt {
    buffer: String,
    column: usize,
    capacity: usize,
}

impl Prompt {
    /// Start with an empty buffer and the cursor at column 0.
    pub(crate) fn open(capacity: usize) -> Self {
        Self {
            buffer: String::new(),
            column: 0,
            capacity,
        }
    }

    pub(crate) fn buffer(&self) -> &str {
        &self.buffer
    }

    pub(crate) fn column(&self) -> usize {
        self.column
    }

    /// Insert a character at the cursor column and advance. Rejected as a
    /// no-op when the buffer is at capacity or the character is a control
    /// character.
    pub(crate) fn insert(&mut self, ch: char) {
        if ch.is_control() || self.len() >= self.capacity {
            return;
        }
        let at = self.byte_offset(self.column);
        self.buffer.insert(at, ch);
        self.column += 1;
    }

    pub(crate) fn move_left(&mut self) {
        self.column = self.column.saturating_sub(1);
    }

    pub(crate) fn move_right(&mut self) {
        self.column = (self.column + 1).min(self.len());
    }

    pub(crate) fn home(&mut self) {
        self.column = 0;
    }

    pub(crate) fn end(&mut self) {
        self.column = self.len();
    }

    /// Forward delete: remove the character at the cursor column.
    pub(crate) fn delete(&mut self) {
        if self.column < self.len() {
            let at = self.byte_offset(self.column);
            self.buffer.remove(at);
        }
    }

    /// Remove the character before the cursor column.
    pub(crate) fn backspace(&mut self) {
        if self.column > 0 {
            self.column -= 1;
            let at = self.byte_offset(self.column);
            self.buffer.remove(at);
        }
    }

    /// Yield the captured text, consuming the prompt on submit.
    pub(crate) fn into_buffer(self) -> String {
        self.buffer
    }

    fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Byte position of the given character column inside the buffer.
    fn byte_offset(&self, column: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(column)
            .map(|(idx, _)| idx)
            .unwrap_or(self.buffer.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str, capacity: usize) -> Prompt {
        let mut prompt = Prompt::open(capacity);
        for ch in text.chars() {
            prompt.insert(ch);
        }
        prompt
    }

    #[test]
    fn insert_advances_the_column() {
        let prompt = typed("Heat", 20);
        assert_eq!(prompt.buffer(), "Heat");
        assert_eq!(prompt.column(), 4);
    }

    #[test]
    fn insert_is_rejected_at_capacity() {
        let mut prompt = typed("abc", 3);
        prompt.insert('d');
        assert_eq!(prompt.buffer(), "abc");
        assert_eq!(prompt.column(), 3);
    }

    #[test]
    fn control_characters_are_rejected() {
        let mut prompt = typed("ab", 10);
        prompt.insert('\t');
        prompt.insert('\x1b');
        assert_eq!(prompt.buffer(), "ab");
    }

    #[test]
    fn insert_in_the_middle_respects_the_column() {
        let mut prompt = typed("Het", 10);
        prompt.move_left();
        prompt.insert('a');
        assert_eq!(prompt.buffer(), "Heat");
        assert_eq!(prompt.column(), 3);
    }

    #[test]
    fn cursor_movement_stays_inside_the_buffer() {
        let mut prompt = typed("ab", 10);
        prompt.move_right();
        prompt.move_right();
        assert_eq!(prompt.column(), 2);
        prompt.home();
        prompt.move_left();
        assert_eq!(prompt.column(), 0);
        prompt.end();
        assert_eq!(prompt.column(), 2);
    }

    #[test]
    fn delete_removes_forward() {
        let mut prompt = typed("Heat", 10);
        prompt.home();
        prompt.delete();
        assert_eq!(prompt.buffer(), "eat");
        assert_eq!(prompt.column(), 0);
        prompt.end();
        // Nothing to the right of the cursor at the end of the line.
        prompt.delete();
        assert_eq!(prompt.buffer(), "eat");
    }

    #[test]
    fn backspace_removes_behind_the_cursor() {
        let mut prompt = typed("Heat", 10);
        prompt.backspace();
        assert_eq!(prompt.buffer(), "Hea");
        assert_eq!(prompt.column(), 3);
        prompt.home();
        prompt.backspace();
        assert_eq!(prompt.buffer(), "Hea");
    }

    #[test]
    fn multibyte_names_edit_by_character() {
        let mut prompt = typed("Amélie", 10);
        assert_eq!(prompt.column(), 6);
        prompt.move_left();
        prompt.move_left();
        prompt.move_left();
        prompt.move_left();
        prompt.delete();
        assert_eq!(prompt.buffer(), "Amlie");
    }
}
