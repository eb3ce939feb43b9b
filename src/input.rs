/// Editable text with a cursor counted in chars, so multi-byte input
/// (Hangul, emoji) never splits a code point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        let mut input = Self::new();
        input.set(value);
        input
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn set(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_index(self.cursor);
        self.value.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.move_left_by(1);
    }

    pub fn move_left_by(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_sub(n);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn home(&mut self) {
        let (_, col) = self.cursor_row_col();
        self.cursor -= col;
    }

    pub fn end(&mut self) {
        let (row, col) = self.cursor_row_col();
        let len = self.line_lengths()[row];
        self.cursor += len - col;
    }

    pub fn move_up(&mut self) {
        let (row, col) = self.cursor_row_col();
        if row == 0 {
            return;
        }
        self.cursor = self.offset_of(row - 1, col);
    }

    pub fn move_down(&mut self) {
        let (row, col) = self.cursor_row_col();
        if row + 1 >= self.line_lengths().len() {
            return;
        }
        self.cursor = self.offset_of(row + 1, col);
    }

    /// Zero-based (line, column) of the cursor.
    pub fn cursor_row_col(&self) -> (usize, usize) {
        let before: Vec<char> = self.value.chars().take(self.cursor).collect();
        let row = before.iter().filter(|&&c| c == '\n').count();
        let col = before.iter().rev().take_while(|&&c| c != '\n').count();
        (row, col)
    }

    fn offset_of(&self, target_row: usize, col: usize) -> usize {
        let lines = self.line_lengths();
        let target_col = col.min(lines[target_row]);
        let mut offset = 0;
        for len in &lines[..target_row] {
            offset += len + 1;
        }
        offset + target_col
    }

    fn line_lengths(&self) -> Vec<usize> {
        self.value.split('\n').map(|l| l.chars().count()).collect()
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}
