use unicode_width::UnicodeWidthStr;

/// A single-line text field with a char-indexed cursor.
#[derive(Debug, Clone)]
pub struct InputField {
    label: &'static str,
    content: String,
    cursor: usize,
}

impl InputField {
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            content: String::new(),
            cursor: 0,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Terminal columns between the start of the field and the cursor.
    #[must_use]
    pub fn cursor_display_pos(&self) -> usize {
        self.content[..self.byte_pos()].width()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    fn byte_pos(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map_or(self.content.len(), |(i, _)| i)
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let pos = self.byte_pos();
        self.content.insert(pos, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let pos = self.byte_pos();
        self.content.remove(pos);
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let pos = self.byte_pos();
        self.content.remove(pos);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Deletes back to the previous word boundary (C-w).
    pub fn delete_word_before(&mut self) {
        let chars: Vec<char> = self.content.chars().collect();
        let end = self.cursor;
        let mut start = end;
        while start > 0 && chars[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !chars[start - 1].is_whitespace() {
            start -= 1;
        }
        if start == end {
            return;
        }

        self.cursor = start;
        let start_byte = self.byte_pos();
        let end_byte = self
            .content
            .char_indices()
            .nth(end)
            .map_or(self.content.len(), |(i, _)| i);
        self.content.replace_range(start_byte..end_byte, "");
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.cursor = self.char_count();
    }
}
