//! Minimal line-based editor for the full-screen code view.
//!
//! The buffer itself lives on the artifact view; the editor only tracks
//! the cursor and viewport and applies keystrokes to a borrowed buffer.

use crate::input_key::InputKey;

#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub cursor_row: usize,
    pub cursor_col: usize,
    pub scroll: usize,
}

impl EditorState {
    /// Apply one keystroke to `buffer`. Unhandled keys are ignored.
    pub fn apply(&mut self, key: InputKey, buffer: &mut String) {
        match key {
            InputKey::Char(c) => self.insert_char(buffer, c),
            InputKey::Enter => self.insert_char(buffer, '\n'),
            InputKey::Tab => {
                for _ in 0..4 {
                    self.insert_char(buffer, ' ');
                }
            }
            InputKey::Backspace => self.backspace(buffer),
            InputKey::Delete => self.delete(buffer),
            InputKey::Up => self.move_vertical(buffer, -1),
            InputKey::Down => self.move_vertical(buffer, 1),
            InputKey::Left => self.move_left(buffer),
            InputKey::Right => self.move_right(buffer),
            InputKey::Home => self.cursor_col = 0,
            InputKey::End => self.cursor_col = self.line_len(buffer, self.cursor_row),
            InputKey::PageUp => self.move_vertical(buffer, -20),
            InputKey::PageDown => self.move_vertical(buffer, 20),
            _ => {}
        }
    }

    /// Pull the cursor back inside the buffer after an external rewrite
    /// such as a revert.
    pub fn clamp_to(&mut self, buffer: &str) {
        let rows = buffer.lines().count().max(1);
        self.cursor_row = self.cursor_row.min(rows - 1);
        self.cursor_col = self.cursor_col.min(self.line_len(buffer, self.cursor_row));
        self.scroll = self.scroll.min(rows - 1);
    }

    fn line_len(&self, buffer: &str, row: usize) -> usize {
        buffer.lines().nth(row).map_or(0, |l| l.chars().count())
    }

    /// Byte offset of the cursor within the buffer.
    fn byte_offset(&self, buffer: &str) -> usize {
        let mut offset = 0;
        for (row, line) in buffer.split('\n').enumerate() {
            if row == self.cursor_row {
                let col = self.cursor_col.min(line.chars().count());
                return offset + line.chars().take(col).map(char::len_utf8).sum::<usize>();
            }
            offset += line.len() + 1;
        }
        buffer.len()
    }

    fn insert_char(&mut self, buffer: &mut String, c: char) {
        let at = self.byte_offset(buffer);
        buffer.insert(at, c);
        if c == '\n' {
            self.cursor_row += 1;
            self.cursor_col = 0;
        } else {
            self.cursor_col += 1;
        }
    }

    fn backspace(&mut self, buffer: &mut String) {
        let at = self.byte_offset(buffer);
        if at == 0 {
            return;
        }
        let prev = buffer[..at].chars().next_back();
        if let Some(c) = prev {
            let start = at - c.len_utf8();
            if c == '\n' {
                // Join point is the end of the previous line, measured
                // before the buffers merge.
                self.cursor_row -= 1;
                self.cursor_col = self.line_len(buffer, self.cursor_row);
                buffer.replace_range(start..at, "");
            } else {
                buffer.replace_range(start..at, "");
                self.cursor_col -= 1;
            }
        }
    }

    fn delete(&mut self, buffer: &mut String) {
        let at = self.byte_offset(buffer);
        if let Some(c) = buffer[at..].chars().next() {
            buffer.replace_range(at..at + c.len_utf8(), "");
        }
    }

    fn move_vertical(&mut self, buffer: &str, delta: i32) {
        let rows = buffer.split('\n').count();
        let row = (self.cursor_row as i32 + delta).clamp(0, rows as i32 - 1) as usize;
        self.cursor_row = row;
        self.cursor_col = self.cursor_col.min(self.line_len_split(buffer, row));
    }

    fn move_left(&mut self, buffer: &str) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.line_len_split(buffer, self.cursor_row);
        }
    }

    fn move_right(&mut self, buffer: &str) {
        if self.cursor_col < self.line_len_split(buffer, self.cursor_row) {
            self.cursor_col += 1;
        } else if self.cursor_row + 1 < buffer.split('\n').count() {
            self.cursor_row += 1;
            self.cursor_col = 0;
        }
    }

    // `lines()` swallows a trailing empty line, `split('\n')` does not;
    // movement must see that line so the cursor can reach it.
    fn line_len_split(&self, buffer: &str, row: usize) -> usize {
        buffer.split('\n').nth(row).map_or(0, |l| l.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_newline() {
        let mut editor = EditorState::default();
        let mut buf = String::new();
        for c in "hi".chars() {
            editor.apply(InputKey::Char(c), &mut buf);
        }
        editor.apply(InputKey::Enter, &mut buf);
        editor.apply(InputKey::Char('x'), &mut buf);

        assert_eq!(buf, "hi\nx");
        assert_eq!(editor.cursor_row, 1);
        assert_eq!(editor.cursor_col, 1);
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut editor = EditorState { cursor_row: 1, cursor_col: 0, scroll: 0 };
        let mut buf = "ab\ncd".to_string();
        editor.apply(InputKey::Backspace, &mut buf);

        assert_eq!(buf, "abcd");
        assert_eq!(editor.cursor_row, 0);
        assert_eq!(editor.cursor_col, 2);
    }

    #[test]
    fn test_vertical_move_clamps_column() {
        let mut editor = EditorState { cursor_row: 0, cursor_col: 5, scroll: 0 };
        let mut buf = "abcdef\nxy".to_string();
        editor.apply(InputKey::Down, &mut buf);

        assert_eq!(editor.cursor_row, 1);
        assert_eq!(editor.cursor_col, 2);
    }

    #[test]
    fn test_insert_mid_line_multibyte() {
        let mut editor = EditorState { cursor_row: 0, cursor_col: 1, scroll: 0 };
        let mut buf = "héllo".to_string();
        editor.apply(InputKey::Char('!'), &mut buf);
        assert_eq!(buf, "h!éllo");
    }

    #[test]
    fn test_clamp_after_revert() {
        let mut editor = EditorState { cursor_row: 10, cursor_col: 40, scroll: 8 };
        editor.clamp_to("one\ntwo");
        assert_eq!(editor.cursor_row, 1);
        assert_eq!(editor.cursor_col, 3);
        assert_eq!(editor.scroll, 1);
    }
}
