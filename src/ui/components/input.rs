//! Single-line text input state shared by the form fields and the modal.

use crossterm::event::{KeyCode, KeyEvent};

/// Buffer plus cursor for a single-line input. The cursor is a character
/// index; edits are applied at the matching byte position so multi-byte
/// input behaves correctly.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Replaces the buffer, clamping the cursor to the new length.
    pub fn sync(&mut self, value: &str) {
        if self.buffer != value {
            self.buffer = value.to_string();
            self.cursor = self.cursor.min(self.buffer.chars().count());
        }
    }

    fn byte_position(&self) -> usize {
        self.buffer.chars().take(self.cursor).map(|ch| ch.len_utf8()).sum()
    }

    /// Applies an editing key. Returns `true` when the buffer changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                let byte_pos = self.byte_position();
                self.buffer.insert(byte_pos, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let byte_pos = self.byte_position();
                    let prev_char_len = self
                        .buffer
                        .chars()
                        .nth(self.cursor - 1)
                        .map(|ch| ch.len_utf8())
                        .unwrap_or(1);
                    self.buffer.remove(byte_pos - prev_char_len);
                    self.cursor -= 1;
                    true
                } else {
                    false
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.buffer.chars().count() {
                    let byte_pos = self.byte_position();
                    self.buffer.remove(byte_pos);
                    true
                } else {
                    false
                }
            }
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                false
            }
            KeyCode::Right => {
                if self.cursor < self.buffer.chars().count() {
                    self.cursor += 1;
                }
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.buffer.chars().count();
                false
            }
            _ => false,
        }
    }

    /// Buffer with a visual cursor block inserted at the cursor position.
    pub fn display_with_cursor(&self) -> String {
        let byte_pos = self.byte_position();
        let mut display = self.buffer.clone();
        display.insert(byte_pos, '█');
        display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn type_str(input: &mut InputState, s: &str) {
        for c in s.chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut input = InputState::default();
        type_str(&mut input, "DELETE");
        assert_eq!(input.value(), "DELETE");
        assert_eq!(input.cursor(), 6);
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut input = InputState::default();
        type_str(&mut input, "abc");
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "ac");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn handles_multibyte_characters() {
        let mut input = InputState::default();
        type_str(&mut input, "héllo");
        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.value(), "éllo");
    }

    #[test]
    fn sync_clamps_cursor() {
        let mut input = InputState::default();
        type_str(&mut input, "longer text");
        input.sync("ab");
        assert!(input.cursor() <= 2);
        assert_eq!(input.value(), "ab");
    }
}
