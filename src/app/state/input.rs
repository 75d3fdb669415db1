use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::TextArea;

/// Single-line editor behind the palette query.
///
/// Handles cursor movement, deletion and word motions; the palette only ever
/// sees the resulting text.
#[derive(Default)]
pub struct QueryInput<'a>(TextArea<'a>);

impl QueryInput<'_> {
    /// Applies one key. Returns whether the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let newline = matches!(key.code, KeyCode::Enter)
            || (key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('m' | 'j')));
        if newline {
            return false;
        }
        self.0.input(key)
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.0.lines().concat()
    }

    #[must_use]
    pub fn cursor_column(&self) -> usize {
        self.0.cursor().1
    }

    pub fn clear(&mut self) {
        self.0 = TextArea::default();
    }
}

impl std::fmt::Debug for QueryInput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryInput")
            .field("text", &self.text())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = QueryInput::default();
        for c in "edux".chars() {
            assert!(input.input(key(KeyCode::Char(c))));
        }
        assert!(input.input(key(KeyCode::Backspace)));
        assert_eq!(input.text(), "edu");
        assert_eq!(input.cursor_column(), 3);
    }

    #[test]
    fn test_enter_never_splits_lines() {
        let mut input = QueryInput::default();
        input.input(key(KeyCode::Char('a')));
        assert!(!input.input(key(KeyCode::Enter)));
        assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
        input.input(key(KeyCode::Char('b')));
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn test_clear() {
        let mut input = QueryInput::default();
        input.input(key(KeyCode::Char('z')));
        input.clear();
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor_column(), 0);
    }
}
