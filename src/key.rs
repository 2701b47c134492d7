use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A keydown as the navigator sees it: two modifier flags and a key name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub ctrl: bool,
    pub shift: bool,
    pub key: String,
}

impl KeyInput {
    pub fn new(ctrl: bool, shift: bool, key: impl Into<String>) -> Self {
        Self {
            ctrl,
            shift,
            key: key.into(),
        }
    }

    /// Control+Shift+`key`
    pub fn chord(key: impl Into<String>) -> Self {
        Self::new(true, true, key)
    }
}

impl From<KeyEvent> for KeyInput {
    fn from(event: KeyEvent) -> Self {
        Self {
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
            key: key_name(event.code),
        }
    }
}

/// Browser-style name for a key code. Unnamed keys map to `"Unidentified"`.
pub fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        _ => "Unidentified".to_string(),
    }
}
