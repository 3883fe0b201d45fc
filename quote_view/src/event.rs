//! Translation of crossterm terminal events into view events.
//!
//! Keys are named the way the view expects them: printable characters by themselves
//! (`"q"`), special keys by their lowercase name (`"up"`, `"enter"`) and modified keys
//! with a prefix (`"ctrl+c"`, `"alt+x"`). Anything the view has no use for, such as
//! mouse input, focus changes or key releases, is dropped here.
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::view::ViewEvent;

pub fn translate(event: CrosstermEvent) -> Option<ViewEvent> {
    match event {
        CrosstermEvent::Key(key) => key_name(key).map(ViewEvent::Key),
        CrosstermEvent::Resize(width, height) => Some(ViewEvent::Resize { width, height }),
        _ => None,
    }
}

pub fn key_name(key: KeyEvent) -> Option<String> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let base = match key.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdown".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        _ => return None,
    };

    let mut name = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        name.push_str("ctrl+");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        name.push_str("alt+");
    }
    name.push_str(&base);
    Some(name)
}
