//! Keybindings and help text for the advisor TUI.

use crossterm::event::{KeyCode, KeyModifiers};

pub struct KeyMap;

impl KeyMap {
    pub fn help_text() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Tab/↓", "Next field"),
            ("S-Tab/↑", "Previous field"),
            ("Enter", "Drop typed path / submit"),
            ("Ctrl-S", "Submit"),
            ("Esc", "Quit"),
        ]
    }

    pub fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
        matches!(code, KeyCode::Esc)
            || (matches!(code, KeyCode::Char('c')) && modifiers.contains(KeyModifiers::CONTROL))
    }

    pub fn is_submit(code: KeyCode, modifiers: KeyModifiers) -> bool {
        matches!(code, KeyCode::Char('s')) && modifiers.contains(KeyModifiers::CONTROL)
    }

    pub fn is_next_field(code: KeyCode) -> bool {
        matches!(code, KeyCode::Tab | KeyCode::Down)
    }

    pub fn is_prev_field(code: KeyCode) -> bool {
        matches!(code, KeyCode::BackTab | KeyCode::Up)
    }
}
