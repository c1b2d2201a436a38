/// Centralized keybindings and help text for the skill form

use career_core::SkillRating;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct KeyMap;

impl KeyMap {
    /// Get help text for all keybindings
    pub fn help_text() -> Vec<(&'static str, &'static str)> {
        vec![
            ("j/↓", "Next skill"),
            ("k/↑", "Previous skill"),
            ("l/→", "Raise rating"),
            ("h/←", "Lower rating"),
            ("0-6", "Set rating directly"),
            ("Enter", "Recommend career"),
            ("r", "Reset all to Beginner"),
            ("t", "Toggle high-contrast"),
            ("?", "Show help"),
            ("q/Esc", "Back/Quit"),
        ]
    }

    /// Check if key is quit
    pub fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
        matches!(code, KeyCode::Char('q') | KeyCode::Esc)
            || (matches!(code, KeyCode::Char('c')) && modifiers.contains(KeyModifiers::CONTROL))
    }

    pub fn is_help(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('?'))
    }

    pub fn is_down(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab)
    }

    pub fn is_up(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab)
    }

    pub fn is_raise(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('+'))
    }

    pub fn is_lower(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('-'))
    }

    /// Digit keys map straight onto the rating scale
    pub fn direct_rating(code: KeyCode) -> Option<SkillRating> {
        match code {
            KeyCode::Char(c) => c
                .to_digit(10)
                .and_then(|d| SkillRating::from_value(i64::from(d)).ok()),
            _ => None,
        }
    }

    pub fn is_submit(code: KeyCode) -> bool {
        matches!(code, KeyCode::Enter)
    }

    pub fn is_reset(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('r'))
    }

    pub fn is_toggle_theme(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('t'))
    }
}
