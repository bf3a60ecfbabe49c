//! Input routing for the screen runtime.

#![allow(missing_docs)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions a key press can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    /// Activate the expand affordance. Deliberately row-agnostic: the same
    /// action regardless of which card the viewport shows.
    ToggleExpansion,
    ScrollUp,
    ScrollDown,
    ScrollTop,
    ScrollBottom,
}

/// Key binding shown in the hint footer and help text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Stable binding catalog, in footer display order.
pub const HELP_BINDINGS: &[HelpBinding] = &[
    HelpBinding {
        keys: "enter/space",
        description: "expand",
    },
    HelpBinding {
        keys: "j/k",
        description: "scroll",
    },
    HelpBinding {
        keys: "q",
        description: "quit",
    },
];

/// Resolve a key event to an action. `None` means the key is unbound.
#[must_use]
pub fn resolve_key_event(key: &KeyEvent) -> Option<InputAction> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputAction::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(InputAction::Quit),
        KeyCode::Enter | KeyCode::Char(' ' | 'e') => Some(InputAction::ToggleExpansion),
        KeyCode::Up | KeyCode::Char('k') => Some(InputAction::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(InputAction::ScrollDown),
        KeyCode::Home | KeyCode::Char('g') => Some(InputAction::ScrollTop),
        KeyCode::End | KeyCode::Char('G') => Some(InputAction::ScrollBottom),
        _ => None,
    }
}

/// Render the hint footer line, e.g. `enter/space expand · j/k scroll · q quit`.
#[must_use]
pub fn hint_line() -> String {
    HELP_BINDINGS
        .iter()
        .map(|b| format!("{} {}", b.keys, b.description))
        .collect::<Vec<_>>()
        .join(" · ")
}
