//! Pure update function for the Elm-style profile screen.
//!
//! `update()` takes the current model and a message, mutates the model, and
//! returns a command describing any side-effects the runtime should execute.
//!
//! **Design invariant:** this module performs zero I/O. All effects are
//! described as [`AppCmd`] values.

use super::input::{self, InputAction};
use super::model::{AppCmd, AppModel, AppMsg, UiEvent};

/// Apply a message to the model and return the next command for the runtime.
///
/// This is the whole state machine of the screen. Every transition goes
/// through this function, making the screen deterministic and testable.
pub fn update(model: &mut AppModel, msg: AppMsg) -> AppCmd {
    match msg {
        AppMsg::Key(key) => match input::resolve_key_event(&key) {
            Some(action) => apply_input_action(model, action),
            None => AppCmd::None,
        },

        AppMsg::Resize { cols, rows } => {
            model.terminal_size = (cols, rows);
            AppCmd::Log(UiEvent::Resized { cols, rows })
        }

        AppMsg::ToggleExpansion => {
            let expanded = model.toggle_expansion();
            AppCmd::Log(UiEvent::Toggled { expanded })
        }

        AppMsg::Quit => {
            model.quit = true;
            AppCmd::Quit
        }
    }
}

/// Translate a resolved [`InputAction`] into model mutations and a command.
fn apply_input_action(model: &mut AppModel, action: InputAction) -> AppCmd {
    match action {
        InputAction::Quit => update(model, AppMsg::Quit),
        InputAction::ToggleExpansion => update(model, AppMsg::ToggleExpansion),
        InputAction::ScrollUp => {
            model.scroll_up();
            AppCmd::None
        }
        InputAction::ScrollDown => {
            model.scroll_down();
            AppCmd::None
        }
        InputAction::ScrollTop => {
            model.scroll_to_top();
            AppCmd::None
        }
        InputAction::ScrollBottom => {
            model.scroll_to_bottom();
            AppCmd::None
        }
    }
}

// ──────────────────── tests ────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn test_model() -> AppModel {
        AppModel::new(9, (80, 24))
    }

    fn press(code: KeyCode) -> AppMsg {
        AppMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn toggle_message_flips_flag_and_logs() {
        let mut model = test_model();
        let cmd = update(&mut model, AppMsg::ToggleExpansion);
        assert!(model.expanded);
        assert_eq!(cmd, AppCmd::Log(UiEvent::Toggled { expanded: true }));

        let cmd = update(&mut model, AppMsg::ToggleExpansion);
        assert!(!model.expanded);
        assert_eq!(cmd, AppCmd::Log(UiEvent::Toggled { expanded: false }));
    }

    #[test]
    fn toggle_key_routes_to_toggle() {
        let mut model = test_model();
        update(&mut model, press(KeyCode::Enter));
        assert!(model.expanded);
        update(&mut model, press(KeyCode::Char(' ')));
        assert!(!model.expanded);
    }

    #[test]
    fn toggle_is_row_agnostic() {
        // Same message regardless of viewport position: scrolling first must
        // not change which flag a toggle flips.
        let mut model = test_model();
        update(&mut model, press(KeyCode::Char('j')));
        update(&mut model, press(KeyCode::Char('j')));
        let scroll_before = model.scroll;

        update(&mut model, press(KeyCode::Enter));
        assert!(model.expanded);
        assert_eq!(model.scroll, scroll_before);
    }

    #[test]
    fn quit_key_sets_quit_and_returns_quit_cmd() {
        let mut model = test_model();
        let cmd = update(&mut model, press(KeyCode::Char('q')));
        assert!(model.quit);
        assert_eq!(cmd, AppCmd::Quit);
    }

    #[test]
    fn resize_updates_size_and_logs() {
        let mut model = test_model();
        let cmd = update(&mut model, AppMsg::Resize { cols: 120, rows: 40 });
        assert_eq!(model.terminal_size, (120, 40));
        assert_eq!(
            cmd,
            AppCmd::Log(UiEvent::Resized {
                cols: 120,
                rows: 40
            })
        );
    }

    #[test]
    fn unbound_key_is_a_noop() {
        let mut model = test_model();
        let before = model.clone();
        let cmd = update(&mut model, press(KeyCode::Char('x')));
        assert_eq!(cmd, AppCmd::None);
        assert_eq!(model, before);
    }

    #[test]
    fn scroll_keys_move_viewport_only() {
        let mut model = test_model();
        update(&mut model, press(KeyCode::Char('j')));
        assert_eq!(model.scroll, 1);
        assert!(!model.expanded);

        update(&mut model, press(KeyCode::Char('k')));
        assert_eq!(model.scroll, 0);

        update(&mut model, press(KeyCode::Char('G')));
        assert_eq!(model.scroll, model.max_scroll());
        update(&mut model, press(KeyCode::Char('g')));
        assert_eq!(model.scroll, 0);
    }
}
