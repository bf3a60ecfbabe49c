//! Elm-style state model for the profile screen.
//!
//! All display state lives in [`AppModel`]. Input events arrive as [`AppMsg`]
//! values; side-effects are represented as [`AppCmd`] values returned from the
//! update function.
//!
//! **Design invariant:** the model is deterministic and testable — no I/O
//! happens here.

use crossterm::event::KeyEvent;

/// Complete display state for the profile screen.
///
/// This struct is the single source of truth for the view layer. The update
/// function mutates it; the render function reads it immutably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppModel {
    /// The shared hobby-block flag. One value for the entire list — toggling
    /// any card flips it for every card. Not keyed per record.
    pub expanded: bool,
    /// Index of the first record materialized in the viewport.
    pub scroll: usize,
    /// Number of records in the roster (fixed for the screen lifetime).
    pub record_count: usize,
    /// Terminal dimensions (columns, rows).
    pub terminal_size: (u16, u16),
    /// Whether the user has requested quit.
    pub quit: bool,
    /// Monotonic count of expansion toggles this session.
    pub toggle_count: u64,
}

impl AppModel {
    /// Fresh screen state: collapsed, scrolled to the top.
    #[must_use]
    pub const fn new(record_count: usize, terminal_size: (u16, u16)) -> Self {
        Self {
            expanded: false,
            scroll: 0,
            record_count,
            terminal_size,
            quit: false,
            toggle_count: 0,
        }
    }

    /// Flip the shared expansion flag. Returns the new value.
    pub const fn toggle_expansion(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.toggle_count += 1;
        self.expanded
    }

    /// Largest valid scroll position.
    #[must_use]
    pub const fn max_scroll(&self) -> usize {
        self.record_count.saturating_sub(1)
    }

    /// Move the viewport up one record. Returns `true` if it moved.
    pub const fn scroll_up(&mut self) -> bool {
        if self.scroll > 0 {
            self.scroll -= 1;
            true
        } else {
            false
        }
    }

    /// Move the viewport down one record. Returns `true` if it moved.
    pub const fn scroll_down(&mut self) -> bool {
        if self.scroll < self.max_scroll() {
            self.scroll += 1;
            true
        } else {
            false
        }
    }

    /// Jump the viewport to the first record.
    pub const fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    /// Jump the viewport to the last record.
    pub const fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }
}

// ──────────────────── messages ────────────────────

/// Events that drive state transitions in the screen model.
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Terminal key press event.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize { cols: u16, rows: u16 },
    /// A card's expand affordance was activated. Carries no row identity:
    /// every card emits the same message.
    ToggleExpansion,
    /// Terminate the screen.
    Quit,
}

// ──────────────────── commands ────────────────────

/// Side-effects returned by the update function for the runtime to execute.
///
/// The update function never performs I/O directly, keeping the state machine
/// deterministic and testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCmd {
    /// No side-effect.
    None,
    /// Terminate the screen event loop.
    Quit,
    /// Record a UI event in the activity log.
    Log(UiEvent),
}

/// Loggable UI events emitted by state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// The shared expansion flag changed; carries the new value.
    Toggled { expanded: bool },
    /// The terminal was resized.
    Resized { cols: u16, rows: u16 },
}

// ──────────────────── tests ────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn test_model() -> AppModel {
        AppModel::new(9, (80, 24))
    }

    #[test]
    fn fresh_model_starts_collapsed_at_top() {
        let model = test_model();
        assert!(!model.expanded);
        assert_eq!(model.scroll, 0);
        assert!(!model.quit);
        assert_eq!(model.toggle_count, 0);
    }

    #[test]
    fn toggle_flips_and_counts() {
        let mut model = test_model();
        assert!(model.toggle_expansion());
        assert!(model.expanded);
        assert!(!model.toggle_expansion());
        assert!(!model.expanded);
        assert_eq!(model.toggle_count, 2);
    }

    #[test]
    fn double_toggle_restores_initial_state() {
        let mut model = test_model();
        let before = model.expanded;
        model.toggle_expansion();
        model.toggle_expansion();
        assert_eq!(model.expanded, before);
    }

    #[test]
    fn scroll_clamps_at_both_ends() {
        let mut model = AppModel::new(3, (80, 24));
        assert!(!model.scroll_up());
        assert!(model.scroll_down());
        assert!(model.scroll_down());
        assert_eq!(model.scroll, 2);
        assert!(!model.scroll_down());

        model.scroll_to_top();
        assert_eq!(model.scroll, 0);
        model.scroll_to_bottom();
        assert_eq!(model.scroll, 2);
    }

    #[test]
    fn empty_roster_has_zero_max_scroll() {
        let mut model = AppModel::new(0, (80, 24));
        assert_eq!(model.max_scroll(), 0);
        assert!(!model.scroll_down());
        assert!(!model.scroll_up());
    }

    #[test]
    fn toggle_does_not_touch_scroll() {
        let mut model = test_model();
        model.scroll = 4;
        model.toggle_expansion();
        assert_eq!(model.scroll, 4);
    }
}
