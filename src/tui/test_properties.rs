//! Property-based tests for screen reducer invariants.
//!
//! Uses `proptest` to verify that arbitrary message sequences maintain the
//! state contract: the expansion flag is a pure parity function of toggles,
//! scroll stays clamped, the roster is never touched, and the virtualization
//! window always covers the viewport without duplication.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use proptest::prelude::*;

use super::model::{AppModel, AppMsg};
use super::render::{CARD_COLLAPSED_HEIGHT, card_height, visible_window};
use super::update::update;
use crate::store::ProfileStore;

// ──────────────────── strategies ────────────────────

fn arb_key_code() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        Just(KeyCode::Enter),
        Just(KeyCode::Char(' ')),
        Just(KeyCode::Char('e')),
        Just(KeyCode::Char('j')),
        Just(KeyCode::Char('k')),
        Just(KeyCode::Char('g')),
        Just(KeyCode::Char('G')),
        Just(KeyCode::Char('x')),
        Just(KeyCode::Up),
        Just(KeyCode::Down),
        Just(KeyCode::Tab),
    ]
}

fn arb_msg() -> impl Strategy<Value = AppMsg> {
    prop_oneof![
        arb_key_code().prop_map(|code| AppMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        (10u16..=200, 5u16..=80).prop_map(|(cols, rows)| AppMsg::Resize { cols, rows }),
        Just(AppMsg::ToggleExpansion),
    ]
}

fn is_toggle(msg: &AppMsg) -> bool {
    match msg {
        AppMsg::ToggleExpansion => true,
        AppMsg::Key(key) => matches!(key.code, KeyCode::Enter | KeyCode::Char(' ' | 'e')),
        _ => false,
    }
}

// ──────────────────── properties ────────────────────

proptest! {
    /// The flag is exactly the parity of toggle activations — no other
    /// message influences it.
    #[test]
    fn expansion_is_parity_of_toggles(msgs in prop::collection::vec(arb_msg(), 0..64)) {
        let mut model = AppModel::new(9, (80, 24));
        let toggles = msgs.iter().filter(|m| is_toggle(m)).count();
        for msg in msgs {
            update(&mut model, msg);
        }
        prop_assert_eq!(model.expanded, toggles % 2 == 1);
        prop_assert_eq!(model.toggle_count, toggles as u64);
    }

    /// Scroll position never leaves the roster bounds.
    #[test]
    fn scroll_stays_clamped(msgs in prop::collection::vec(arb_msg(), 0..64)) {
        let mut model = AppModel::new(9, (80, 24));
        for msg in msgs {
            update(&mut model, msg);
            prop_assert!(model.scroll <= model.max_scroll());
        }
    }

    /// No message sequence mutates the roster.
    #[test]
    fn roster_is_immutable_under_interaction(msgs in prop::collection::vec(arb_msg(), 0..64)) {
        let before: Vec<_> = ProfileStore::all().to_vec();
        let mut model = AppModel::new(ProfileStore::len(), (80, 24));
        for msg in msgs {
            update(&mut model, msg);
        }
        prop_assert_eq!(before.as_slice(), ProfileStore::all());
    }

    /// An even number of consecutive toggles is the identity on the model.
    #[test]
    fn paired_toggles_are_identity(pairs in 0usize..16) {
        let mut model = AppModel::new(9, (80, 24));
        model.scroll = 3;
        let before = model.clone();
        for _ in 0..pairs * 2 {
            update(&mut model, AppMsg::ToggleExpansion);
        }
        prop_assert_eq!(model.expanded, before.expanded);
        prop_assert_eq!(model.scroll, before.scroll);
        prop_assert_eq!(model.quit, before.quit);
    }

    /// The window starts at the clamped scroll, never duplicates an index,
    /// and fills the viewport as far as the roster allows.
    #[test]
    fn window_is_contiguous_and_bounded(
        scroll in 0usize..32,
        viewport in 0u16..100,
        count in 0usize..32,
        expanded in any::<bool>(),
    ) {
        let rows = card_height(expanded);
        let window = visible_window(scroll, viewport, rows, count);

        prop_assert!(window.end <= count);
        if count > 0 && viewport > 0 {
            prop_assert_eq!(window.start, scroll.min(count - 1));
            prop_assert!(!window.is_empty());
            // Enough cards to cover the viewport, unless the roster runs out.
            let covered = (window.len() as u16).saturating_mul(rows);
            let needed = viewport.min((count - window.start) as u16 * rows);
            prop_assert!(covered >= needed);
        } else {
            prop_assert!(window.is_empty());
        }
    }

    /// Stepping the scroll one record at a time materializes every record,
    /// in roster order.
    #[test]
    fn scrolling_covers_roster_in_order(count in 1usize..24, viewport in 1u16..60) {
        let mut first_seen = Vec::new();
        for scroll in 0..count {
            for index in visible_window(scroll, viewport, CARD_COLLAPSED_HEIGHT, count) {
                if !first_seen.contains(&index) {
                    first_seen.push(index);
                }
            }
        }
        let expected: Vec<usize> = (0..count).collect();
        prop_assert_eq!(first_seen, expected);
    }
}
