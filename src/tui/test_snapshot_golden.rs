//! Golden-frame tests: render the screen into an in-memory backend and
//! assert on the composed text.
//!
//! These cover the observable contract of the screen — initial collapsed
//! state, uniform expansion, order preservation, exact restore after a
//! double toggle — without a real terminal.

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use super::model::{AppModel, AppMsg};
use super::render::{self, CARD_COLLAPSED_HEIGHT, CARD_EXPANDED_HEIGHT};
use super::theme::{AccessibilityProfile, Theme};
use super::update::update;
use crate::assets::{AssetResolver, StaticAssets};
use crate::store::{DogRecord, ProfileStore};

/// Render one frame and flatten the buffer into a newline-joined string.
fn render_frame(
    model: &AppModel,
    records: &[DogRecord],
    width: u16,
    height: u16,
    show_hints: bool,
) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    let theme = Theme::for_terminal(width, AccessibilityProfile::default());
    terminal
        .draw(|frame| render::draw(frame, model, records, &StaticAssets, &theme, show_hints))
        .expect("draw");

    let buffer = terminal.backend().buffer().clone();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer.cell((x, y)).map_or(" ", |cell| cell.symbol()));
        }
        out.push('\n');
    }
    out
}

fn fresh_model(size: (u16, u16)) -> AppModel {
    AppModel::new(ProfileStore::len(), size)
}

fn assert_names_in_order(frame: &str) {
    let assets = StaticAssets;
    let mut last = 0;
    for record in ProfileStore::all() {
        let name = assets.text_or_id(record.name);
        let at = frame[last..]
            .find(name)
            .unwrap_or_else(|| panic!("{name} missing or out of order"));
        last += at + name.len();
    }
}

// Tall enough for all nine collapsed cards plus bar and footer.
const FULL_HEIGHT: u16 = 70;
// Tall enough for all nine expanded cards plus bar and footer.
const FULL_EXPANDED_HEIGHT: u16 = 100;
const WIDTH: u16 = 44;

#[test]
fn initial_frame_is_fully_collapsed() {
    let model = fresh_model((WIDTH, FULL_HEIGHT));
    let frame = render_frame(&model, ProfileStore::all(), WIDTH, FULL_HEIGHT, true);

    assert!(frame.contains("Koda"));
    assert!(frame.contains("Leroy"));
    assert!(frame.contains("2 years old"));
    assert!(frame.contains("16 years old"));
    assert!(!frame.contains("About:"), "no hobby block before a toggle");
    assert!(!frame.contains("dog/hobby/"));
}

#[test]
fn top_bar_shows_logo_and_title() {
    let model = fresh_model((WIDTH, 24));
    let frame = render_frame(&model, ProfileStore::all(), WIDTH, 24, true);
    assert!(frame.contains("Woof"));
    assert!(frame.contains("ᴥ"));
}

#[test]
fn toggle_expands_every_card_at_once() {
    let mut model = fresh_model((WIDTH, FULL_EXPANDED_HEIGHT));
    update(&mut model, AppMsg::ToggleExpansion);

    let frame = render_frame(
        &model,
        ProfileStore::all(),
        WIDTH,
        FULL_EXPANDED_HEIGHT,
        true,
    );
    let about_count = frame.matches("About:").count();
    assert_eq!(
        about_count,
        ProfileStore::len(),
        "every card shows the hobby block after one toggle"
    );
}

#[test]
fn hobby_block_shows_raw_handle_id() {
    let mut model = fresh_model((WIDTH, FULL_EXPANDED_HEIGHT));
    update(&mut model, AppMsg::ToggleExpansion);

    let frame = render_frame(
        &model,
        ProfileStore::all(),
        WIDTH,
        FULL_EXPANDED_HEIGHT,
        true,
    );
    assert!(frame.contains("dog/hobby/koda"));
    assert!(
        !frame.contains("Eating treats"),
        "hobby body must stay unresolved"
    );
}

#[test]
fn double_toggle_restores_the_exact_frame() {
    let mut model = fresh_model((WIDTH, FULL_HEIGHT));
    let before = render_frame(&model, ProfileStore::all(), WIDTH, FULL_HEIGHT, true);

    update(&mut model, AppMsg::ToggleExpansion);
    update(&mut model, AppMsg::ToggleExpansion);

    let after = render_frame(&model, ProfileStore::all(), WIDTH, FULL_HEIGHT, true);
    assert_eq!(before, after);
}

#[test]
fn frames_preserve_roster_order() {
    let model = fresh_model((WIDTH, FULL_HEIGHT));
    let frame = render_frame(&model, ProfileStore::all(), WIDTH, FULL_HEIGHT, true);
    assert_names_in_order(&frame);
}

#[test]
fn expanded_frames_preserve_roster_order_too() {
    let mut model = fresh_model((WIDTH, FULL_EXPANDED_HEIGHT));
    update(&mut model, AppMsg::ToggleExpansion);
    let frame = render_frame(
        &model,
        ProfileStore::all(),
        WIDTH,
        FULL_EXPANDED_HEIGHT,
        true,
    );
    assert_names_in_order(&frame);
}

#[test]
fn scrolled_frame_starts_at_scroll_position() {
    let mut model = fresh_model((WIDTH, 24));
    model.scroll = 4;
    let frame = render_frame(&model, ProfileStore::all(), WIDTH, 24, true);

    assert!(!frame.contains("Koda"));
    assert!(frame.contains("Faye"), "record 4 leads the viewport");
}

#[test]
fn footer_hints_respect_the_flag() {
    let model = fresh_model((WIDTH, 24));
    let with = render_frame(&model, ProfileStore::all(), WIDTH, 24, true);
    let without = render_frame(&model, ProfileStore::all(), WIDTH, 24, false);

    assert!(with.contains("quit"));
    assert!(!without.contains("quit"));
}

#[test]
fn partially_visible_card_is_clipped_not_skipped() {
    // 24 rows: bar 3 + list 20 + footer 1 → two full collapsed cards and one
    // clipped card whose name row is still visible.
    let model = fresh_model((WIDTH, 24));
    let frame = render_frame(&model, ProfileStore::all(), WIDTH, 24, true);

    assert!(frame.contains("Koda"));
    assert!(frame.contains("Lola"));
    assert!(frame.contains("Frankie"));
    assert!(!frame.contains("Nox"));
}

#[test]
fn card_height_constants_stay_in_step() {
    // The expanded card adds exactly the three detail rows the renderer draws.
    assert_eq!(CARD_EXPANDED_HEIGHT - CARD_COLLAPSED_HEIGHT, 3);
}
