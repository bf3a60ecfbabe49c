//! Screen composition: top bar, virtualized card list, hint footer.
//!
//! Rendering is a pure function of `(model, records, assets, theme)` — it
//! holds no state of its own and is re-run in full after every update.

use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::assets::{AssetResolver, ImageRes, TextRes, years_old};
use crate::store::DogRecord;

use super::input;
use super::model::AppModel;
use super::theme::Theme;

/// Rows of a collapsed card: rounded frame (2) + icon frame (5).
pub const CARD_COLLAPSED_HEIGHT: u16 = 7;
/// Rows of an expanded card: collapsed + about label + two hobby rows.
pub const CARD_EXPANDED_HEIGHT: u16 = 10;

/// Rows of the top bar.
const TOP_BAR_HEIGHT: u16 = 3;
/// Columns of the icon frame inside a card.
const ICON_FRAME_WIDTH: u16 = 9;
/// Columns reserved for the expand affordance.
const BUTTON_COL_WIDTH: u16 = 5;

/// Height of one card for the current value of the shared flag.
///
/// Every card has the same height: visibility of the hobby block is a
/// function of the single flag, never of row identity.
#[must_use]
pub const fn card_height(expanded: bool) -> u16 {
    if expanded {
        CARD_EXPANDED_HEIGHT
    } else {
        CARD_COLLAPSED_HEIGHT
    }
}

/// Which records are materialized for the current viewport.
///
/// Returns a contiguous range starting at the (clamped) scroll position and
/// covering every card that intersects the viewport, including a partially
/// visible trailing card. Records outside the range stay logical-only; the
/// range never contains an index twice.
#[must_use]
pub fn visible_window(
    scroll: usize,
    viewport_rows: u16,
    card_rows: u16,
    record_count: usize,
) -> Range<usize> {
    if record_count == 0 || viewport_rows == 0 || card_rows == 0 {
        return 0..0;
    }
    let start = scroll.min(record_count - 1);
    let fit = viewport_rows.div_ceil(card_rows);
    let end = start.saturating_add(fit as usize).min(record_count);
    start..end
}

/// Compose the full screen: top bar, card list, optional hint footer.
pub fn draw(
    frame: &mut Frame,
    model: &AppModel,
    records: &[DogRecord],
    assets: &impl AssetResolver,
    theme: &Theme,
    show_hints: bool,
) {
    let footer_rows = if show_hints { 1 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(TOP_BAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(footer_rows),
    ])
    .split(frame.area());

    draw_top_bar(frame, chunks[0], assets, theme);
    draw_list(frame, chunks[1], model, records, assets, theme);
    if show_hints {
        draw_footer(frame, chunks[2], theme);
    }
}

fn draw_top_bar(frame: &mut Frame, area: Rect, assets: &impl AssetResolver, theme: &Theme) {
    let logo = assets
        .image(ImageRes::new("img/logo"))
        .and_then(|art| art.lines.first().copied())
        .unwrap_or("");
    let title = assets.text_or_id(TextRes::new("app/name"));

    let bar = Paragraph::new(vec![
        Line::default(),
        Line::from(vec![
            Span::raw(" "),
            Span::raw(logo),
            Span::raw("  "),
            Span::styled(title, theme.name_style()),
        ]),
    ])
    .style(theme.bar_style());
    frame.render_widget(bar, area);
}

fn draw_list(
    frame: &mut Frame,
    area: Rect,
    model: &AppModel,
    records: &[DogRecord],
    assets: &impl AssetResolver,
    theme: &Theme,
) {
    let margin = theme.spacing.list_margin;
    let area = Rect {
        x: area.x.saturating_add(margin),
        width: area.width.saturating_sub(margin * 2),
        ..area
    };

    let card_rows = card_height(model.expanded);
    let window = visible_window(model.scroll, area.height, card_rows, records.len());

    for (slot, index) in window.enumerate() {
        let y = area.y + (slot as u16) * card_rows;
        let remaining = area.bottom().saturating_sub(y);
        if remaining == 0 {
            break;
        }
        let card_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: card_rows.min(remaining),
        };
        draw_card(frame, card_area, &records[index], model.expanded, assets, theme);
    }
}

fn draw_card(
    frame: &mut Frame,
    area: Rect,
    record: &DogRecord,
    expanded: bool,
    assets: &impl AssetResolver,
    theme: &Theme,
) {
    let card = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style());
    let inner = card.inner(area);
    frame.render_widget(card, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let top_rows = inner.height.min(5);
    let top = Rect {
        height: top_rows,
        ..inner
    };
    let cols = Layout::horizontal([
        Constraint::Length(ICON_FRAME_WIDTH),
        Constraint::Min(0),
        Constraint::Length(BUTTON_COL_WIDTH),
    ])
    .split(top);

    draw_icon(frame, cols[0], record, assets, theme);
    draw_information(frame, cols[1], record, assets, theme);
    draw_expand_button(frame, cols[2], theme);

    if expanded && inner.height > top_rows {
        let detail = Rect {
            y: inner.y + top_rows,
            height: inner.height - top_rows,
            ..inner
        };
        draw_hobby(frame, detail, record, assets, theme);
    }
}

/// Icon art in a fixed rounded frame — the crop every card shares.
fn draw_icon(
    frame: &mut Frame,
    area: Rect,
    record: &DogRecord,
    assets: &impl AssetResolver,
    theme: &Theme,
) {
    let icon_frame = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.accent_style());
    let inner = icon_frame.inner(area);
    frame.render_widget(icon_frame, area);

    if let Some(art) = assets.image(record.image) {
        let lines: Vec<Line> = art.lines.iter().map(|row| Line::from(*row)).collect();
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}

fn draw_information(
    frame: &mut Frame,
    area: Rect,
    record: &DogRecord,
    assets: &impl AssetResolver,
    theme: &Theme,
) {
    let pad = " ".repeat(theme.spacing.card_padding as usize);
    let name = assets.text_or_id(record.name);
    let age = years_old(assets, record.age);

    let info = Paragraph::new(vec![
        Line::default(),
        Line::from(vec![
            Span::raw(pad.clone()),
            Span::styled(name, theme.name_style()),
        ]),
        Line::from(vec![Span::raw(pad), Span::styled(age, theme.muted_style())]),
    ]);
    frame.render_widget(info, area);
}

fn draw_expand_button(frame: &mut Frame, area: Rect, theme: &Theme) {
    let button = Paragraph::new(vec![
        Line::default(),
        Line::default(),
        Line::from(Span::styled("▾", theme.accent_style())),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(button, area);
}

fn draw_hobby(
    frame: &mut Frame,
    area: Rect,
    record: &DogRecord,
    assets: &impl AssetResolver,
    theme: &Theme,
) {
    let pad = " ".repeat(theme.spacing.card_padding as usize);
    let about = assets.text_or_id(TextRes::new("app/about_label"));

    // The hobby body deliberately shows the raw handle id, not the resolved
    // string; see DESIGN.md before "fixing" this to use the resolver.
    let hobby = record.hobby.id();

    let detail = Paragraph::new(vec![
        Line::from(vec![
            Span::raw(pad.clone()),
            Span::styled(about, theme.about_style()),
        ]),
        Line::from(vec![Span::raw(pad), Span::raw(hobby)]),
    ])
    .wrap(Wrap { trim: false });
    frame.render_widget(detail, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    let footer = Paragraph::new(Line::from(Span::styled(
        format!(" {}", input::hint_line()),
        theme.muted_style(),
    )));
    frame.render_widget(footer, area);
}

// ──────────────────── tests ────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_height_depends_only_on_flag() {
        assert_eq!(card_height(false), CARD_COLLAPSED_HEIGHT);
        assert_eq!(card_height(true), CARD_EXPANDED_HEIGHT);
        assert!(card_height(true) > card_height(false));
    }

    #[test]
    fn window_starts_at_scroll_and_stays_in_bounds() {
        let w = visible_window(2, 24, CARD_COLLAPSED_HEIGHT, 9);
        assert_eq!(w.start, 2);
        assert!(w.end <= 9);
        assert!(!w.is_empty());
    }

    #[test]
    fn window_includes_partially_visible_card() {
        // 24 rows / 7-row cards = 3 full + 1 partial.
        let w = visible_window(0, 24, CARD_COLLAPSED_HEIGHT, 9);
        assert_eq!(w, 0..4);
    }

    #[test]
    fn window_clamps_overscroll() {
        let w = visible_window(100, 24, CARD_COLLAPSED_HEIGHT, 9);
        assert_eq!(w.start, 8);
        assert_eq!(w.end, 9);
    }

    #[test]
    fn window_is_empty_for_empty_roster_or_no_viewport() {
        assert_eq!(visible_window(0, 24, CARD_COLLAPSED_HEIGHT, 0), 0..0);
        assert_eq!(visible_window(0, 0, CARD_COLLAPSED_HEIGHT, 9), 0..0);
    }

    #[test]
    fn expanded_window_fits_fewer_cards() {
        let collapsed = visible_window(0, 24, card_height(false), 9);
        let expanded = visible_window(0, 24, card_height(true), 9);
        assert!(expanded.len() <= collapsed.len());
    }

    #[test]
    fn stepping_scroll_covers_every_record() {
        let count = 9;
        let mut seen = vec![false; count];
        for scroll in 0..count {
            for index in visible_window(scroll, 14, CARD_COLLAPSED_HEIGHT, count) {
                seen[index] = true;
            }
        }
        assert!(seen.iter().all(|&s| s), "some records never materialized");
    }
}
