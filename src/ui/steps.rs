//! Step card rendering functions
//!
//! Steps are drawn as a vertical accordion: the card at the cursor is
//! expanded with its description and snippet, every other card collapses to
//! a single line.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::{HitTarget, Navigator, Step, StepState};
use crate::theme::{
    accent, fade, fade_color, BG_SECONDARY, BORDER_PASSED, BORDER_SUBTLE, ROUNDED_BORDERS,
    TEXT_FAINT, TEXT_MUTED, TEXT_SECONDARY,
};
use crate::ui::helpers::{display_width, truncate, wrap_text};
use crate::ui::hits::HitMap;

/// Height of a collapsed card: border + label + border
pub const COLLAPSED_HEIGHT: u16 = 3;

/// Layer labels may contain line breaks; cards show them on one line
fn flat_label(step: &Step) -> String {
    step.layer_label.split('\n').map(str::trim).collect::<Vec<_>>().join(" ")
}

/// Inner text width of a card (borders plus one column of padding each side)
fn inner_width(card_width: u16) -> usize {
    card_width.saturating_sub(4) as usize
}

/// Lines below the label of an expanded card: description, gap, snippet
fn detail_lines(step: &Step, card_width: u16) -> (Vec<String>, Vec<String>) {
    let width = inner_width(card_width);
    let description = wrap_text(&step.description, width);
    let snippet = step
        .snippet
        .lines()
        .map(|l| truncate(l, width.saturating_sub(2)))
        .collect();
    (description, snippet)
}

/// Rows a card occupies at the given width
pub fn card_height(step: &Step, state: StepState, card_width: u16) -> u16 {
    if !state.is_expanded() {
        return COLLAPSED_HEIGHT;
    }
    let (description, snippet) = detail_lines(step, card_width);
    // borders + label + description + blank + snippet
    (2 + 1 + description.len() + 1 + snippet.len()) as u16
}

/// First and one-past-last card index to draw so that the active card is
/// visible. Cards before the active one are dropped from the top until it
/// fits; cards after it are added while space remains.
pub fn visible_window(heights: &[u16], active: usize, available: u16) -> (usize, usize) {
    if heights.is_empty() {
        return (0, 0);
    }
    let active = active.min(heights.len() - 1);

    let mut start = 0;
    let mut used: u32 = heights[..=active].iter().map(|&h| h as u32).sum();
    while used > available as u32 && start < active {
        used -= heights[start] as u32;
        start += 1;
    }

    let mut end = active + 1;
    while end < heights.len() && used + heights[end] as u32 <= available as u32 {
        used += heights[end] as u32;
        end += 1;
    }
    (start, end)
}

/// Render the step list into `area`, recording each card as a hit region.
/// `detail_scroll` shifts the detail rows of the active card when it does
/// not fit.
pub fn render_steps(
    area: Rect,
    nav: &Navigator,
    detail_scroll: u16,
    hits: &mut HitMap,
    frame: &mut Frame,
) {
    let flow = nav.current_flow();
    let heights: Vec<u16> = flow
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| card_height(step, nav.step_state(i), area.width))
        .collect();

    let (start, end) = visible_window(&heights, nav.active_step(), area.height);
    let bottom = area.y + area.height;
    let mut y = area.y;

    for i in start..end {
        if y >= bottom {
            break;
        }
        let height = heights[i].min(bottom - y);
        let card_area = Rect::new(area.x, y, area.width, height);
        let is_last = i + 1 == flow.steps.len();
        let state = nav.step_state(i);
        let overflow = render_step_card(
            card_area,
            i,
            &flow.steps[i],
            state,
            is_last,
            detail_scroll,
            frame,
        );
        if state.is_expanded() {
            hits.set_detail_overflow(overflow);
        }
        hits.push(card_area, HitTarget::Step(i));
        y += height;
    }
}

/// Keep the label row, skip `scroll` detail rows and fit the rest into
/// `rows`. A marker replaces the last row while lines remain below.
/// Returns the visible lines and the largest useful scroll offset.
fn scroll_detail(
    mut lines: Vec<Line<'static>>,
    rows: usize,
    scroll: u16,
) -> (Vec<Line<'static>>, u16) {
    if lines.len() <= rows || rows < 2 {
        return (lines, 0);
    }
    let overflow = lines.len() - rows;
    let skip = (scroll as usize).min(overflow);
    let hidden = overflow - skip;

    let detail = lines.split_off(1).into_iter().skip(skip);
    if hidden == 0 {
        lines.extend(detail);
    } else {
        lines.extend(detail.take(rows - 2));
        lines.push(Line::from(Span::styled(
            format!("↓ {} more lines (PgDn)", hidden + 1),
            Style::default().fg(TEXT_FAINT),
        )));
    }
    (lines, overflow as u16)
}

/// Render a single step card. Returns how many detail rows did not fit.
pub fn render_step_card(
    area: Rect,
    index: usize,
    step: &Step,
    state: StepState,
    is_last: bool,
    scroll: u16,
    frame: &mut Frame,
) -> u16 {
    let accent_color = accent(step.accent_color);
    let (border_color, label_color, badge_color) = match state {
        StepState::Active => (accent_color, accent_color, accent_color),
        StepState::Passed => (
            BORDER_PASSED,
            fade_color(TEXT_MUTED, 0.5),
            fade(step.accent_color, 0.5),
        ),
        StepState::Upcoming => (
            BORDER_SUBTLE,
            fade_color(TEXT_MUTED, 0.3),
            fade(step.accent_color, 0.3),
        ),
    };

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color));
    let inner = card_block.inner(area);
    frame.render_widget(card_block, area);

    let width = inner_width(area.width);
    let badge = format!("{:>2} ", index + 1);
    // Active cards reserve two columns for the "next" arrow
    let arrow = if state.is_expanded() && !is_last { " ↓" } else { "" };
    let label_room = width.saturating_sub(display_width(&badge) + display_width(arrow));
    let label = truncate(&flat_label(step), label_room);
    let padding = label_room.saturating_sub(display_width(&label));

    let mut label_style = Style::default().fg(label_color);
    if state.is_expanded() {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }

    let mut lines = vec![Line::from(vec![
        Span::styled(
            badge,
            Style::default().fg(badge_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(label, label_style),
        Span::raw(" ".repeat(padding)),
        Span::styled(arrow, Style::default().fg(TEXT_FAINT)),
    ])];

    if state.is_expanded() {
        let (description, snippet) = detail_lines(step, area.width);
        lines.extend(
            description
                .into_iter()
                .map(|l| Line::from(Span::styled(l, Style::default().fg(TEXT_MUTED)))),
        );
        lines.push(Line::raw(""));
        let code_style = Style::default().fg(TEXT_SECONDARY).bg(BG_SECONDARY);
        lines.extend(snippet.into_iter().map(|l| {
            let fill = width.saturating_sub(display_width(&l) + 1);
            Line::from(Span::styled(format!(" {}{}", l, " ".repeat(fill)), code_style))
        }));
    }

    if inner.width <= 2 || inner.height == 0 {
        return 0;
    }
    let (lines, overflow) = scroll_detail(lines, inner.height as usize, scroll);
    let text_area = Rect {
        x: inner.x + 1,
        width: inner.width - 2,
        ..inner
    };
    frame.render_widget(Paragraph::new(lines), text_area);
    overflow
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HexColor;

    fn step(description: &str, snippet: &str) -> Step {
        Step {
            layer_label: "HeaderAuthFilter\n(Ingredient Service)".to_string(),
            snippet: snippet.to_string(),
            description: description.to_string(),
            accent_color: HexColor::new(0xec, 0x48, 0x99),
        }
    }

    #[test]
    fn test_flat_label_joins_lines() {
        let s = step("", "");
        assert_eq!(flat_label(&s), "HeaderAuthFilter (Ingredient Service)");
    }

    #[test]
    fn test_card_height_collapsed() {
        let s = step("a long description that wraps", "line1\nline2\nline3");
        assert_eq!(card_height(&s, StepState::Passed, 40), COLLAPSED_HEIGHT);
        assert_eq!(card_height(&s, StepState::Upcoming, 40), COLLAPSED_HEIGHT);
    }

    #[test]
    fn test_card_height_expanded() {
        let s = step("short", "line1\nline2\nline3");
        // 2 borders + label + 1 description + blank + 3 snippet lines
        assert_eq!(card_height(&s, StepState::Active, 40), 8);
    }

    #[test]
    fn test_visible_window_everything_fits() {
        assert_eq!(visible_window(&[3, 10, 3, 3], 1, 30), (0, 4));
    }

    #[test]
    fn test_visible_window_scrolls_to_active() {
        // Active card at index 3 needs the top cards dropped
        let heights = [3, 3, 3, 10, 3];
        let (start, end) = visible_window(&heights, 3, 14);
        assert_eq!(start, 2);
        assert!(end >= 4);
        let used: u16 = heights[start..end].iter().sum();
        assert!(used <= 14);
    }

    #[test]
    fn test_visible_window_fills_below_active() {
        assert_eq!(visible_window(&[10, 3, 3, 3], 0, 16), (0, 3));
    }

    #[test]
    fn test_visible_window_active_taller_than_area() {
        assert_eq!(visible_window(&[3, 20, 3], 1, 5), (1, 2));
    }

    #[test]
    fn test_visible_window_empty() {
        assert_eq!(visible_window(&[], 0, 10), (0, 0));
    }

    fn numbered(count: usize) -> Vec<Line<'static>> {
        (0..count).map(|i| Line::raw(format!("row{i}"))).collect()
    }

    fn texts(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_scroll_detail_fits() {
        let (lines, overflow) = scroll_detail(numbered(4), 5, 3);
        assert_eq!(lines.len(), 4);
        assert_eq!(overflow, 0);
    }

    #[test]
    fn test_scroll_detail_marks_hidden_rows() {
        let (lines, overflow) = scroll_detail(numbered(10), 5, 0);
        assert_eq!(overflow, 5);
        let texts = texts(&lines);
        assert_eq!(&texts[..4], ["row0", "row1", "row2", "row3"]);
        assert_eq!(texts[4], "↓ 6 more lines (PgDn)");
    }

    #[test]
    fn test_scroll_detail_keeps_label_and_reaches_end() {
        // Offsets past the end stop at the last row
        let (lines, _) = scroll_detail(numbered(10), 5, 99);
        assert_eq!(texts(&lines), ["row0", "row6", "row7", "row8", "row9"]);
    }
}
