//! Title, flow selector tabs and the selected-flow heading

use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

use crate::models::{HitTarget, Navigator};
use crate::theme::{
    BG_TERTIARY, INDIGO_PRIMARY, TEXT_FAINT, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::helpers::{display_width, truncate};
use crate::ui::hits::HitMap;

/// Gap between two tabs, in columns
const TAB_GAP: u16 = 1;

/// Placement of one tab relative to the tab area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSlot {
    pub row: u16,
    pub x: u16,
    pub width: u16,
}

/// Tab text with padding, e.g. " 🔐 Login "
fn tab_text(label: &str, max_width: u16) -> String {
    let inner = truncate(label, max_width.saturating_sub(2) as usize);
    format!(" {} ", inner)
}

/// Flow tabs wrap onto further rows when they do not fit, centering each row
pub fn layout_tabs(widths: &[u16], area_width: u16) -> Vec<TabSlot> {
    let mut rows: Vec<Vec<(usize, u16)>> = vec![Vec::new()];
    let mut used = 0u16;

    for (i, &w) in widths.iter().enumerate() {
        let w = w.min(area_width);
        let needed = if used == 0 { w } else { used + TAB_GAP + w };
        if needed > area_width && used > 0 {
            rows.push(Vec::new());
            used = w;
        } else {
            used = needed;
        }
        if let Some(row) = rows.last_mut() {
            row.push((i, w));
        }
    }

    let mut slots = vec![TabSlot { row: 0, x: 0, width: 0 }; widths.len()];
    for (row_idx, row) in rows.iter().enumerate() {
        let total: u16 = row.iter().map(|(_, w)| *w).sum::<u16>()
            + TAB_GAP * row.len().saturating_sub(1) as u16;
        let mut x = area_width.saturating_sub(total) / 2;
        for &(i, w) in row {
            slots[i] = TabSlot {
                row: row_idx as u16,
                x,
                width: w,
            };
            x += w + TAB_GAP;
        }
    }
    slots
}

/// Number of rows the tab strip needs at this width
pub fn tab_rows(nav: &Navigator, area_width: u16) -> u16 {
    let widths = tab_widths(nav, area_width);
    layout_tabs(&widths, area_width)
        .iter()
        .map(|s| s.row + 1)
        .max()
        .unwrap_or(1)
}

fn tab_widths(nav: &Navigator, area_width: u16) -> Vec<u16> {
    nav.catalog()
        .flows()
        .iter()
        .map(|f| display_width(&tab_text(&f.label(), area_width)) as u16)
        .collect()
}

/// Title and subtitle, two centered lines
pub fn render_title(area: Rect, nav: &Navigator, frame: &mut Frame) {
    let catalog = nav.catalog();
    let lines = vec![
        Line::from(Span::styled(
            catalog.title().to_string(),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            catalog.subtitle().to_string(),
            Style::default().fg(TEXT_MUTED),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// One selector per catalog flow; the selected one is highlighted
pub fn render_flow_tabs(area: Rect, nav: &Navigator, hits: &mut HitMap, frame: &mut Frame) {
    let flows = nav.catalog().flows();
    let widths = tab_widths(nav, area.width);
    let slots = layout_tabs(&widths, area.width);

    for (i, (flow, slot)) in flows.iter().zip(slots).enumerate() {
        if slot.row >= area.height {
            break;
        }
        let rect = Rect::new(area.x + slot.x, area.y + slot.row, slot.width, 1);
        let style = if i == nav.flow_index() {
            Style::default()
                .fg(TEXT_PRIMARY)
                .bg(INDIGO_PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_SECONDARY).bg(BG_TERTIARY)
        };
        let text = tab_text(&flow.label(), area.width);
        frame.render_widget(Paragraph::new(Line::from(Span::styled(text, style))), rect);
        hits.push(rect, HitTarget::Flow(i));
    }
}

/// Selected flow title on the left, "n / m" on the right
pub fn render_flow_heading(area: Rect, nav: &Navigator, frame: &mut Frame) {
    let position = format!("{} steps", nav.position_label());
    let position_width = display_width(&position) as u16;
    let [title_area, position_area] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(position_width)]).areas(area);

    let title = truncate(&nav.current_flow().label(), title_area.width as usize);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            title,
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ))),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            position,
            Style::default().fg(TEXT_FAINT),
        )))
        .alignment(Alignment::Right),
        position_area,
    );
}
