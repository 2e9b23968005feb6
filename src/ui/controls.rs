//! Prev/Next buttons and the key-hint bar

use ratatui::{prelude::*, widgets::Paragraph};

use crate::models::{HitTarget, Navigator};
use crate::theme::{BG_TERTIARY, INDIGO_LIGHT, INDIGO_PRIMARY, TEXT_FAINT, TEXT_PRIMARY};
use crate::ui::helpers::display_width;
use crate::ui::hits::HitMap;
use crate::ui::ViewOptions;

pub const PREV_LABEL: &str = " ← Prev step ";
pub const NEXT_LABEL: &str = " Next step → ";

fn button_style(bg: Color, enabled: bool) -> Style {
    if enabled {
        Style::default().fg(TEXT_PRIMARY).bg(bg)
    } else {
        // Disabled buttons lose their fill
        Style::default().fg(TEXT_FAINT).add_modifier(Modifier::DIM)
    }
}

/// Prev on the left, Next on the right; each disabled at its boundary
pub fn render_controls(area: Rect, nav: &Navigator, hits: &mut HitMap, frame: &mut Frame) {
    let prev_width = display_width(PREV_LABEL) as u16;
    let next_width = display_width(NEXT_LABEL) as u16;
    let [prev_area, _, next_area] = Layout::horizontal([
        Constraint::Length(prev_width),
        Constraint::Min(0),
        Constraint::Length(next_width),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            PREV_LABEL,
            button_style(BG_TERTIARY, !nav.is_first()),
        )),
        prev_area,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            NEXT_LABEL,
            button_style(INDIGO_PRIMARY, !nav.is_last()),
        )),
        next_area,
    );

    hits.push(prev_area, HitTarget::Prev);
    hits.push(next_area, HitTarget::Next);
}

/// Bottom bar with keybinding hints
pub fn render_key_hints(area: Rect, view: ViewOptions, frame: &mut Frame) {
    let overview = if view.show_architecture {
        "a: hide overview"
    } else {
        "a: show overview"
    };
    let hints = [
        "←/→: step",
        "Tab: flow",
        "PgUp/PgDn: scroll step",
        "1-9: jump to flow",
        "Home/End: first/last",
        overview,
        "click: select",
        "q: quit",
    ];
    let text = format!(" {} ", hints.join(" | "));
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(INDIGO_LIGHT)))
            .style(Style::default().bg(BG_TERTIARY)),
        area,
    );
}
