//! Segmented progress bar, one segment per step

use ratatui::{prelude::*, widgets::Paragraph};

use crate::models::{HitTarget, Navigator, StepState};
use crate::theme::{fade, fade_color, SEGMENT_EMPTY};
use crate::ui::hits::HitMap;

/// Split `width` columns into `count` segments separated by one-column gaps.
/// Returns (x offset, width) per segment; leftover columns go to the first
/// segments so the bar spans the full width.
pub fn segment_spans(width: u16, count: usize) -> Vec<(u16, u16)> {
    if count == 0 {
        return Vec::new();
    }
    let count_u16 = count as u16;
    let gaps = count_u16.saturating_sub(1);
    let usable = width.saturating_sub(gaps);
    let base = usable / count_u16;
    let extra = usable % count_u16;

    let mut x = 0;
    (0..count_u16)
        .map(|i| {
            let w = base + u16::from(i < extra);
            let span = (x, w);
            x += w + 1;
            span
        })
        .collect()
}

/// Colour of segment `index`: accent for reached steps, neutral otherwise
fn segment_color(nav: &Navigator, index: usize) -> Color {
    let step = &nav.current_flow().steps[index];
    let state = nav.step_state(index);
    match state {
        StepState::Active | StepState::Passed => fade(step.accent_color, state.intensity()),
        StepState::Upcoming => fade_color(SEGMENT_EMPTY, state.intensity()),
    }
}

pub fn render_progress(area: Rect, nav: &Navigator, hits: &mut HitMap, frame: &mut Frame) {
    let count = nav.current_flow().steps.len();
    for (i, (x, w)) in segment_spans(area.width, count).into_iter().enumerate() {
        if w == 0 {
            continue;
        }
        let rect = Rect::new(area.x + x, area.y, w, 1);
        let glyph = "▀".repeat(w as usize);
        frame.render_widget(
            Paragraph::new(Span::styled(glyph, Style::default().fg(segment_color(nav, i)))),
            rect,
        );
        hits.push(rect, HitTarget::Segment(i));
    }
}
