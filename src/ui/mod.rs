//! UI module for msa-flow-tui
//!
//! Rendering is a pure projection of the [`Navigator`] onto a ratatui frame.
//! Besides drawing, [`draw`] returns the [`HitMap`] of clickable regions so
//! the controller can translate mouse clicks into navigation transitions.

mod architecture;
mod controls;
mod header;
mod helpers;
mod hits;
mod progress;
mod steps;

pub use hits::HitMap;

use ratatui::{prelude::*, widgets::Block};

use crate::models::Navigator;
use crate::theme::BG_PRIMARY;

/// Content never grows wider than this many columns
const MAX_CONTENT_WIDTH: u16 = 100;

/// Minimum rows left for the step list before the overview panel is dropped
const MIN_STEPS_HEIGHT: u16 = 12;

/// View toggles that are not part of the navigation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub show_architecture: bool,
    /// Rows the active card's detail is scrolled by
    pub detail_scroll: u16,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            show_architecture: true,
            detail_scroll: 0,
        }
    }
}

/// Centered column of at most `MAX_CONTENT_WIDTH`, one column of margin
fn content_area(area: Rect) -> Rect {
    let width = area.width.saturating_sub(2).min(MAX_CONTENT_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Draw the whole walkthrough and return the clickable regions
pub fn draw(frame: &mut Frame, nav: &Navigator, view: ViewOptions) -> HitMap {
    let mut hits = HitMap::new();
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);

    let [body, hints_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    let body = content_area(body);

    let tabs_height = header::tab_rows(nav, body.width);
    // title(2) gap tabs gap heading progress gap ... controls
    let fixed = 2 + 1 + tabs_height + 1 + 1 + 1 + 1 + 1;

    let overview = nav
        .catalog()
        .architecture()
        .filter(|_| view.show_architecture)
        .map(|arch| (arch, architecture::panel_height(arch)))
        .filter(|(_, h)| body.height >= fixed + MIN_STEPS_HEIGHT + h);
    let arch_height = overview.map_or(0, |(_, h)| h);

    let [
        title_area,
        _,
        tabs_area,
        _,
        heading_area,
        progress_area,
        _,
        steps_area,
        controls_area,
        arch_area,
    ] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(tabs_height),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(arch_height),
    ])
    .areas(body);

    header::render_title(title_area, nav, frame);
    header::render_flow_tabs(tabs_area, nav, &mut hits, frame);
    header::render_flow_heading(heading_area, nav, frame);
    progress::render_progress(progress_area, nav, &mut hits, frame);
    steps::render_steps(steps_area, nav, view.detail_scroll, &mut hits, frame);
    controls::render_controls(controls_area, nav, &mut hits, frame);
    if let Some((arch, _)) = overview {
        architecture::render_architecture(arch_area, arch, frame);
    }
    controls::render_key_hints(hints_area, view, frame);

    hits
}
