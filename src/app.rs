//! Application state and core logic for the MSA flow walkthrough.
//!
//! This module contains the `App` struct which owns the navigator (catalog
//! plus cursor) and the view toggles, and translates terminal input events
//! into navigation transitions.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::Frame;
use tracing::{debug, warn};

use crate::error::NavigationError;
use crate::models::{Catalog, FlowId, HitTarget, Navigator};
use crate::ui::{self, HitMap, ViewOptions};

/// Rows moved by PageUp / PageDown inside the active card
const DETAIL_PAGE: u16 = 5;

/// Application state
pub struct App {
    pub navigator: Navigator,
    pub view: ViewOptions,
    // Clickable regions of the last drawn frame
    pub hits: HitMap,
    pub should_quit: bool,
}

impl App {
    pub fn new(catalog: Catalog, view: ViewOptions) -> Self {
        Self {
            navigator: Navigator::new(catalog),
            view,
            hits: HitMap::new(),
            should_quit: false,
        }
    }

    /// Start on a specific flow instead of the catalog default
    pub fn with_initial_flow(mut self, flow: FlowId) -> Result<Self, NavigationError> {
        self.navigator.select_flow(flow)?;
        Ok(self)
    }

    /// Draw a frame and remember its hit regions
    pub fn draw(&mut self, frame: &mut Frame) {
        self.hits = ui::draw(frame, &self.navigator, self.view);
        // A resize can leave less to scroll
        self.view.detail_scroll = self.view.detail_scroll.min(self.hits.detail_overflow());
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Run a navigator transition; the detail scroll belongs to the old step
    fn navigate(&mut self, transition: impl FnOnce(&mut Navigator)) {
        transition(&mut self.navigator);
        self.view.detail_scroll = 0;
    }

    /// Scroll the active card's detail, bounded by the last drawn frame
    fn scroll_detail(&mut self, down: bool, rows: u16) {
        let scroll = self.view.detail_scroll;
        self.view.detail_scroll = if down {
            scroll.saturating_add(rows).min(self.hits.detail_overflow())
        } else {
            scroll.saturating_sub(rows)
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Windows reports both press and release
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j')
            | KeyCode::Char(' ') | KeyCode::Enter => self.navigate(Navigator::next),
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k')
            | KeyCode::Backspace => self.navigate(Navigator::prev),
            KeyCode::Home | KeyCode::Char('g') => self.navigate(|nav| nav.go_to_step(0)),
            // Clamps to the last step of the current flow
            KeyCode::End | KeyCode::Char('G') => {
                self.navigate(|nav| nav.go_to_step(usize::MAX));
            }
            KeyCode::PageDown => self.scroll_detail(true, DETAIL_PAGE),
            KeyCode::PageUp => self.scroll_detail(false, DETAIL_PAGE),
            KeyCode::Tab => self.navigate(Navigator::next_flow),
            KeyCode::BackTab => self.navigate(Navigator::prev_flow),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.navigate(|nav| {
                    if !nav.select_flow_at(index) {
                        debug!(index, "no flow at position");
                    }
                });
            }
            KeyCode::Char('a') => {
                self.view.show_architecture = !self.view.show_architecture;
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        // The wheel scrolls a clipped active card while hovering it
        let over_clipped_card = self.hits.detail_overflow() > 0
            && self.hits.target_at(mouse.column, mouse.row)
                == Some(HitTarget::Step(self.navigator.active_step()));

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(target) = self.hits.target_at(mouse.column, mouse.row) {
                    self.activate(target);
                }
            }
            MouseEventKind::ScrollDown if over_clipped_card => self.scroll_detail(true, 1),
            MouseEventKind::ScrollUp if over_clipped_card => self.scroll_detail(false, 1),
            MouseEventKind::ScrollDown => self.navigate(Navigator::next),
            MouseEventKind::ScrollUp => self.navigate(Navigator::prev),
            _ => {}
        }
    }

    /// Perform the transition a clicked element stands for
    pub fn activate(&mut self, target: HitTarget) {
        match target {
            HitTarget::Flow(index) => {
                let Some(id) = self.navigator.catalog().flow_at(index).map(|f| f.id) else {
                    warn!(index, "click on a flow tab outside the catalog");
                    return;
                };
                self.navigate(|nav| {
                    if let Err(e) = nav.select_flow(id) {
                        warn!(error = %e, "ignoring flow selection");
                    }
                });
            }
            HitTarget::Step(index) | HitTarget::Segment(index) => {
                self.navigate(|nav| nav.go_to_step(index));
            }
            HitTarget::Prev => self.navigate(Navigator::prev),
            HitTarget::Next => self.navigate(Navigator::next),
        }
    }
}
