//! Step navigation state machine
//!
//! The [`Navigator`] owns the catalog together with the cursor (selected
//! flow, active step). Its transition methods are the only way to move the
//! cursor, and every one of them keeps `step < steps.len()` for the selected
//! flow.

use tracing::debug;

use crate::error::NavigationError;
use crate::models::catalog::Catalog;
use crate::models::enums::StepState;
use crate::models::flow::{Flow, FlowId};

/// Current navigation position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub flow: FlowId,
    pub step: usize,
}

/// Catalog plus cursor
#[derive(Debug, Clone)]
pub struct Navigator {
    catalog: Catalog,
    // Display position of the selected flow
    flow_index: usize,
    step: usize,
}

impl Navigator {
    /// Start at the catalog's default flow, step 0
    pub fn new(catalog: Catalog) -> Self {
        let flow_index = catalog.position(catalog.default_flow()).unwrap_or(0);
        Self {
            catalog,
            flow_index,
            step: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cursor(&self) -> Cursor {
        Cursor {
            flow: self.current_flow().id,
            step: self.step,
        }
    }

    pub fn active_step(&self) -> usize {
        self.step
    }

    pub fn flow_index(&self) -> usize {
        self.flow_index
    }

    pub fn current_flow(&self) -> &Flow {
        &self.catalog.flows()[self.flow_index]
    }

    fn last_index(&self) -> usize {
        self.current_flow().last_index()
    }

    /// Switch flows. Progress always restarts at step 0, even when
    /// re-selecting the current flow.
    pub fn select_flow(&mut self, id: FlowId) -> Result<(), NavigationError> {
        let index = self
            .catalog
            .position(id)
            .ok_or(NavigationError::FlowNotInCatalog(id))?;
        debug!(from = %self.current_flow().id, to = %id, "select flow");
        self.flow_index = index;
        self.step = 0;
        Ok(())
    }

    /// Select the flow at a display position; out-of-range positions are ignored.
    pub fn select_flow_at(&mut self, index: usize) -> bool {
        match self.catalog.flow_at(index).map(|f| f.id) {
            Some(id) => self.select_flow(id).is_ok(),
            None => false,
        }
    }

    /// Select the following flow in display order, wrapping to the first
    pub fn next_flow(&mut self) {
        let len = self.catalog.len();
        self.select_flow_at((self.flow_index + 1) % len);
    }

    /// Select the preceding flow in display order, wrapping to the last
    pub fn prev_flow(&mut self) {
        let len = self.catalog.len();
        self.select_flow_at((self.flow_index + len - 1) % len);
    }

    /// Jump to a step. Indices past the end clamp to the last step.
    pub fn go_to_step(&mut self, index: usize) {
        let clamped = index.min(self.last_index());
        if clamped != self.step {
            debug!(flow = %self.current_flow().id, from = self.step, to = clamped, "go to step");
        }
        self.step = clamped;
    }

    /// Advance one step; no-op on the last step
    pub fn next(&mut self) {
        self.go_to_step(self.step.saturating_add(1));
    }

    /// Go back one step; no-op on step 0
    pub fn prev(&mut self) {
        self.go_to_step(self.step.saturating_sub(1));
    }

    pub fn is_first(&self) -> bool {
        self.step == 0
    }

    pub fn is_last(&self) -> bool {
        self.step == self.last_index()
    }

    /// Where step `index` sits relative to the cursor
    pub fn step_state(&self, index: usize) -> StepState {
        match index.cmp(&self.step) {
            std::cmp::Ordering::Less => StepState::Passed,
            std::cmp::Ordering::Equal => StepState::Active,
            std::cmp::Ordering::Greater => StepState::Upcoming,
        }
    }

    /// "n / m" position label
    pub fn position_label(&self) -> String {
        format!(
            "{} / {}",
            self.step + 1,
            self.current_flow().steps.len()
        )
    }
}
