//! Enums used throughout the walkthrough
//!
//! This module contains the small state enums shared by the navigator and
//! the renderer.

/// Position of a step relative to the cursor, for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Passed,   // Before the cursor - dimmed, progress segment half intensity
    Active,   // At the cursor - the only expanded card
    Upcoming, // After the cursor - collapsed and faint
}

impl StepState {
    /// Blend factor applied to the step's accent colour
    pub fn intensity(&self) -> f32 {
        match self {
            StepState::Active => 1.0,
            StepState::Passed => 0.5,
            StepState::Upcoming => 0.3,
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, StepState::Active)
    }
}

/// Clickable elements reported by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Flow(usize),    // Flow tab at a display position
    Step(usize),    // Step card
    Segment(usize), // Progress bar segment of a step
    Prev,
    Next,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_state_intensity_ordering() {
        assert!(StepState::Active.intensity() > StepState::Passed.intensity());
        assert!(StepState::Passed.intensity() > StepState::Upcoming.intensity());
    }

    #[test]
    fn test_only_active_is_expanded() {
        assert!(StepState::Active.is_expanded());
        assert!(!StepState::Passed.is_expanded());
        assert!(!StepState::Upcoming.is_expanded());
    }
}
