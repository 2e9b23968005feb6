//! Clickable regions recorded while drawing a frame

use ratatui::layout::{Position, Rect};

use crate::models::HitTarget;

/// Screen rectangles of the last drawn frame and what clicking them means
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
    // Detail rows of the active card that did not fit
    detail_overflow: u16,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Target under a terminal cell. Later regions win on overlap.
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, target)| *target)
    }

    pub fn set_detail_overflow(&mut self, rows: u16) {
        self.detail_overflow = rows;
    }

    /// Largest scroll offset that still changes the active card
    pub fn detail_overflow(&self) -> u16 {
        self.detail_overflow
    }

    /// First region registered for a target
    #[cfg(test)]
    pub fn area_of(&self, target: HitTarget) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, t)| *t == target)
            .map(|(area, _)| *area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_at() {
        let mut hits = HitMap::new();
        hits.push(Rect::new(0, 0, 10, 1), HitTarget::Flow(0));
        hits.push(Rect::new(0, 5, 40, 3), HitTarget::Step(2));

        assert_eq!(hits.target_at(3, 0), Some(HitTarget::Flow(0)));
        assert_eq!(hits.target_at(39, 7), Some(HitTarget::Step(2)));
        assert_eq!(hits.target_at(10, 0), None);
        assert_eq!(hits.target_at(5, 8), None);
    }

    #[test]
    fn test_later_region_wins() {
        let mut hits = HitMap::new();
        hits.push(Rect::new(0, 0, 20, 5), HitTarget::Step(0));
        hits.push(Rect::new(2, 2, 4, 1), HitTarget::Next);
        assert_eq!(hits.target_at(3, 2), Some(HitTarget::Next));
        assert_eq!(hits.target_at(1, 2), Some(HitTarget::Step(0)));
    }

    #[test]
    fn test_empty_areas_are_skipped() {
        let mut hits = HitMap::new();
        hits.push(Rect::new(0, 0, 0, 3), HitTarget::Prev);
        assert_eq!(hits, HitMap::new());
        assert_eq!(hits.area_of(HitTarget::Prev), None);
    }
}
