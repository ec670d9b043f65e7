//! Gesture Tracker
//!
//! Classifies a pointer position against the registered drop regions.
//! Item bands win over the slot, the slot wins over the background source
//! area, and anything else is no target at all.

use crate::geometry::{Point, Rect};

/// What the pointer currently hovers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverTarget {
    /// A specific card element
    Item(u32),
    /// The single-capacity answer slot
    Slot,
    /// The source list / background return area
    Source,
}

/// Which input front-end drives a session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    Mouse,
    Touch,
}

/// Mouse movement below this many pixels is still a click
const MOUSE_DRAG_THRESHOLD_PX: f64 = 5.0;

impl InputSource {
    /// Distance the pointer must travel before an armed session becomes active
    pub fn activation_threshold(self) -> f64 {
        match self {
            InputSource::Mouse => MOUSE_DRAG_THRESHOLD_PX,
            InputSource::Touch => 0.0,
        }
    }
}

/// Snapshot of the drop regions, measured fresh on every move
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegionMap {
    items: Vec<(u32, Rect)>,
    slot: Option<Rect>,
    source: Option<Rect>,
}

impl RegionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_item(&mut self, id: u32, rect: Rect) {
        self.items.push((id, rect));
    }

    pub fn set_slot(&mut self, rect: Rect) {
        self.slot = Some(rect);
    }

    pub fn set_source(&mut self, rect: Rect) {
        self.source = Some(rect);
    }

    pub fn with_item(mut self, id: u32, rect: Rect) -> Self {
        self.push_item(id, rect);
        self
    }

    pub fn with_slot(mut self, rect: Rect) -> Self {
        self.set_slot(rect);
        self
    }

    pub fn with_source(mut self, rect: Rect) -> Self {
        self.set_source(rect);
        self
    }

    /// First matching region wins; `None` when nothing contains the point
    pub fn classify(&self, point: Point) -> Option<HoverTarget> {
        if let Some((id, _)) = self.items.iter().find(|(_, rect)| rect.contains_y(point.y)) {
            return Some(HoverTarget::Item(*id));
        }
        if self.slot.is_some_and(|rect| rect.contains(point)) {
            return Some(HoverTarget::Slot);
        }
        if self.source.is_some_and(|rect| rect.contains(point)) {
            return Some(HoverTarget::Source);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> RegionMap {
        // Slot near the top, source area along the bottom of a 1000px page
        RegionMap::new()
            .with_slot(Rect::new(200.0, 50.0, 600.0, 150.0))
            .with_source(Rect::new(0.0, 700.0, 1000.0, 300.0))
    }

    #[test]
    fn test_classify_slot_and_source() {
        let map = layout();
        assert_eq!(map.classify(Point::new(500.0, 100.0)), Some(HoverTarget::Slot));
        assert_eq!(map.classify(Point::new(20.0, 900.0)), Some(HoverTarget::Source));
        assert_eq!(map.classify(Point::new(20.0, 400.0)), None);
    }

    #[test]
    fn test_item_band_beats_slot() {
        let map = layout().with_item(2, Rect::new(220.0, 70.0, 300.0, 80.0));
        // Inside the slot and inside the item's vertical band
        assert_eq!(map.classify(Point::new(700.0, 100.0)), Some(HoverTarget::Item(2)));
        // Outside the band, still inside the slot
        assert_eq!(map.classify(Point::new(700.0, 190.0)), Some(HoverTarget::Slot));
    }

    #[test]
    fn test_item_band_matches_outside_horizontal_extent() {
        let map = RegionMap::new().with_item(7, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(map.classify(Point::new(900.0, 5.0)), Some(HoverTarget::Item(7)));
    }

    #[test]
    fn test_first_item_wins() {
        let map = RegionMap::new()
            .with_item(1, Rect::new(0.0, 0.0, 10.0, 100.0))
            .with_item(2, Rect::new(0.0, 50.0, 10.0, 100.0));
        assert_eq!(map.classify(Point::new(5.0, 75.0)), Some(HoverTarget::Item(1)));
    }

    #[test]
    fn test_slot_overlapping_source_takes_priority() {
        let map = RegionMap::new()
            .with_source(Rect::new(0.0, 0.0, 1000.0, 1000.0))
            .with_slot(Rect::new(100.0, 100.0, 100.0, 100.0));
        assert_eq!(map.classify(Point::new(150.0, 150.0)), Some(HoverTarget::Slot));
        assert_eq!(map.classify(Point::new(50.0, 50.0)), Some(HoverTarget::Source));
    }
}
