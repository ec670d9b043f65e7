//! Page-space geometry for hit-testing.
//!
//! All coordinates are page-relative (`pageX`/`pageY`), so a rectangle
//! measured once stays valid while the document scrolls.

/// Pointer position in page coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True if either axis moved strictly more than `threshold`
    pub fn moved_beyond(&self, origin: Point, threshold: f64) -> bool {
        (self.x - origin.x).abs() > threshold || (self.y - origin.y).abs() > threshold
    }
}

/// Axis-aligned rectangle in page coordinates (edges inclusive)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && self.contains_y(point.y)
    }

    /// Vertical band test, ignoring the horizontal axis
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.top && y <= self.bottom
    }

    /// Convert a viewport-relative `DOMRect` into page coordinates
    pub fn from_client(rect: &web_sys::DomRect, scroll_x: f64, scroll_y: f64) -> Self {
        Self {
            left: rect.left() + scroll_x,
            top: rect.top() + scroll_y,
            right: rect.right() + scroll_x,
            bottom: rect.bottom() + scroll_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_edge_inclusive() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(Point::new(10.0, 20.0)));
        assert!(rect.contains(Point::new(110.0, 70.0)));
        assert!(!rect.contains(Point::new(110.5, 40.0)));
        assert!(!rect.contains(Point::new(50.0, 19.9)));
    }

    #[test]
    fn test_vertical_band_ignores_x() {
        let rect = Rect::new(0.0, 100.0, 10.0, 10.0);
        assert!(rect.contains_y(105.0));
        assert!(!rect.contains(Point::new(500.0, 105.0)));
    }

    #[test]
    fn test_moved_beyond_threshold() {
        let origin = Point::new(100.0, 100.0);
        assert!(!Point::new(105.0, 95.0).moved_beyond(origin, 5.0));
        assert!(Point::new(100.0, 106.0).moved_beyond(origin, 5.0));
        assert!(Point::new(100.5, 100.0).moved_beyond(origin, 0.0));
        assert!(!origin.moved_beyond(origin, 0.0));
    }
}
