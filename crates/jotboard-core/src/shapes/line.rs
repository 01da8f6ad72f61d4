//! Line shape.

use super::{points_bounds, ShapeId, ShapeStyle, STROKE_HIT_PADDING};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A straight line segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub id: ShapeId,
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Line {
    /// Create a new line.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            style: ShapeStyle::default(),
        }
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Get the midpoint of the line.
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    pub fn bounds(&self) -> Rect {
        points_bounds(&[self.start, self.end])
    }

    /// Padded bounding-box containment (coarse stroke hit policy).
    pub fn contains_point(&self, point: Point) -> bool {
        self.bounds()
            .inflate(STROKE_HIT_PADDING, STROKE_HIT_PADDING)
            .contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_length_midpoint() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(30.0, 40.0));
        assert!((line.length() - 50.0).abs() < f64::EPSILON);
        let mid = line.midpoint();
        assert!((mid.x - 15.0).abs() < f64::EPSILON);
        assert!((mid.y - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_padded_hit() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        // Within the 10-unit pad of the bounding box.
        assert!(line.contains_point(Point::new(50.0, 8.0)));
        assert!(!line.contains_point(Point::new(50.0, 15.0)));
    }

    #[test]
    fn test_bounds_normalizes_corners() {
        let line = Line::new(Point::new(100.0, 50.0), Point::new(10.0, 80.0));
        let bounds = line.bounds();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 50.0).abs() < f64::EPSILON);
    }
}
