//! Circle shape.

use super::{ShapeId, ShapeStyle};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A circle, positioned by its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub id: ShapeId,
    /// Center position.
    pub position: Point,
    /// Radius.
    pub radius: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Circle {
    /// Create a new circle.
    pub fn new(position: Point, radius: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            radius,
            style: ShapeStyle::default(),
        }
    }

    /// Create a circle centered at `center` reaching out to `edge`.
    pub fn from_center_and_edge(center: Point, edge: Point) -> Self {
        let radius = center.distance(edge);
        Self::new(center, radius)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x - self.radius,
            self.position.y - self.radius,
            self.position.x + self.radius,
            self.position.y + self.radius,
        )
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.position.distance(point) <= self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_bounds() {
        let circle = Circle::new(Point::new(50.0, 50.0), 10.0);
        let bounds = circle.bounds();
        assert!((bounds.x0 - 40.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 40.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 60.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_contains_point_euclidean() {
        let circle = Circle::new(Point::new(0.0, 0.0), 10.0);
        assert!(circle.contains_point(Point::new(7.0, 7.0)));
        // Inside the bounding box but outside the circle.
        assert!(!circle.contains_point(Point::new(9.0, 9.0)));
    }

    #[test]
    fn test_from_center_and_edge() {
        let circle = Circle::from_center_and_edge(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((circle.radius - 5.0).abs() < f64::EPSILON);
    }
}
