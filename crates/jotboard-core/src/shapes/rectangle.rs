//! Rectangle shape.

use super::{ShapeId, ShapeStyle};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub id: ShapeId,
    /// Top-left corner position.
    pub position: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width,
            height,
            style: ShapeStyle::default(),
        }
    }

    /// Create a rectangle spanning two corner points.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        Self::new(
            Point::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            (p2.x - p1.x).abs(),
            (p2.y - p1.y).abs(),
        )
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    pub fn bounds(&self) -> Rect {
        self.as_rect()
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.as_rect().contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_creation() {
        let rect = Rectangle::new(Point::new(10.0, 20.0), 100.0, 50.0);
        assert!((rect.position.x - 10.0).abs() < f64::EPSILON);
        assert!((rect.position.y - 20.0).abs() < f64::EPSILON);
        assert!((rect.width - 100.0).abs() < f64::EPSILON);
        assert!((rect.height - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rectangle_from_corners() {
        let rect = Rectangle::from_corners(Point::new(100.0, 100.0), Point::new(50.0, 50.0));
        assert!((rect.position.x - 50.0).abs() < f64::EPSILON);
        assert!((rect.position.y - 50.0).abs() < f64::EPSILON);
        assert!((rect.width - 50.0).abs() < f64::EPSILON);
        assert!((rect.height - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_contains_point() {
        let rect = Rectangle::new(Point::new(0.0, 0.0), 100.0, 100.0);
        assert!(rect.contains_point(Point::new(50.0, 50.0)));
        assert!(!rect.contains_point(Point::new(150.0, 50.0)));
    }

    #[test]
    fn test_bounds() {
        let rect = Rectangle::new(Point::new(10.0, 20.0), 100.0, 50.0);
        let bounds = rect.bounds();
        assert!((bounds.x1 - 110.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
    }
}
