//! Freehand pen stroke.

use super::{points_bounds, ShapeId, ShapeStyle, STROKE_HIT_PADDING};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A freehand stroke (series of sampled points).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Freehand {
    pub id: ShapeId,
    /// Anchor position (the first sampled point).
    pub position: Point,
    /// Sampled points along the stroke, in scene coordinates.
    pub points: Vec<Point>,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Freehand {
    /// Create a stroke seeded with its first point.
    pub fn new(start: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            position: start,
            points: vec![start],
            style: ShapeStyle::default(),
        }
    }

    /// Create from existing points. An empty list anchors at the origin.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self {
            id: Uuid::new_v4(),
            position: points.first().copied().unwrap_or(Point::ZERO),
            points,
            style: ShapeStyle::default(),
        }
    }

    /// Append a sampled point.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounds(&self) -> Rect {
        if self.points.is_empty() {
            return Rect::from_origin_size(self.position, (0.0, 0.0));
        }
        points_bounds(&self.points)
    }

    /// Padded bounding-box containment (coarse stroke hit policy).
    pub fn contains_point(&self, point: Point) -> bool {
        self.bounds()
            .inflate(STROKE_HIT_PADDING, STROKE_HIT_PADDING)
            .contains(point)
    }
}
